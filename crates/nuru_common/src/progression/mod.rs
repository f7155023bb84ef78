//! Progression Module
//!
//! XP thresholds, level derivation and progress display for learners.
//!
//! ## Level System
//!
//! - Levels 1-99 on an exponential curve (x1.5 per level)
//! - Level 1 starts at 0 XP, level 2 needs 150 XP
//! - XP is awarded by the backend per completed activity; this module only
//!   interprets it for display

pub mod levels;

pub use levels::{
    format_xp, level_from_xp, level_up, progress_percent, xp_for_level, xp_for_next_level,
    LearnerProgression, MAX_LEVEL,
};
