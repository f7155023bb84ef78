//! Level System
//!
//! ## XP Curve
//!
//! Total XP required for level L: floor(base_xp * growth^(L - 1)), with
//! level 1 pinned to 0.
//! - base_xp = 100
//! - growth = 1.5
//!
//! This means:
//! - Level 2: 150 XP
//! - Level 5: 506 XP
//! - Level 10: 3,844 XP
//! - Level 21: 332,525 XP

use serde::{Deserialize, Serialize};

/// Highest level the curve represents; level 100 overflows u64
pub const MAX_LEVEL: u64 = 99;

const BASE_XP: f64 = 100.0;
const GROWTH_FACTOR: f64 = 1.5;

/// Total XP required to reach a level
pub fn xp_for_level(level: u64) -> u64 {
    if level <= 1 {
        return 0;
    }
    let exponent = (level - 1).min(i32::MAX as u64) as i32;
    // `as` saturates, so levels past MAX_LEVEL pin to u64::MAX
    (BASE_XP * GROWTH_FACTOR.powi(exponent)).floor() as u64
}

/// Total XP required for the level after `current_level`
pub fn xp_for_next_level(current_level: u64) -> u64 {
    xp_for_level(current_level.saturating_add(1))
}

/// Progress through the current level as a percentage (0.0 - 100.0)
pub fn progress_percent(current_xp: u64, current_level: u64) -> f64 {
    if current_level >= MAX_LEVEL {
        return 100.0;
    }

    let level_xp = xp_for_level(current_level) as f64;
    let next_level_xp = xp_for_next_level(current_level) as f64;
    let needed = next_level_xp - level_xp;

    if needed <= 0.0 {
        return 100.0;
    }

    let earned = current_xp as f64 - level_xp;
    (earned / needed * 100.0).clamp(0.0, 100.0)
}

/// Level reached with the given total XP
pub fn level_from_xp(xp: u64) -> u64 {
    let mut level = 1;
    while level < MAX_LEVEL && xp_for_level(level + 1) <= xp {
        level += 1;
    }
    level
}

/// New level to announce, if `after` is a real level-up over `before`
///
/// Level 1 is never announced.
pub fn level_up(before: u64, after: u64) -> Option<u64> {
    (after > before && after > 1).then_some(after)
}

/// Thousands-separated XP for display ("12,345")
pub fn format_xp(xp: u64) -> String {
    let digits = xp.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A learner's progression snapshot as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerProgression {
    /// Total XP reported by the backend
    pub total_xp: u64,
    /// Level reported by the backend
    pub level: u64,
}

impl LearnerProgression {
    pub fn new(total_xp: u64, level: u64) -> Self {
        Self {
            total_xp,
            level: level.max(1),
        }
    }

    /// Total XP at which the next level starts
    pub fn next_level_xp(&self) -> u64 {
        xp_for_next_level(self.level)
    }

    /// XP still missing before the next level
    pub fn xp_to_next_level(&self) -> u64 {
        if self.level >= MAX_LEVEL {
            return 0;
        }
        self.next_level_xp().saturating_sub(self.total_xp)
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.total_xp, self.level)
    }
}

impl Default for LearnerProgression {
    fn default() -> Self {
        Self::new(0, 1)
    }
}
