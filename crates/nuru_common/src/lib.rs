//! Nuru Common - shared model and learning logic for the Nuru client
//!
//! Everything here is UI-agnostic: the progression and difficulty curves,
//! the learning path builder, minigame sessions, and the client side of the
//! backend actor contract.

pub mod backend;
pub mod config;
pub mod content;
pub mod difficulty;
pub mod error;
pub mod learning_path;
pub mod listening;
pub mod minigame;
pub mod progression;
pub mod speech;
pub mod types;

pub use error::{NuruError, Result};
pub use types::*;
