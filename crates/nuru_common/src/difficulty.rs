//! Difficulty scaling by learner level.
//!
//! | Band         | Levels | Time limit        | Items              | Distractors | Prompts |
//! |--------------|--------|-------------------|--------------------|-------------|---------|
//! | Beginner     | 1-10   | base              | max(3, base - 2)   | 2           | short   |
//! | Intermediate | 11-20  | max(30, base - 15)| base               | 3           | medium  |
//! | Advanced     | 21+    | max(20, base - 30)| min(base + 3, 8)   | 4           | long    |

use crate::types::{GameMode, MinigameConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptLength {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyParams {
    /// Session time budget in seconds
    pub time_limit: u64,
    /// Number of items/questions in a session
    pub item_count: usize,
    /// Number of wrong options shown next to the answer
    pub distractor_count: usize,
    pub prompt_length: PromptLength,
}

impl Default for DifficultyParams {
    fn default() -> Self {
        Self {
            time_limit: 60,
            item_count: 5,
            distractor_count: 2,
            prompt_length: PromptLength::Short,
        }
    }
}

/// Partial base overrides; unset fields keep the defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyOverrides {
    pub time_limit: Option<u64>,
    pub item_count: Option<usize>,
    pub distractor_count: Option<usize>,
    pub prompt_length: Option<PromptLength>,
}

impl DifficultyOverrides {
    fn apply(&self, base: DifficultyParams) -> DifficultyParams {
        DifficultyParams {
            time_limit: self.time_limit.unwrap_or(base.time_limit),
            item_count: self.item_count.unwrap_or(base.item_count),
            distractor_count: self.distractor_count.unwrap_or(base.distractor_count),
            prompt_length: self.prompt_length.unwrap_or(base.prompt_length),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyBand {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyBand {
    pub fn for_level(level: u64) -> Self {
        if level <= 10 {
            DifficultyBand::Beginner
        } else if level <= 20 {
            DifficultyBand::Intermediate
        } else {
            DifficultyBand::Advanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyBand::Beginner => "Beginner",
            DifficultyBand::Intermediate => "Intermediate",
            DifficultyBand::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Session parameters for a learner level
pub fn calculate_difficulty(level: u64, overrides: DifficultyOverrides) -> DifficultyParams {
    let base = overrides.apply(DifficultyParams::default());

    match DifficultyBand::for_level(level) {
        DifficultyBand::Beginner => DifficultyParams {
            time_limit: base.time_limit,
            item_count: base.item_count.saturating_sub(2).max(3),
            distractor_count: 2,
            prompt_length: PromptLength::Short,
        },
        DifficultyBand::Intermediate => DifficultyParams {
            time_limit: base.time_limit.saturating_sub(15).max(30),
            item_count: base.item_count,
            distractor_count: 3,
            prompt_length: PromptLength::Medium,
        },
        DifficultyBand::Advanced => DifficultyParams {
            time_limit: base.time_limit.saturating_sub(30).max(20),
            item_count: base.item_count.saturating_add(3).min(8),
            distractor_count: 4,
            prompt_length: PromptLength::Long,
        },
    }
}

pub fn difficulty_label(level: u64) -> &'static str {
    DifficultyBand::for_level(level).label()
}

/// Per-mode base overrides
pub fn game_mode_scaling(mode: GameMode) -> DifficultyOverrides {
    let (time_limit, item_count, distractor_count) = match mode {
        GameMode::WordMatch => (60, 5, None),
        GameMode::SentenceBuilder => (90, 5, None),
        GameMode::VocabularyQuiz => (120, 6, Some(3)),
        GameMode::ListeningComprehension => (60, 5, Some(3)),
        GameMode::RepeatableChallenge => (120, 10, Some(3)),
    };
    DifficultyOverrides {
        time_limit: Some(time_limit),
        item_count: Some(item_count),
        distractor_count,
        prompt_length: None,
    }
}

/// Difficulty for a minigame session, letting a backend time limit win
pub fn session_difficulty(
    level: u64,
    mode: GameMode,
    config: Option<&MinigameConfig>,
) -> DifficultyParams {
    let mut overrides = game_mode_scaling(mode);
    if let Some(limit) = config.and_then(|c| c.time_limit) {
        overrides.time_limit = Some(limit);
    }
    calculate_difficulty(level, overrides)
}
