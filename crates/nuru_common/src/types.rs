//! Wire types shared with the backend actor.
//!
//! Field names follow the actor's camelCase contract; integer ids and XP
//! amounts are unsigned 64-bit on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language id used when the user has not picked one yet
pub const DEFAULT_LANGUAGE_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: u64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureContent {
    pub title: String,
    pub content: String,
    pub xp_reward: u64,
    #[serde(default)]
    pub language_text: String,
    #[serde(default)]
    pub translated_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueStep {
    pub speaker: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub expected_response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationScenario {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub language_id: u64,
    pub xp_reward: u64,
    pub steps: Vec<DialogueStep>,
}

/// The five minigame variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    WordMatch,
    SentenceBuilder,
    VocabularyQuiz,
    ListeningComprehension,
    RepeatableChallenge,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::WordMatch,
        GameMode::SentenceBuilder,
        GameMode::VocabularyQuiz,
        GameMode::ListeningComprehension,
        GameMode::RepeatableChallenge,
    ];

    /// Points awarded per correct answer
    pub fn points_per_correct(&self) -> u64 {
        match self {
            GameMode::WordMatch => 10,
            GameMode::SentenceBuilder => 20,
            GameMode::VocabularyQuiz => 10,
            GameMode::ListeningComprehension => 10,
            GameMode::RepeatableChallenge => 15,
        }
    }

    /// Wire name (camelCase)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::WordMatch => "wordMatch",
            GameMode::SentenceBuilder => "sentenceBuilder",
            GameMode::VocabularyQuiz => "vocabularyQuiz",
            GameMode::ListeningComprehension => "listeningComprehension",
            GameMode::RepeatableChallenge => "repeatableChallenge",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameMode::WordMatch => "Word Match",
            GameMode::SentenceBuilder => "Sentence Builder",
            GameMode::VocabularyQuiz => "Vocabulary Quiz",
            GameMode::ListeningComprehension => "Listening Comprehension",
            GameMode::RepeatableChallenge => "Repeatable Challenge",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    /// Accepts the wire name or a kebab-case alias ("word-match")
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().to_lowercase() == normalized)
            .ok_or_else(|| format!("unknown game mode: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinigameConfig {
    pub id: u64,
    pub language_id: u64,
    pub game_mode: GameMode,
    pub difficulty: u64,
    pub xp_reward: u64,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u64>,
}

/// A recorded minigame result: (xp awarded, mode, score)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedMinigame(pub u64, pub GameMode, pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub xp: u64,
    pub level: u64,
    pub selected_language: u64,
    #[serde(default)]
    pub completed_culture_entries: Vec<u64>,
    #[serde(default)]
    pub completed_dialogues: Vec<u64>,
    #[serde(default)]
    pub completed_minigames: Vec<CompletedMinigame>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            selected_language: DEFAULT_LANGUAGE_ID,
            completed_culture_entries: Vec::new(),
            completed_dialogues: Vec::new(),
            completed_minigames: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub xp: u64,
    pub level: u64,
    pub selected_language: u64,
}

impl UserProfile {
    /// Fresh profile created by first-run setup
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            xp: 0,
            level: 1,
            selected_language: DEFAULT_LANGUAGE_ID,
        }
    }
}
