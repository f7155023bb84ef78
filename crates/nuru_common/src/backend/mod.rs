//! Backend actor client
//!
//! The backend owns every piece of durable state (profiles, progress,
//! catalogs). This module is the client side of its fixed contract:
//! - `BackendClient`: one method per actor endpoint
//! - `HttpBackendClient`: JSON-RPC 2.0 over HTTP
//! - `FakeBackend`: in-memory actor for tests and offline demos

pub mod fake;
pub mod http;
pub mod rpc;

pub use fake::FakeBackend;
pub use http::HttpBackendClient;

use crate::types::{
    ConversationScenario, CultureContent, GameMode, Language, MinigameConfig, UserProfile,
    UserProgress,
};
use serde::{Deserialize, Serialize};

/// Languages fetched per request
pub const LANGUAGE_PAGE_LIMIT: u64 = 100;

/// Content items fetched per request
pub const CONTENT_PAGE_LIMIT: u64 = 20;

/// Marker the actor puts in duplicate-completion errors
const ALREADY_COMPLETED_MARKER: &str = "already completed";

/// Offset/limit window into a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Page {
    pub fn first(limit: u64) -> Self {
        Self { offset: 0, limit }
    }

    pub fn languages() -> Self {
        Self::first(LANGUAGE_PAGE_LIMIT)
    }

    pub fn content() -> Self {
        Self::first(CONTENT_PAGE_LIMIT)
    }
}

/// Backend errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum BackendError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Not signed in")]
    Unauthenticated,

    #[error("{0}")]
    AlreadyCompleted(String),

    #[error("Backend rejected call ({code}): {message}")]
    Rejected { code: i32, message: String },

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// Classify an actor error message
    ///
    /// The actor reports duplicate completions only through its message
    /// text, so this substring check is the one place that taxonomy lives.
    pub fn from_actor(code: i32, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.to_lowercase().contains(ALREADY_COMPLETED_MARKER) {
            BackendError::AlreadyCompleted(message)
        } else {
            BackendError::Rejected { code, message }
        }
    }

    pub fn is_already_completed(&self) -> bool {
        matches!(self, BackendError::AlreadyCompleted(_))
    }
}

/// Result of a completion mutation that the UI treats as success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    Recorded,
    AlreadyCompleted,
}

/// Fold the benign duplicate case into a non-error outcome
pub fn completion_outcome(result: Result<(), BackendError>) -> Result<CompletionOutcome, BackendError> {
    match result {
        Ok(()) => Ok(CompletionOutcome::Recorded),
        Err(BackendError::AlreadyCompleted(_)) => Ok(CompletionOutcome::AlreadyCompleted),
        Err(e) => Err(e),
    }
}

/// Client for the backend actor
pub trait BackendClient: Send + Sync {
    fn get_languages(&self, page: Page) -> Result<Vec<Language>, BackendError>;

    fn get_culture_entries(
        &self,
        language_id: u64,
        page: Page,
    ) -> Result<Vec<CultureContent>, BackendError>;

    fn get_conversation_scenarios(
        &self,
        language_id: u64,
        page: Page,
    ) -> Result<Vec<ConversationScenario>, BackendError>;

    fn get_minigame_configs(
        &self,
        language_id: u64,
        page: Page,
    ) -> Result<Vec<MinigameConfig>, BackendError>;

    fn get_user_progress(&self) -> Result<UserProgress, BackendError>;

    fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, BackendError>;

    fn save_caller_user_profile(&self, profile: &UserProfile) -> Result<(), BackendError>;

    fn set_selected_language(&self, language_id: u64) -> Result<(), BackendError>;

    fn complete_culture_entry(&self, entry_id: u64, xp_reward: u64) -> Result<(), BackendError>;

    fn complete_dialogue(&self, dialogue_id: u64, xp_reward: u64) -> Result<(), BackendError>;

    fn complete_minigame(
        &self,
        mode: GameMode,
        xp_reward: u64,
        score: u64,
    ) -> Result<(), BackendError>;
}

/// Progress snapshot, or None when it cannot be read (signed out, no
/// progress yet, backend hiccup)
pub fn progress_snapshot(client: &dyn BackendClient) -> Option<UserProgress> {
    match client.get_user_progress() {
        Ok(progress) => Some(progress),
        Err(e) => {
            tracing::debug!("No progress snapshot: {}", e);
            None
        }
    }
}

/// Caller profile, or None when signed out or unset
pub fn caller_profile(client: &dyn BackendClient) -> Option<UserProfile> {
    match client.get_caller_user_profile() {
        Ok(profile) => profile,
        Err(e) => {
            tracing::debug!("No caller profile: {}", e);
            None
        }
    }
}
