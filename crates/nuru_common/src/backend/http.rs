//! HTTP transport for the backend actor.

use super::rpc::{RpcMethod, RpcRequest, RpcResponse};
use super::{BackendClient, BackendError, Page};
use crate::config::BackendConfig;
use crate::types::{
    ConversationScenario, CultureContent, GameMode, Language, MinigameConfig, UserProfile,
    UserProgress,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// JSON-RPC client posting every call to a single endpoint
pub struct HttpBackendClient {
    endpoint: String,
    timeout_secs: u64,
    session_token: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpBackendClient {
    pub fn new(config: &BackendConfig, session_token: Option<String>) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            timeout_secs: config.timeout_secs,
            session_token,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn call<T: DeserializeOwned>(
        &self,
        method: RpcMethod,
        params: Option<serde_json::Value>,
    ) -> Result<T, BackendError> {
        let request = RpcRequest::new(method, params);
        debug!("RPC {:?} -> {}", method, self.endpoint);

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.session_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().map_err(|e| {
            if e.is_timeout() {
                BackendError::Unavailable(format!(
                    "Request timeout after {} seconds",
                    self.timeout_secs
                ))
            } else {
                BackendError::Unavailable(format!("Request failed: {}", e))
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthenticated);
        }
        if !status.is_success() {
            return Err(BackendError::Unavailable(format!("HTTP status {}", status)));
        }

        let body: RpcResponse = response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        body.into_result(&request.id)
    }
}

fn page_params(page: Page) -> serde_json::Value {
    json!({ "offset": page.offset, "limit": page.limit })
}

fn language_page_params(language_id: u64, page: Page) -> serde_json::Value {
    json!({ "languageId": language_id, "offset": page.offset, "limit": page.limit })
}

impl BackendClient for HttpBackendClient {
    fn get_languages(&self, page: Page) -> Result<Vec<Language>, BackendError> {
        self.call(RpcMethod::GetLanguages, Some(page_params(page)))
    }

    fn get_culture_entries(
        &self,
        language_id: u64,
        page: Page,
    ) -> Result<Vec<CultureContent>, BackendError> {
        self.call(
            RpcMethod::GetCultureEntries,
            Some(language_page_params(language_id, page)),
        )
    }

    fn get_conversation_scenarios(
        &self,
        language_id: u64,
        page: Page,
    ) -> Result<Vec<ConversationScenario>, BackendError> {
        self.call(
            RpcMethod::GetConversationScenarios,
            Some(language_page_params(language_id, page)),
        )
    }

    fn get_minigame_configs(
        &self,
        language_id: u64,
        page: Page,
    ) -> Result<Vec<MinigameConfig>, BackendError> {
        self.call(
            RpcMethod::GetMinigameConfigs,
            Some(language_page_params(language_id, page)),
        )
    }

    fn get_user_progress(&self) -> Result<UserProgress, BackendError> {
        self.call(RpcMethod::GetUserProgress, None)
    }

    fn get_caller_user_profile(&self) -> Result<Option<UserProfile>, BackendError> {
        self.call(RpcMethod::GetCallerUserProfile, None)
    }

    fn save_caller_user_profile(&self, profile: &UserProfile) -> Result<(), BackendError> {
        self.call(
            RpcMethod::SaveCallerUserProfile,
            Some(json!({ "profile": profile })),
        )
    }

    fn set_selected_language(&self, language_id: u64) -> Result<(), BackendError> {
        self.call(
            RpcMethod::SetSelectedLanguage,
            Some(json!({ "languageId": language_id })),
        )
    }

    fn complete_culture_entry(&self, entry_id: u64, xp_reward: u64) -> Result<(), BackendError> {
        self.call(
            RpcMethod::CompleteCultureEntry,
            Some(json!({ "entryId": entry_id, "xpReward": xp_reward })),
        )
    }

    fn complete_dialogue(&self, dialogue_id: u64, xp_reward: u64) -> Result<(), BackendError> {
        self.call(
            RpcMethod::CompleteDialogue,
            Some(json!({ "dialogueId": dialogue_id, "xpReward": xp_reward })),
        )
    }

    fn complete_minigame(
        &self,
        mode: GameMode,
        xp_reward: u64,
        score: u64,
    ) -> Result<(), BackendError> {
        self.call(
            RpcMethod::CompleteMinigame,
            Some(json!({ "gameMode": mode, "xpReward": xp_reward, "score": score })),
        )
    }
}
