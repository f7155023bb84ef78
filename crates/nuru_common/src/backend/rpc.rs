//! JSON-RPC 2.0 envelopes for backend actor calls.

use super::BackendError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Actor endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RpcMethod {
    GetLanguages,
    GetCultureEntries,
    GetConversationScenarios,
    GetMinigameConfigs,
    GetUserProgress,
    GetCallerUserProfile,
    SaveCallerUserProfile,
    SetSelectedLanguage,
    CompleteCultureEntry,
    CompleteDialogue,
    CompleteMinigame,
}

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: RpcMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
    pub id: String,
}

impl RpcRequest {
    pub fn new(method: RpcMethod, params: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method,
            params,
            id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: String,
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Code the actor uses for calls made without a session
pub const UNAUTHENTICATED_CODE: i32 = -32001;

impl RpcResponse {
    /// Decode the result payload, mapping actor errors
    ///
    /// A missing `result` decodes as JSON null, so unit and Option
    /// results need no special casing.
    pub fn into_result<T: DeserializeOwned>(self, request_id: &str) -> Result<T, BackendError> {
        if self.id != request_id {
            return Err(BackendError::InvalidResponse(format!(
                "response id {} does not match request {}",
                self.id, request_id
            )));
        }
        if let Some(error) = self.error {
            if error.code == UNAUTHENTICATED_CODE {
                return Err(BackendError::Unauthenticated);
            }
            return Err(BackendError::from_actor(error.code, error.message));
        }
        let value = self.result.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(value).map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn response(id: &str, body: serde_json::Value) -> RpcResponse {
        let mut value = body;
        value["jsonrpc"] = "2.0".into();
        value["id"] = id.into();
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let req = RpcRequest::new(
            RpcMethod::CompleteMinigame,
            Some(serde_json::json!({"gameMode": "wordMatch"})),
        );
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["method"], "completeMinigame");
        assert_eq!(json["jsonrpc"], "2.0");
        assert!(!req.id.is_empty());
    }

    #[test]
    fn test_decode_result() {
        let resp = response(
            "1",
            serde_json::json!({"result": [{"id": 2, "name": "Swahili", "description": "East Africa"}]}),
        );
        let langs: Vec<Language> = resp.into_result("1").unwrap();
        assert_eq!(langs[0].name, "Swahili");
    }

    #[test]
    fn test_decode_unit_and_null() {
        let resp = response("1", serde_json::json!({}));
        assert!(resp.into_result::<()>("1").is_ok());

        let resp = response("1", serde_json::json!({"result": null}));
        let profile: Option<Language> = resp.into_result("1").unwrap();
        assert!(profile.is_none());
    }

    #[test]
    fn test_decode_errors() {
        let resp = response(
            "1",
            serde_json::json!({"error": {"code": -32000, "message": "Dialogue already completed"}}),
        );
        assert!(resp.into_result::<()>("1").unwrap_err().is_already_completed());

        let resp = response(
            "1",
            serde_json::json!({"error": {"code": UNAUTHENTICATED_CODE, "message": "anonymous"}}),
        );
        assert!(matches!(
            resp.into_result::<()>("1"),
            Err(BackendError::Unauthenticated)
        ));

        let resp = response("2", serde_json::json!({"result": 1}));
        assert!(matches!(
            resp.into_result::<u64>("1"),
            Err(BackendError::InvalidResponse(_))
        ));
    }
}
