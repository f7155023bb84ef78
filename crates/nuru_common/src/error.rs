//! Error types for Nuru.

use crate::backend::BackendError;
use crate::speech::SpeechError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NuruError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("{0}")]
    Speech(#[from] SpeechError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NuruError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            NuruError::Backend(BackendError::Unavailable(_)) => 70,
            NuruError::Backend(BackendError::InvalidResponse(_)) => 65,
            NuruError::InvalidInput(_) => 64,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, NuruError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err: NuruError = BackendError::Unavailable("down".into()).into();
        assert_eq!(err.exit_code(), 70);
        let err: NuruError = BackendError::InvalidResponse("garbled".into()).into();
        assert_eq!(err.exit_code(), 65);
        assert_eq!(NuruError::InvalidInput("bad".into()).exit_code(), 64);
        let err: NuruError = BackendError::Unauthenticated.into();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_speech_error_message_passes_through() {
        let err: NuruError = SpeechError::Unsupported.into();
        assert_eq!(err.to_string(), crate::speech::SPEECH_UNSUPPORTED);
    }
}
