//! Error codes and exit status for nuructl

use nuru_common::backend::BackendError;
use nuru_common::NuruError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when a command cannot run as asked (bad index, locked node)
pub const EXIT_COMMAND_NOT_AVAILABLE: i32 = 64;

/// Exit code when the backend returns a response we cannot decode
pub const EXIT_INVALID_RESPONSE: i32 = 65;

/// Exit code when the backend is unavailable/unreachable
pub const EXIT_BACKEND_UNAVAILABLE: i32 = 70;

/// Exit status for an error bubbled up to main
///
/// Looks through the anyhow context chain for the first typed error.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<NuruError>() {
            return e.exit_code();
        }
        if let Some(e) = cause.downcast_ref::<BackendError>() {
            return match e {
                BackendError::Unavailable(_) => EXIT_BACKEND_UNAVAILABLE,
                BackendError::InvalidResponse(_) => EXIT_INVALID_RESPONSE,
                _ => EXIT_GENERAL_ERROR,
            };
        }
    }
    EXIT_GENERAL_ERROR
}
