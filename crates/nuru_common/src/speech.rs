//! Speech synthesis seam.
//!
//! The client never depends on a particular TTS engine. The default engine
//! shells out to a configured command; without one, speech controls are
//! disabled with a fixed explanation.

use std::process::{Child, Command, Stdio};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Shown wherever a speech control is disabled
pub const SPEECH_UNSUPPORTED: &str = "Text-to-speech not supported on this system";

/// Synthesis language codes by language id
pub fn synthesis_code(language_id: u64) -> Option<&'static str> {
    match language_id {
        1 => Some("ar"),
        2 => Some("sw"),
        3 => Some("ha"),
        4 => Some("am"),
        5 => Some("yo"),
        6 => Some("zu"),
        _ => None,
    }
}

/// Recognition language codes (with region) by language id
pub fn recognition_code(language_id: u64) -> &'static str {
    match language_id {
        1 => "ar-SA",
        2 => "sw-KE",
        3 => "ha-NG",
        4 => "am-ET",
        5 => "yo-NG",
        6 => "zu-ZA",
        _ => "en-US",
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("{}", SPEECH_UNSUPPORTED)]
    Unsupported,

    #[error("Text-to-speech playback failed: {0}")]
    PlaybackFailed(String),
}

pub trait SpeechEngine: Send + Sync {
    /// Whether speak() can do anything at all
    fn is_available(&self) -> bool;

    /// Start speaking, cancelling any utterance still playing
    fn speak(&self, text: &str, language_id: u64) -> Result<(), SpeechError>;

    /// Stop the current utterance, if any
    fn cancel(&self);

    /// Block until the current utterance has played out
    fn finish(&self) {}
}

/// Engine used when nothing is configured
pub struct NoSpeech;

impl SpeechEngine for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _text: &str, _language_id: u64) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn cancel(&self) {}
}

/// Runs an external TTS program, e.g. `espeak-ng`
///
/// Invoked as `<program> [-v <code>] <text>`; the voice flag is omitted
/// for languages without a synthesis code.
pub struct CommandSpeech {
    program: String,
    current: Mutex<Option<Child>>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            current: Mutex::new(None),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn build_command(&self, text: &str, language_id: u64) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(code) = synthesis_code(language_id) {
            cmd.arg("-v").arg(code);
        }
        cmd.arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    fn take_current(&self) -> Option<Child> {
        self.current.lock().ok().and_then(|mut current| current.take())
    }
}

impl SpeechEngine for CommandSpeech {
    fn is_available(&self) -> bool {
        !self.program.trim().is_empty()
    }

    fn speak(&self, text: &str, language_id: u64) -> Result<(), SpeechError> {
        if !self.is_available() {
            return Err(SpeechError::Unsupported);
        }
        self.cancel();

        let child = self
            .build_command(text, language_id)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => SpeechError::Unsupported,
                _ => SpeechError::PlaybackFailed(e.to_string()),
            })?;

        debug!("Speaking via {} (pid {})", self.program, child.id());
        if let Ok(mut current) = self.current.lock() {
            *current = Some(child);
        }
        Ok(())
    }

    fn cancel(&self) {
        if let Some(mut child) = self.take_current() {
            // Best-effort: the utterance may already have finished
            if let Err(e) = child.kill() {
                debug!("Cancel found no running utterance: {}", e);
            }
            if let Err(e) = child.wait() {
                warn!("Failed to reap TTS process: {}", e);
            }
        }
    }

    fn finish(&self) {
        if let Some(mut child) = self.take_current() {
            match child.wait() {
                Ok(status) if !status.success() => debug!("TTS exited with {}", status),
                Ok(_) => {}
                Err(e) => warn!("Failed to wait for TTS process: {}", e),
            }
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Engine for an optional configured command
pub fn engine_for(program: Option<&str>) -> Box<dyn SpeechEngine> {
    match program.map(str::trim).filter(|p| !p.is_empty()) {
        Some(program) => Box::new(CommandSpeech::new(program)),
        None => Box::new(NoSpeech),
    }
}
