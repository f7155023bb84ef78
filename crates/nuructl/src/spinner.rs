//! Loading spinner shown while waiting on the backend
//!
//! Only drawn when a user is attending the terminal; piped and scripted runs
//! get no spinner output at all.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        if !console::user_attended_stderr() {
            return Self::hidden();
        }

        let bar = ProgressBar::new_spinner();
        let style = if console::Term::stderr().features().wants_emoji() {
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "])
                .template("{spinner} {msg}")
        } else {
            ProgressStyle::default_spinner()
                .tick_strings(&["|", "/", "-", "\\", " "])
                .template("{spinner} {msg}")
        };
        if let Ok(style) = style {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(bar) }
    }

    pub fn hidden() -> Self {
        Self { bar: None }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    pub fn stop(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Run `f` behind a spinner
pub fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let spinner = Spinner::start(message);
    let result = f();
    spinner.stop();
    result
}
