//! Transient notices: one-line success/info/error messages
//!
//! The terminal counterpart of toast notifications. Every user-facing
//! outcome of a command goes through here so wording stays in one place.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub const LANGUAGE_UPDATED: &str = "Language updated successfully!";
pub const LANGUAGE_UPDATE_FAILED: &str = "Failed to update language. Please try again.";
pub const LOGIN_FOR_LANGUAGE: &str = "Please log in to save your language selection";
pub const LOGIN_FOR_PROGRESS: &str = "Please log in to save your progress";
pub const LOGIN_HINT: &str = "Log in to save your language selection and track your progress";
pub const ENTRY_ALREADY_COMPLETED: &str = "You have already completed this entry";
pub const DIALOGUE_ALREADY_COMPLETED: &str = "You have already completed this dialogue";
pub const PROGRESS_SAVE_FAILED: &str = "Failed to save progress. Please try again.";
pub const SCORE_SAVE_FAILED: &str = "Failed to save score";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    fn tag(&self) -> &'static str {
        match self {
            NoticeKind::Success => "[OK]",
            NoticeKind::Info => "[NOTE]",
            NoticeKind::Error => "[ERROR]",
        }
    }
}

/// Writes notices, colored when the terminal allows it
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    color: bool,
}

impl Notifier {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn notice(&self, out: &mut dyn Write, kind: NoticeKind, message: &str) -> io::Result<()> {
        if !self.color {
            return writeln!(out, "{} {}", kind.tag(), message);
        }
        match kind {
            NoticeKind::Success => writeln!(out, "{} {}", kind.tag().bright_green(), message),
            NoticeKind::Info => writeln!(out, "{} {}", kind.tag().bright_cyan(), message),
            NoticeKind::Error => writeln!(out, "{} {}", kind.tag().bright_red(), message.red()),
        }
    }

    pub fn success(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        self.notice(out, NoticeKind::Success, message)
    }

    pub fn info(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        self.notice(out, NoticeKind::Info, message)
    }

    pub fn error(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        self.notice(out, NoticeKind::Error, message)
    }

    /// "Level Up! You've reached Level N"
    pub fn level_up(&self, out: &mut dyn Write, level: u64) -> io::Result<()> {
        let message = format!("Level Up! You've reached Level {}", level);
        if self.color {
            writeln!(out, "{} {}", "[LEVEL UP]".bright_yellow().bold(), message)
        } else {
            writeln!(out, "[LEVEL UP] {}", message)
        }
    }
}
