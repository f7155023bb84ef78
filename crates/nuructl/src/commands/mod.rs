//! Command implementations
//!
//! Every command writes to a caller-supplied `Write` so the flows can be
//! driven against a fake backend and captured output in tests.

pub mod conversation;
pub mod culture;
pub mod dashboard;
pub mod languages;
pub mod listening;
pub mod path;
pub mod play;
pub mod profile;
pub mod session;

use crate::context::Context;
use crate::notify::{
    DIALOGUE_ALREADY_COMPLETED, ENTRY_ALREADY_COMPLETED, LOGIN_FOR_PROGRESS, PROGRESS_SAVE_FAILED,
};
use crate::spinner::with_spinner;
use anyhow::{Context as _, Result};
use nuru_common::backend::{completion_outcome, BackendError, CompletionOutcome};
use nuru_common::progression::level_up;
use nuru_common::UserProgress;
use std::io::Write;
use tracing::debug;

/// What a completion is recorded against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    CultureEntry,
    Dialogue,
}

impl CompletionKind {
    fn already_completed(&self) -> &'static str {
        match self {
            CompletionKind::CultureEntry => ENTRY_ALREADY_COMPLETED,
            CompletionKind::Dialogue => DIALOGUE_ALREADY_COMPLETED,
        }
    }
}

/// Fetch from the backend behind a spinner
pub(crate) fn fetch<T>(
    message: &str,
    failure: &'static str,
    f: impl FnOnce() -> Result<T, BackendError>,
) -> Result<T> {
    with_spinner(message, f).context(failure)
}

/// Record a culture entry or dialogue completion and report the outcome
pub fn complete_item(
    ctx: &Context,
    out: &mut dyn Write,
    kind: CompletionKind,
    content_id: u64,
    xp_reward: u64,
) -> Result<()> {
    if !ctx.authenticated() {
        ctx.notifier.info(out, LOGIN_FOR_PROGRESS)?;
        return Ok(());
    }

    let before = ctx.progress();
    let result = match kind {
        CompletionKind::CultureEntry => ctx.backend.complete_culture_entry(content_id, xp_reward),
        CompletionKind::Dialogue => ctx.backend.complete_dialogue(content_id, xp_reward),
    };

    match completion_outcome(result) {
        Ok(CompletionOutcome::Recorded) => {
            debug!("Recorded {:?} {} (+{} XP)", kind, content_id, xp_reward);
            ctx.notifier
                .success(out, &format!("Completed! +{} XP", xp_reward))?;
            announce_level_up(ctx, out, before.as_ref())?;
        }
        Ok(CompletionOutcome::AlreadyCompleted) => {
            ctx.notifier.info(out, kind.already_completed())?;
        }
        Err(BackendError::Unauthenticated) => {
            ctx.notifier.info(out, LOGIN_FOR_PROGRESS)?;
        }
        Err(e) => return Err(anyhow::Error::new(e).context(PROGRESS_SAVE_FAILED)),
    }
    Ok(())
}

/// Compare levels around an XP award and announce a level-up
pub fn announce_level_up(
    ctx: &Context,
    out: &mut dyn Write,
    before: Option<&UserProgress>,
) -> Result<()> {
    let before_level = before.map(|p| p.level).unwrap_or(1);
    if let Some(after) = ctx.progress() {
        if let Some(level) = level_up(before_level, after.level) {
            ctx.notifier.level_up(out, level)?;
        }
    }
    Ok(())
}

/// Mark shown next to completed items
pub(crate) fn done_mark(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}
