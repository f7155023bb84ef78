//! Timed minigames

use super::{announce_level_up, fetch};
use crate::context::Context;
use crate::notify::SCORE_SAVE_FAILED;
use crate::runner::{play_blocking, RunEnd};
use anyhow::Result;
use nuru_common::backend::{BackendError, Page};
use nuru_common::difficulty::session_difficulty;
use nuru_common::minigame::{
    new_game, submit_outcome, GameSession, SessionOutcome, Submission, LOGIN_TO_SAVE,
};
use nuru_common::{GameMode, MinigameConfig, NuruError};
use std::io::Write;
use tracing::info;

pub const GAME_ABANDONED: &str = "Game ended early, score not saved";

/// Configured game for `mode` in a language
///
/// The repeatable challenge needs no config; every other mode does.
pub fn find_config(
    configs: &[MinigameConfig],
    mode: GameMode,
) -> Result<Option<MinigameConfig>, NuruError> {
    let config = configs.iter().find(|c| c.game_mode == mode).cloned();
    match (mode, config) {
        (GameMode::RepeatableChallenge, config) => Ok(config),
        (_, Some(config)) => Ok(Some(config)),
        (_, None) => Err(NuruError::InvalidInput(format!(
            "{} is not available for this language yet",
            mode.title()
        ))),
    }
}

/// Build a session for the learner's level, with the game's instructions
pub fn prepare(ctx: &Context, mode: GameMode) -> Result<(GameSession, String)> {
    let progress = ctx.progress();
    let language_id = ctx.selected_language(progress.as_ref());
    let configs = fetch("Loading games...", "Failed to load minigames", || {
        ctx.backend
            .get_minigame_configs(language_id, Page::content())
    })?;
    let config = find_config(&configs, mode)?;

    let difficulty = session_difficulty(ctx.level(progress.as_ref()), mode, config.as_ref());
    let game = new_game(mode, language_id, &difficulty, &mut rand::thread_rng());
    let instructions = config
        .as_ref()
        .map(|c| c.instructions.clone())
        .unwrap_or_default();
    Ok((GameSession::new(game, &difficulty, config), instructions))
}

/// Save a finished session and report it
pub fn report(ctx: &Context, out: &mut dyn Write, outcome: &SessionOutcome) -> Result<()> {
    let before = ctx.progress();
    match submit_outcome(ctx.backend.as_ref(), outcome, ctx.authenticated()) {
        Ok(Submission::LoginRequired) => {
            ctx.notifier.info(out, LOGIN_TO_SAVE)?;
        }
        Ok(Submission::Submit { mode, xp_reward, .. }) => {
            let message = match mode {
                GameMode::RepeatableChallenge => format!("Challenge complete! +{} XP", xp_reward),
                _ => format!("Game complete! +{} XP", xp_reward),
            };
            ctx.notifier.success(out, &message)?;
            announce_level_up(ctx, out, before.as_ref())?;
        }
        Err(BackendError::Unauthenticated) => {
            ctx.notifier.info(out, LOGIN_TO_SAVE)?;
        }
        Err(e) => return Err(anyhow::Error::new(e).context(SCORE_SAVE_FAILED)),
    }
    Ok(())
}

/// Only a game that ran its course is saved
pub fn should_submit(end: RunEnd) -> bool {
    matches!(end, RunEnd::Completed | RunEnd::TimedOut)
}

pub fn run(ctx: &Context, out: &mut dyn Write, mode: GameMode) -> Result<()> {
    let (mut session, instructions) = prepare(ctx, mode)?;
    if !instructions.is_empty() {
        writeln!(out, "{}", instructions)?;
    }
    let end = play_blocking(&mut session, out, &ctx.notifier, ctx.speech.as_ref())?;
    let outcome = session.finish();
    info!(
        "{} finished ({:?}): score {}, {}/{} items",
        outcome.mode, end, outcome.score, outcome.completed, outcome.total
    );
    if !should_submit(end) {
        ctx.notifier.info(out, GAME_ABANDONED)?;
        return Ok(());
    }
    report(ctx, out, &outcome)
}
