//! Learner profile

use super::fetch;
use crate::context::Context;
use crate::display::{heading, level_line, xp_bar_line};
use crate::notify::LOGIN_FOR_PROGRESS;
use anyhow::Result;
use nuru_common::backend::Page;
use nuru_common::progression::LearnerProgression;
use nuru_common::{NuruError, UserProfile};
use std::io::Write;

pub const NO_PROFILE: &str = "No profile yet, run `nuructl profile setup <name>`";

pub fn show(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    if !ctx.authenticated() {
        ctx.notifier.info(out, LOGIN_FOR_PROGRESS)?;
        return Ok(());
    }
    let Some(profile) = ctx.profile() else {
        ctx.notifier.info(out, NO_PROFILE)?;
        return Ok(());
    };

    let languages = fetch("Loading languages...", "Failed to load languages", || {
        ctx.backend.get_languages(Page::languages())
    })?;
    let language = languages
        .iter()
        .find(|l| l.id == profile.selected_language)
        .map(|l| l.name.as_str())
        .unwrap_or("Not selected");

    let progression = LearnerProgression::new(profile.xp, profile.level);
    writeln!(out, "{}", heading(&profile.name, ctx.color()))?;
    writeln!(out, "{}", level_line(&progression))?;
    writeln!(out, "{}", xp_bar_line(&progression))?;
    writeln!(out, "Learning: {}", language)?;
    Ok(())
}

pub fn setup(ctx: &Context, out: &mut dyn Write, name: &str) -> Result<()> {
    if !ctx.authenticated() {
        ctx.notifier.info(out, LOGIN_FOR_PROGRESS)?;
        return Ok(());
    }
    let existing = ctx.profile();
    // Renaming keeps the learner's XP, level and language
    let profile = match &existing {
        Some(current) => UserProfile {
            name: name.trim().to_string(),
            ..current.clone()
        },
        None => UserProfile::new(name),
    };
    if profile.name.is_empty() {
        return Err(NuruError::InvalidInput("Name cannot be empty".to_string()).into());
    }

    fetch("Saving profile...", "Failed to save profile", || {
        ctx.backend.save_caller_user_profile(&profile)
    })?;
    tracing::info!("Saved profile for {}", profile.name);
    let message = match existing {
        Some(_) => format!("Profile updated, you are now {}.", profile.name),
        None => format!("Welcome, {}! Your profile is ready.", profile.name),
    };
    ctx.notifier.success(out, &message)?;
    Ok(())
}
