//! Language listing and selection

use super::fetch;
use crate::context::Context;
use crate::display::{dim, heading};
use crate::notify::{LANGUAGE_UPDATED, LANGUAGE_UPDATE_FAILED, LOGIN_FOR_LANGUAGE};
use anyhow::Result;
use nuru_common::backend::{BackendError, Page};
use nuru_common::NuruError;
use std::io::Write;

pub fn list(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let progress = ctx.progress();
    let selected = ctx.selected_language(progress.as_ref());
    let languages = fetch("Loading languages...", "Failed to load languages", || {
        ctx.backend.get_languages(Page::languages())
    })?;

    writeln!(out, "{}", heading("Languages", ctx.color()))?;
    if languages.is_empty() {
        writeln!(out, "No languages available yet.")?;
        return Ok(());
    }
    for language in &languages {
        let marker = if language.id == selected { "*" } else { " " };
        writeln!(out, "{} {:>3}  {}", marker, language.id, language.name)?;
        writeln!(out, "       {}", dim(&language.description, ctx.color()))?;
    }
    Ok(())
}

pub fn select(ctx: &Context, out: &mut dyn Write, language_id: u64) -> Result<()> {
    if !ctx.authenticated() {
        ctx.notifier.info(out, LOGIN_FOR_LANGUAGE)?;
        return Ok(());
    }

    let languages = fetch("Loading languages...", "Failed to load languages", || {
        ctx.backend.get_languages(Page::languages())
    })?;
    let Some(language) = languages.iter().find(|l| l.id == language_id) else {
        return Err(NuruError::InvalidInput(format!("Unknown language id {}", language_id)).into());
    };

    match ctx.backend.set_selected_language(language_id) {
        Ok(()) => {
            tracing::info!("Selected language {} ({})", language.name, language_id);
            ctx.notifier.success(out, LANGUAGE_UPDATED)?;
            writeln!(out, "Now learning {}.", language.name)?;
            Ok(())
        }
        Err(BackendError::Unauthenticated) => {
            ctx.notifier.info(out, LOGIN_FOR_LANGUAGE)?;
            Ok(())
        }
        Err(e) => Err(anyhow::Error::new(e).context(LANGUAGE_UPDATE_FAILED)),
    }
}
