//! Culture entries: list, read, complete

use super::{complete_item, done_mark, fetch, CompletionKind};
use crate::context::Context;
use crate::display::{dim, heading};
use anyhow::Result;
use nuru_common::backend::Page;
use nuru_common::content::{
    culture_display_text, culture_entry_id, culture_preview, culture_translation,
    is_culture_completed, CultureFilter,
};
use nuru_common::{CultureContent, NuruError};
use std::io::Write;

fn filter_for(history: bool) -> CultureFilter {
    if history {
        CultureFilter::History
    } else {
        CultureFilter::All
    }
}

fn load(ctx: &Context, language_id: u64) -> Result<Vec<CultureContent>> {
    fetch("Loading culture...", "Failed to load culture entries", || {
        ctx.backend
            .get_culture_entries(language_id, Page::content())
    })
}

pub fn list(ctx: &Context, out: &mut dyn Write, history: bool) -> Result<()> {
    let progress = ctx.progress();
    let language_id = ctx.selected_language(progress.as_ref());
    let entries = load(ctx, language_id)?;
    let completed = progress
        .as_ref()
        .map(|p| p.completed_culture_entries.as_slice())
        .unwrap_or_default();

    let title = if history { "Culture - History" } else { "Culture" };
    writeln!(out, "{}", heading(title, ctx.color()))?;

    let shown = filter_for(history).apply(&entries);
    if shown.is_empty() {
        writeln!(out, "No culture entries for this language yet.")?;
        return Ok(());
    }
    for (i, entry) in shown.iter().enumerate() {
        writeln!(
            out,
            "{} {:>2}. {} (+{} XP)",
            done_mark(is_culture_completed(entry, completed)),
            i + 1,
            entry.title,
            entry.xp_reward
        )?;
        writeln!(out, "       {}", dim(&culture_preview(entry), ctx.color()))?;
    }
    Ok(())
}

/// Full text of an entry
pub fn render_entry(ctx: &Context, out: &mut dyn Write, entry: &CultureContent) -> Result<()> {
    writeln!(out, "{}", heading(&entry.title, ctx.color()))?;
    writeln!(out, "{}", culture_display_text(entry))?;
    if let Some(translation) = culture_translation(entry) {
        writeln!(out, "{}", dim(translation, ctx.color()))?;
    }
    if !entry.language_text.is_empty() && !entry.content.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", entry.content)?;
    }
    writeln!(out)?;
    writeln!(out, "Reward: +{} XP", entry.xp_reward)?;
    Ok(())
}

/// Read entry `n` (1-based, as numbered by `list` with the same filter)
pub fn read(
    ctx: &Context,
    out: &mut dyn Write,
    history: bool,
    n: usize,
    complete: bool,
) -> Result<()> {
    let progress = ctx.progress();
    let language_id = ctx.selected_language(progress.as_ref());
    let entries = load(ctx, language_id)?;
    let shown = filter_for(history).apply(&entries);

    let entry = n
        .checked_sub(1)
        .and_then(|i| shown.get(i))
        .ok_or_else(|| NuruError::InvalidInput(format!("No culture entry number {}", n)))?;

    render_entry(ctx, out, entry)?;
    if complete {
        writeln!(out)?;
        complete_item(
            ctx,
            out,
            CompletionKind::CultureEntry,
            culture_entry_id(&entry.title),
            entry.xp_reward,
        )?;
    }
    Ok(())
}
