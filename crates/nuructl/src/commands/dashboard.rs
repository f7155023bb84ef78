//! Dashboard: greeting, level, section counters and languages

use super::fetch;
use crate::context::Context;
use crate::display::{dim, heading, level_line, xp_bar_line};
use crate::notify::LOGIN_HINT;
use anyhow::Result;
use nuru_common::backend::Page;
use nuru_common::difficulty::difficulty_label;
use nuru_common::listening::lessons_for;
use std::io::Write;

pub fn run(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let progress = ctx.progress();
    let profile = ctx.profile();
    let languages = fetch("Loading languages...", "Failed to load languages", || {
        ctx.backend.get_languages(Page::languages())
    })?;
    let selected = ctx.selected_language(progress.as_ref());
    let color = ctx.color();

    match &profile {
        Some(profile) if !profile.name.is_empty() => {
            writeln!(out, "Welcome back to Nuru, {}!", profile.name)?
        }
        _ => writeln!(out, "Welcome to Nuru!")?,
    }

    if let Some(progress) = &progress {
        let progression = Context::progression(progress);
        writeln!(out, "{}", level_line(&progression))?;
        writeln!(out, "{}", xp_bar_line(&progression))?;
        writeln!(
            out,
            "{}",
            dim(
                &format!("Difficulty: {}", difficulty_label(progression.level)),
                color
            )
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", heading("Learning Sections", color))?;
    let (dialogues, culture, minigames) = progress
        .as_ref()
        .map(|p| {
            (
                p.completed_dialogues.len(),
                p.completed_culture_entries.len(),
                p.completed_minigames.len(),
            )
        })
        .unwrap_or_default();
    writeln!(out, "  Learning      follow your path (nuructl path)")?;
    writeln!(
        out,
        "  Listening     {} lessons (nuructl listening)",
        lessons_for(selected).len()
    )?;
    writeln!(out, "  Conversation  {} completed", dialogues)?;
    writeln!(out, "  Culture       {} read", culture)?;
    writeln!(out, "  Minigames     {} played", minigames)?;

    writeln!(out)?;
    writeln!(out, "{}", heading("Available Languages", color))?;
    for language in &languages {
        let marker = if language.id == selected { "*" } else { " " };
        writeln!(
            out,
            "{} {:>3}  {}  {}",
            marker,
            language.id,
            language.name,
            dim(&language.description, color)
        )?;
    }

    if !ctx.authenticated() {
        writeln!(out)?;
        ctx.notifier.info(out, LOGIN_HINT)?;
    }
    Ok(())
}
