//! Conversation scenarios

use super::{complete_item, done_mark, fetch, CompletionKind};
use crate::context::Context;
use crate::display::{dim, heading};
use anyhow::Result;
use nuru_common::backend::Page;
use nuru_common::content::{step_prompt, step_response, DialogueWalk};
use nuru_common::{ConversationScenario, NuruError};
use std::io::Write;

fn load(ctx: &Context, language_id: u64) -> Result<Vec<ConversationScenario>> {
    fetch(
        "Loading conversations...",
        "Failed to load conversation scenarios",
        || {
            ctx.backend
                .get_conversation_scenarios(language_id, Page::content())
        },
    )
}

pub fn list(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let progress = ctx.progress();
    let language_id = ctx.selected_language(progress.as_ref());
    let scenarios = load(ctx, language_id)?;
    let completed = progress
        .as_ref()
        .map(|p| p.completed_dialogues.as_slice())
        .unwrap_or_default();

    writeln!(out, "{}", heading("Conversations", ctx.color()))?;
    if scenarios.is_empty() {
        writeln!(out, "No conversation scenarios for this language yet.")?;
        return Ok(());
    }
    for scenario in &scenarios {
        writeln!(
            out,
            "{} {:>3}  {} ({} steps, +{} XP)",
            done_mark(completed.contains(&scenario.id)),
            scenario.id,
            scenario.title,
            scenario.steps.len(),
            scenario.xp_reward
        )?;
        writeln!(out, "        {}", dim(&scenario.description, ctx.color()))?;
    }
    Ok(())
}

/// Print every step of a scenario in order
pub fn render_dialogue(
    ctx: &Context,
    out: &mut dyn Write,
    scenario: &ConversationScenario,
) -> Result<()> {
    writeln!(out, "{}", heading(&scenario.title, ctx.color()))?;
    writeln!(out, "{}", dim(&scenario.description, ctx.color()))?;

    let mut walk = DialogueWalk::new(scenario);
    if walk.is_empty() {
        writeln!(out, "This scenario has no dialogue yet.")?;
        return Ok(());
    }
    while let Some(step) = walk.current_step() {
        writeln!(out)?;
        writeln!(out, "Step {} of {}", walk.position() + 1, walk.len())?;
        writeln!(out, "  {}: {}", step.speaker, step_prompt(step))?;
        let response = step_response(step);
        if !response.is_empty() {
            writeln!(out, "  You: {}", response)?;
        }
        if !walk.advance() {
            break;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub fn play(ctx: &Context, out: &mut dyn Write, scenario_id: u64) -> Result<()> {
    let progress = ctx.progress();
    let language_id = ctx.selected_language(progress.as_ref());
    let scenarios = load(ctx, language_id)?;
    let scenario = scenarios
        .iter()
        .find(|s| s.id == scenario_id)
        .ok_or_else(|| NuruError::InvalidInput(format!("No conversation with id {}", scenario_id)))?;

    render_dialogue(ctx, out, scenario)?;
    complete_item(
        ctx,
        out,
        CompletionKind::Dialogue,
        scenario.id,
        scenario.xp_reward,
    )
}
