//! Learning path: units of culture and conversation nodes

use super::{complete_item, conversation, culture, fetch, CompletionKind};
use crate::context::Context;
use crate::display::{dim, heading};
use anyhow::Result;
use nuru_common::backend::Page;
use nuru_common::learning_path::{
    build_learning_path, units, NodeKind, NodePayload, PathNode, LEARNING_PATH_NODE_LIMIT,
};
use nuru_common::NuruError;
use std::io::Write;

pub const NODE_LOCKED: &str = "This lesson is locked. Complete the previous lessons first.";

fn load(ctx: &Context) -> Result<Vec<PathNode>> {
    let progress = ctx.progress();
    let language_id = ctx.selected_language(progress.as_ref());
    let entries = fetch("Loading culture...", "Failed to load culture entries", || {
        ctx.backend
            .get_culture_entries(language_id, Page::content())
    })?;
    let scenarios = fetch(
        "Loading conversations...",
        "Failed to load conversation scenarios",
        || {
            ctx.backend
                .get_conversation_scenarios(language_id, Page::content())
        },
    )?;
    Ok(build_learning_path(&entries, &scenarios, progress.as_ref()))
}

fn node_mark(node: &PathNode) -> &'static str {
    if node.is_completed {
        "[x]"
    } else if node.is_next_up {
        "[>]"
    } else if node.is_locked {
        "[locked]"
    } else {
        "[ ]"
    }
}

fn kind_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Culture => "Culture",
        NodeKind::Conversation => "Conversation",
    }
}

pub fn show(ctx: &Context, out: &mut dyn Write, all: bool) -> Result<()> {
    let mut nodes = load(ctx)?;
    let total = nodes.len();

    writeln!(out, "{}", heading("Learning Path", ctx.color()))?;
    if nodes.is_empty() {
        writeln!(out, "No lessons for this language yet.")?;
        return Ok(());
    }
    if !all {
        nodes.truncate(LEARNING_PATH_NODE_LIMIT);
    }

    let mut number = 0;
    for (title, unit) in units(&nodes) {
        writeln!(out)?;
        writeln!(out, "{}", title)?;
        for node in unit {
            number += 1;
            writeln!(
                out,
                "  {:<8} {:>2}. {} {}",
                node_mark(node),
                number,
                node.title,
                dim(
                    &format!("({}, +{} XP)", kind_label(node.kind()), node.xp_reward),
                    ctx.color()
                )
            )?;
        }
    }

    if nodes.len() < total {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            dim(
                &format!("{} more lessons, use --all to see them", total - nodes.len()),
                ctx.color()
            )
        )?;
    }
    Ok(())
}

/// Open node `n` (1-based, in path order)
pub fn open(ctx: &Context, out: &mut dyn Write, n: usize, complete: bool) -> Result<()> {
    let nodes = load(ctx)?;
    let node = n
        .checked_sub(1)
        .and_then(|i| nodes.get(i))
        .ok_or_else(|| NuruError::InvalidInput(format!("No lesson number {}", n)))?;

    if !ctx.config.path.lock_policy.can_open(node) {
        return Err(NuruError::InvalidInput(NODE_LOCKED.to_string()).into());
    }

    writeln!(out, "{}", dim(&node.unit_title, ctx.color()))?;
    let kind = match &node.payload {
        NodePayload::Culture(entry) => {
            culture::render_entry(ctx, out, entry)?;
            CompletionKind::CultureEntry
        }
        NodePayload::Conversation(scenario) => {
            conversation::render_dialogue(ctx, out, scenario)?;
            CompletionKind::Dialogue
        }
    };

    if complete {
        writeln!(out)?;
        complete_item(ctx, out, kind, node.content_id, node.xp_reward)?;
    }
    Ok(())
}
