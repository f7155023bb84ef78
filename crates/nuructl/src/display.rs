//! Text rendering helpers shared by the commands

use nuru_common::progression::{format_xp, LearnerProgression, MAX_LEVEL};
use owo_colors::OwoColorize;

/// Width of XP and timer bars
pub const BAR_WIDTH: usize = 20;

/// Generate a progress bar: "[========------------]"
pub fn progress_bar(percent: f64, width: usize) -> String {
    let percent = percent.clamp(0.0, 100.0);
    let filled = ((percent / 100.0) * width as f64).floor() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), "-".repeat(empty))
}

/// "Level 3 - 420 XP"
pub fn level_line(progression: &LearnerProgression) -> String {
    format!(
        "Level {} - {} XP",
        progression.level,
        format_xp(progression.total_xp)
    )
}

/// Bar plus distance to the next level
pub fn xp_bar_line(progression: &LearnerProgression) -> String {
    let percent = progression.progress_percent();
    let bar = progress_bar(percent, BAR_WIDTH);
    if progression.level >= MAX_LEVEL {
        return format!("{} max level", bar);
    }
    format!(
        "{} {:.0}% - {} XP to Level {}",
        bar,
        percent,
        format_xp(progression.xp_to_next_level()),
        progression.level + 1
    )
}

/// Section heading, underlined when colored
pub fn heading(title: &str, color: bool) -> String {
    if color {
        title.bold().underline().to_string()
    } else {
        format!("{}\n{}", title, "-".repeat(title.chars().count()))
    }
}

/// Dim secondary text when colored
pub fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
