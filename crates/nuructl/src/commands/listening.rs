//! Listening practice

use crate::context::Context;
use crate::display::{dim, heading};
use anyhow::Result;
use nuru_common::listening::{find_lesson, lessons_by_category};
use nuru_common::speech::{recognition_code, synthesis_code, SpeechError, SPEECH_UNSUPPORTED};
use nuru_common::NuruError;
use std::io::Write;

/// Speech codes used for a language
pub fn voice_line(language_id: u64) -> String {
    format!(
        "Voice: {}  Recognition: {}",
        synthesis_code(language_id).unwrap_or("none"),
        recognition_code(language_id)
    )
}

pub fn list(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let progress = ctx.progress();
    let language_id = ctx.selected_language(progress.as_ref());

    writeln!(out, "{}", heading("Listening Practice", ctx.color()))?;
    writeln!(out, "{}", dim(&voice_line(language_id), ctx.color()))?;
    let groups = lessons_by_category(language_id);
    if groups.is_empty() {
        writeln!(out, "No listening lessons for this language yet.")?;
        return Ok(());
    }
    for (category, lessons) in groups {
        writeln!(out)?;
        writeln!(out, "{}", category)?;
        for lesson in lessons {
            writeln!(
                out,
                "  {:>2}  {}  {}",
                lesson.id,
                lesson.word,
                dim(lesson.translation, ctx.color())
            )?;
        }
    }
    if !ctx.speech.is_available() {
        writeln!(out)?;
        ctx.notifier.info(out, SPEECH_UNSUPPORTED)?;
    }
    Ok(())
}

pub fn speak(ctx: &Context, out: &mut dyn Write, lesson_id: u32) -> Result<()> {
    let progress = ctx.progress();
    let language_id = ctx.selected_language(progress.as_ref());
    let lesson = find_lesson(language_id, lesson_id)
        .ok_or_else(|| NuruError::InvalidInput(format!("No listening lesson {}", lesson_id)))?;

    writeln!(out, "{}  {}", lesson.word, dim(lesson.translation, ctx.color()))?;
    match ctx.speech.speak(lesson.word, language_id) {
        Ok(()) => {
            ctx.speech.finish();
            Ok(())
        }
        Err(SpeechError::Unsupported) => {
            ctx.notifier.info(out, SPEECH_UNSUPPORTED)?;
            Ok(())
        }
        Err(e) => Err(NuruError::from(e).into()),
    }
}
