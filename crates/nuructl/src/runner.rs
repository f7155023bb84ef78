//! Terminal driver for a minigame session
//!
//! One input line per answer, raced against a one-second countdown tick.
//! "q" leaves early; closing stdin ends the game as well.

use crate::display::{progress_bar, BAR_WIDTH};
use crate::notify::Notifier;
use anyhow::{Context as _, Result};
use nuru_common::minigame::{Feedback, GameSession, Prompt};
use nuru_common::speech::{SpeechEngine, SpeechError};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Instant};
use tracing::{debug, warn};

/// Seconds left when the runner prints a warning
const LOW_TIME_WARNING: u64 = 10;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    /// Every item answered
    Completed,
    TimedOut,
    /// Player typed "q"
    Quit,
    /// Input closed before the game was over
    InputClosed,
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit")
}

fn write_prompt(
    out: &mut dyn Write,
    session: &GameSession,
    prompt: &Prompt,
    speech: &dyn SpeechEngine,
) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Score: {}  Items: {}/{}  Time: {} {}s",
        session.score(),
        session.completed_items(),
        session.total_items(),
        progress_bar(session.time_percent(), BAR_WIDTH),
        session.time_left()
    )?;
    writeln!(out, "{}", prompt.text)?;
    for (i, choice) in prompt.choices.iter().enumerate() {
        writeln!(out, "  {:>2}. {}", i + 1, choice)?;
    }
    out.flush()?;

    if let Some(utterance) = &prompt.speak {
        match speech.speak(&utterance.text, utterance.language_id) {
            Ok(()) => {}
            Err(SpeechError::Unsupported) => debug!("Speech unavailable, prompt shown as text"),
            Err(e) => warn!("{}", e),
        }
    }
    Ok(())
}

fn write_feedback(out: &mut dyn Write, notifier: &Notifier, feedback: &Feedback) -> Result<()> {
    match feedback {
        Feedback::Selected(tile) => writeln!(out, "Selected \"{}\", now pick its match", tile)?,
        Feedback::Matched { word, translation } => {
            notifier.success(out, &format!("Correct! {} = {}", word, translation))?
        }
        Feedback::Mismatch => notifier.error(out, "Wrong answer!")?,
        Feedback::Correct => notifier.success(out, "Correct!")?,
        Feedback::Wrong { answer } => {
            notifier.error(out, &format!("Wrong! The correct answer is: {}", answer))?
        }
        Feedback::TryAgain => notifier.info(out, "Try again!")?,
        Feedback::Invalid(message) => notifier.info(out, message)?,
    }
    Ok(())
}

/// Drive `session` until it is over, the player quits or input closes
pub async fn run_session<R>(
    session: &mut GameSession,
    input: R,
    out: &mut dyn Write,
    notifier: &Notifier,
    speech: &dyn SpeechEngine,
) -> Result<RunEnd>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let second = Duration::from_secs(1);
    let mut ticker = interval_at(Instant::now() + second, second);

    writeln!(
        out,
        "{}: {} seconds, type the number of your answer (q to quit)",
        session.mode().title(),
        session.time_limit()
    )?;
    if let Some(prompt) = session.prompt() {
        write_prompt(out, session, &prompt, speech)?;
    }

    let end = loop {
        if session.is_over() {
            break RunEnd::Completed;
        }
        tokio::select! {
            _ = ticker.tick() => {
                if session.tick() {
                    speech.cancel();
                    writeln!(out)?;
                    notifier.info(out, "Time's up!")?;
                    break RunEnd::TimedOut;
                }
                if session.time_left() == LOW_TIME_WARNING {
                    notifier.info(out, &format!("{} seconds left!", LOW_TIME_WARNING))?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read answer")? else {
                    break RunEnd::InputClosed;
                };
                let answer = line.trim();
                if answer.is_empty() {
                    continue;
                }
                if is_quit(answer) {
                    break RunEnd::Quit;
                }
                speech.cancel();
                let feedback = session.respond(answer);
                write_feedback(out, notifier, &feedback)?;
                if let Some(prompt) = session.prompt() {
                    write_prompt(out, session, &prompt, speech)?;
                }
            }
        }
    };

    speech.cancel();
    debug!("{} session ended: {:?}", session.mode(), end);
    writeln!(out)?;
    writeln!(out, "Final Score: {} points", session.score())?;
    Ok(end)
}

/// Run a session against stdin on a single-threaded runtime
pub fn play_blocking(
    session: &mut GameSession,
    out: &mut dyn Write,
    notifier: &Notifier,
    speech: &dyn SpeechEngine,
) -> Result<RunEnd> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start game timer")?;
    let input = BufReader::new(tokio::io::stdin());
    let end = runtime.block_on(run_session(session, input, out, notifier, speech));
    // The stdin reader sits on a blocking thread that never returns
    runtime.shutdown_background();
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuru_common::difficulty::session_difficulty;
    use nuru_common::minigame::new_game;
    use nuru_common::speech::NoSpeech;
    use nuru_common::GameMode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(mode: GameMode) -> GameSession {
        let difficulty = session_difficulty(1, mode, None);
        let mut rng = StdRng::seed_from_u64(3);
        let game = new_game(mode, 2, &difficulty, &mut rng);
        GameSession::new(game, &difficulty, None)
    }

    async fn run(session: &mut GameSession, input: &str) -> (RunEnd, String) {
        let mut out = Vec::new();
        let end = run_session(
            session,
            input.as_bytes(),
            &mut out,
            &Notifier::plain(),
            &NoSpeech,
        )
        .await
        .unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_quit_keeps_score() {
        let mut session = session(GameMode::VocabularyQuiz);
        let (end, text) = run(&mut session, "q\n").await;
        assert_eq!(end, RunEnd::Quit);
        assert!(text.contains("Vocabulary Quiz"));
        assert!(text.contains("Final Score: 0 points"));
    }

    #[tokio::test]
    async fn test_input_closed_ends_run() {
        let mut session = session(GameMode::SentenceBuilder);
        let (end, text) = run(&mut session, "").await;
        assert_eq!(end, RunEnd::InputClosed);
        assert!(text.contains("Final Score"));
    }

    #[tokio::test]
    async fn test_answers_are_scored() {
        let mut session = session(GameMode::VocabularyQuiz);
        let prompt = session.prompt().unwrap();
        let total = session.total_items();
        // Answer every question with option 1
        let input = "1\n".repeat(total);
        let (end, text) = run(&mut session, &input).await;

        assert_eq!(end, RunEnd::Completed);
        assert!(session.is_over());
        assert_eq!(session.completed_items(), total);
        assert!(text.contains(&prompt.text));
        assert!(text.contains("Correct!") || text.contains("Wrong! The correct answer is:"));
    }

    #[tokio::test]
    async fn test_invalid_input_is_reported() {
        let mut session = session(GameMode::VocabularyQuiz);
        let (_, text) = run(&mut session, "banana\nq\n").await;
        assert!(text.contains("[NOTE] Enter a number from 1 to"));
        assert_eq!(session.completed_items(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_times_out() {
        let mut session = session(GameMode::WordMatch);
        let limit = session.time_limit();
        let (reader, _writer) = tokio::io::duplex(64);
        let mut out = Vec::new();
        let end = run_session(
            &mut session,
            BufReader::new(reader),
            &mut out,
            &Notifier::plain(),
            &NoSpeech,
        )
        .await
        .unwrap();

        assert_eq!(end, RunEnd::TimedOut);
        assert_eq!(session.time_left(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Time's up!"));
        assert!(limit > LOW_TIME_WARNING);
        assert!(text.contains("10 seconds left!"));
    }
}
