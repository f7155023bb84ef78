//! Minigame sessions
//!
//! A session wraps one game with a countdown and a score:
//! - the time budget comes from the difficulty calculator
//! - `tick()` is called once per second; at zero the session is over
//! - each correct answer adds the mode's fixed points
//! - exhausting the game's items also ends the session
//!
//! Games are plain state machines fed one line of input at a time, so the
//! same engine drives the terminal runner and the tests.

pub mod bank;
pub mod quiz;
pub mod sentence_builder;
pub mod word_match;

pub use quiz::ChoiceQuiz;
pub use sentence_builder::SentenceBuilder;
pub use word_match::WordMatch;

use crate::backend::{BackendClient, BackendError};
use crate::difficulty::DifficultyParams;
use crate::types::{GameMode, MinigameConfig};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

/// Shown when a finished game cannot be saved
pub const LOGIN_TO_SAVE: &str = "Please log in to save your score";

/// Text to play through the speech seam
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Utterance {
    pub text: String,
    pub language_id: u64,
}

/// What the player sees before answering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub text: String,
    /// Numbered choices, answered by their 1-based position
    pub choices: Vec<String>,
    pub speak: Option<Utterance>,
}

/// Result of one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Feedback {
    /// First half of a word-match pick
    Selected(String),
    Matched { word: String, translation: String },
    /// Second pick did not complete a pair; selection cleared
    Mismatch,
    Correct,
    Wrong { answer: String },
    /// Sentence did not match; same sentence again
    TryAgain,
    /// Input ignored
    Invalid(String),
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct | Feedback::Matched { .. })
    }
}

pub trait Minigame: Send {
    fn mode(&self) -> GameMode;

    /// Items in this session
    fn total_items(&self) -> usize;

    /// Items finished so far (answered, matched or built)
    fn completed_items(&self) -> usize;

    fn prompt(&self) -> Prompt;

    fn respond(&mut self, input: &str) -> Feedback;

    fn is_exhausted(&self) -> bool {
        self.completed_items() >= self.total_items()
    }
}

/// Parse a 1-based choice number into an index
pub(crate) fn parse_choice(input: &str, len: usize) -> Result<usize, Feedback> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(Feedback::Invalid(format!("Enter a number from 1 to {}", len))),
    }
}

/// Build the game for a mode from the seed banks
///
/// Options and tiles are shuffled with `rng`; the challenge is mixed-language
/// and ignores `language_id`.
pub fn new_game<R: Rng + ?Sized>(
    mode: GameMode,
    language_id: u64,
    difficulty: &DifficultyParams,
    rng: &mut R,
) -> Box<dyn Minigame> {
    debug!(
        "New {} game: language {}, {} items, {} distractors",
        mode, language_id, difficulty.item_count, difficulty.distractor_count
    );
    match mode {
        GameMode::WordMatch => Box::new(WordMatch::new(language_id, difficulty.item_count, rng)),
        GameMode::SentenceBuilder => Box::new(SentenceBuilder::new(
            language_id,
            difficulty.item_count,
            rng,
        )),
        GameMode::VocabularyQuiz => Box::new(ChoiceQuiz::vocabulary(language_id, difficulty, rng)),
        GameMode::ListeningComprehension => {
            Box::new(ChoiceQuiz::listening(language_id, difficulty, rng))
        }
        GameMode::RepeatableChallenge => Box::new(ChoiceQuiz::challenge(difficulty, rng)),
    }
}

/// XP a finished session is worth
///
/// Configured games award their configured reward; the challenge has no
/// config and awards its score.
pub fn xp_reward_for(mode: GameMode, config: Option<&MinigameConfig>, score: u64) -> u64 {
    match mode {
        GameMode::RepeatableChallenge => score,
        _ => config.map(|c| c.xp_reward).unwrap_or(0),
    }
}

/// Countdown and score around one game
pub struct GameSession {
    game: Box<dyn Minigame>,
    config: Option<MinigameConfig>,
    time_limit: u64,
    time_left: u64,
    score: u64,
    correct: usize,
    timed_out: bool,
    over: bool,
}

impl GameSession {
    pub fn new(
        game: Box<dyn Minigame>,
        difficulty: &DifficultyParams,
        config: Option<MinigameConfig>,
    ) -> Self {
        let over = game.is_exhausted();
        Self {
            game,
            config,
            time_limit: difficulty.time_limit,
            time_left: difficulty.time_limit,
            score: 0,
            correct: 0,
            timed_out: false,
            over,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.game.mode()
    }

    pub fn time_limit(&self) -> u64 {
        self.time_limit
    }

    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn total_items(&self) -> usize {
        self.game.total_items()
    }

    pub fn completed_items(&self) -> usize {
        self.game.completed_items()
    }

    /// Remaining time as a percentage of the budget
    pub fn time_percent(&self) -> f64 {
        if self.time_limit == 0 {
            return 0.0;
        }
        self.time_left as f64 / self.time_limit as f64 * 100.0
    }

    /// Current prompt, None once the session is over
    pub fn prompt(&self) -> Option<Prompt> {
        (!self.over).then(|| self.game.prompt())
    }

    /// Advance the countdown by one second
    ///
    /// Returns true when this tick ended the session.
    pub fn tick(&mut self) -> bool {
        if self.over {
            return false;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            self.timed_out = true;
            self.over = true;
            debug!("{} session timed out", self.mode());
            return true;
        }
        self.time_left -= 1;
        false
    }

    pub fn respond(&mut self, input: &str) -> Feedback {
        if self.over {
            return Feedback::Invalid("Game over".to_string());
        }
        let feedback = self.game.respond(input);
        if feedback.is_correct() {
            self.score += self.mode().points_per_correct();
            self.correct += 1;
        }
        if self.game.is_exhausted() {
            self.over = true;
        }
        feedback
    }

    /// End the session (early exit included) and report the result
    pub fn finish(self) -> SessionOutcome {
        let mode = self.mode();
        SessionOutcome {
            mode,
            score: self.score,
            xp_reward: xp_reward_for(mode, self.config.as_ref(), self.score),
            correct: self.correct,
            completed: self.game.completed_items(),
            total: self.game.total_items(),
            timed_out: self.timed_out,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
    pub mode: GameMode,
    pub score: u64,
    pub xp_reward: u64,
    pub correct: usize,
    pub completed: usize,
    pub total: usize,
    pub timed_out: bool,
}

/// What to do with a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Submit {
        mode: GameMode,
        xp_reward: u64,
        score: u64,
    },
    /// Signed out: the result is discarded
    LoginRequired,
}

pub fn submission(outcome: &SessionOutcome, authenticated: bool) -> Submission {
    if !authenticated {
        return Submission::LoginRequired;
    }
    Submission::Submit {
        mode: outcome.mode,
        xp_reward: outcome.xp_reward,
        score: outcome.score,
    }
}

/// Send a finished session to the backend when signed in
pub fn submit_outcome(
    client: &dyn BackendClient,
    outcome: &SessionOutcome,
    authenticated: bool,
) -> Result<Submission, BackendError> {
    let plan = submission(outcome, authenticated);
    if let Submission::Submit {
        mode,
        xp_reward,
        score,
    } = plan
    {
        client.complete_minigame(mode, xp_reward, score)?;
        info!("Recorded {} result: score {}, +{} XP", mode, score, xp_reward);
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FakeBackend;
    use crate::difficulty::session_difficulty;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(mode: GameMode, level: u64) -> GameSession {
        let difficulty = session_difficulty(level, mode, None);
        let mut rng = StdRng::seed_from_u64(7);
        let game = new_game(mode, 2, &difficulty, &mut rng);
        GameSession::new(game, &difficulty, None)
    }

    /// Answer the current choice prompt correctly
    fn answer_correctly(session: &mut GameSession, answer: &str) -> Feedback {
        let prompt = session.prompt().unwrap();
        let pos = prompt.choices.iter().position(|c| c == answer).unwrap();
        session.respond(&(pos + 1).to_string())
    }

    #[test]
    fn test_timer_ends_session_at_zero() {
        let mut s = session(GameMode::VocabularyQuiz, 1);
        assert_eq!(s.time_left(), 120);
        for _ in 0..119 {
            assert!(!s.tick());
        }
        assert_eq!(s.time_left(), 1);
        assert!(s.tick());
        assert_eq!(s.time_left(), 0);
        assert!(s.is_over());
        assert!(!s.tick());
        assert!(s.prompt().is_none());
        assert!(s.finish().timed_out);
    }

    #[test]
    fn test_quiz_scores_and_exhausts() {
        let mut s = session(GameMode::VocabularyQuiz, 1);
        // Beginner: max(3, 6 - 2) items
        assert_eq!(s.total_items(), 4);

        let answers = ["News/How are you", "Food", "Water", "School"];
        for (i, answer) in answers.iter().enumerate() {
            let feedback = if i == 1 {
                let prompt = s.prompt().unwrap();
                let wrong = prompt.choices.iter().position(|c| c != answer).unwrap();
                s.respond(&(wrong + 1).to_string())
            } else {
                answer_correctly(&mut s, answer)
            };
            assert_eq!(feedback.is_correct(), i != 1);
        }
        assert!(s.is_over());
        let outcome = s.finish();
        assert_eq!(outcome.score, 30);
        assert_eq!(outcome.correct, 3);
        assert!(!outcome.timed_out);
    }

    #[test]
    fn test_invalid_input_changes_nothing() {
        let mut s = session(GameMode::RepeatableChallenge, 1);
        assert!(matches!(s.respond("zero"), Feedback::Invalid(_)));
        assert!(matches!(s.respond("99"), Feedback::Invalid(_)));
        assert_eq!(s.completed_items(), 0);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_challenge_awards_score_as_xp() {
        let mut s = session(GameMode::RepeatableChallenge, 1);
        answer_correctly(&mut s, "Hola");
        let outcome = s.finish();
        assert_eq!(outcome.score, 15);
        assert_eq!(outcome.xp_reward, 15);
    }

    #[test]
    fn test_configured_reward() {
        let config = MinigameConfig {
            id: 1,
            language_id: 2,
            game_mode: GameMode::WordMatch,
            difficulty: 1,
            xp_reward: 20,
            instructions: String::new(),
            time_limit: Some(30),
        };
        let difficulty = session_difficulty(1, GameMode::WordMatch, Some(&config));
        let mut rng = StdRng::seed_from_u64(1);
        let game = new_game(GameMode::WordMatch, 2, &difficulty, &mut rng);
        let s = GameSession::new(game, &difficulty, Some(config));
        assert_eq!(s.time_limit(), 30);
        assert_eq!(s.finish().xp_reward, 20);
    }

    #[test]
    fn test_signed_out_submission_is_discarded() {
        let backend = FakeBackend::new();
        let outcome = session(GameMode::RepeatableChallenge, 1).finish();
        let plan = submit_outcome(&backend, &outcome, false).unwrap();
        assert_eq!(plan, Submission::LoginRequired);
        assert_eq!(backend.call_count(), 0);

        let plan = submit_outcome(&backend, &outcome, true).unwrap();
        assert!(matches!(plan, Submission::Submit { score: 0, .. }));
        assert_eq!(backend.progress().unwrap().completed_minigames.len(), 1);
    }
}
