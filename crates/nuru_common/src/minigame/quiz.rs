//! Multiple-choice games: vocabulary quiz, listening comprehension and the
//! repeatable challenge.
//!
//! One answer per question; right or wrong, the quiz moves on.

use super::bank::{bank_for, ChoiceItem, CHALLENGE, LISTENING, VOCABULARY};
use super::{parse_choice, Feedback, Minigame, Prompt, Utterance};
use crate::difficulty::DifficultyParams;
use crate::types::GameMode;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone)]
struct Round {
    item: ChoiceItem,
    options: Vec<&'static str>,
}

impl Round {
    /// The answer plus up to `distractors` wrong options, shuffled
    fn new<R: Rng + ?Sized>(item: ChoiceItem, distractors: usize, rng: &mut R) -> Self {
        let mut options = Vec::with_capacity(distractors + 1);
        options.push(item.answer);
        options.extend(item.distractors.iter().take(distractors));
        options.shuffle(rng);
        Self { item, options }
    }
}

pub struct ChoiceQuiz {
    mode: GameMode,
    voice_language_id: u64,
    rounds: Vec<Round>,
    index: usize,
}

impl ChoiceQuiz {
    fn build<R: Rng + ?Sized>(
        mode: GameMode,
        voice_language_id: u64,
        items: &[ChoiceItem],
        difficulty: &DifficultyParams,
        rng: &mut R,
    ) -> Self {
        let rounds = items
            .iter()
            .take(difficulty.item_count)
            .map(|item| Round::new(*item, difficulty.distractor_count, rng))
            .collect();
        Self {
            mode,
            voice_language_id,
            rounds,
            index: 0,
        }
    }

    pub fn vocabulary<R: Rng + ?Sized>(
        language_id: u64,
        difficulty: &DifficultyParams,
        rng: &mut R,
    ) -> Self {
        let (voice, items) = bank_for(VOCABULARY, language_id)
            .map(|b| (b.voice_language_id, b.items))
            .unwrap_or_default();
        Self::build(GameMode::VocabularyQuiz, voice, items, difficulty, rng)
    }

    pub fn listening<R: Rng + ?Sized>(
        language_id: u64,
        difficulty: &DifficultyParams,
        rng: &mut R,
    ) -> Self {
        let (voice, items) = bank_for(LISTENING, language_id)
            .map(|b| (b.voice_language_id, b.items))
            .unwrap_or_default();
        Self::build(GameMode::ListeningComprehension, voice, items, difficulty, rng)
    }

    /// Mixed-language challenge, capped at the question pool size
    pub fn challenge<R: Rng + ?Sized>(difficulty: &DifficultyParams, rng: &mut R) -> Self {
        Self::build(GameMode::RepeatableChallenge, 0, CHALLENGE, difficulty, rng)
    }

    fn current(&self) -> Option<&Round> {
        self.rounds.get(self.index)
    }
}

impl Minigame for ChoiceQuiz {
    fn mode(&self) -> GameMode {
        self.mode
    }

    fn total_items(&self) -> usize {
        self.rounds.len()
    }

    fn completed_items(&self) -> usize {
        self.index
    }

    fn prompt(&self) -> Prompt {
        let Some(round) = self.current() else {
            return Prompt {
                text: "All questions answered".to_string(),
                choices: Vec::new(),
                speak: None,
            };
        };
        let text = match round.item.phrase {
            Some(phrase) => format!("\"{}\"\n{}", phrase, round.item.question),
            None => round.item.question.to_string(),
        };
        Prompt {
            text,
            choices: round.options.iter().map(|o| o.to_string()).collect(),
            speak: round.item.phrase.map(|phrase| Utterance {
                text: phrase.to_string(),
                language_id: self.voice_language_id,
            }),
        }
    }

    fn respond(&mut self, input: &str) -> Feedback {
        let Some(round) = self.current() else {
            return Feedback::Invalid("No questions left".to_string());
        };
        let picked = match parse_choice(input, round.options.len()) {
            Ok(i) => round.options[i],
            Err(feedback) => return feedback,
        };
        let feedback = if picked == round.item.answer {
            Feedback::Correct
        } else {
            Feedback::Wrong {
                answer: round.item.answer.to_string(),
            }
        };
        self.index += 1;
        feedback
    }
}
