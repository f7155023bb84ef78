//! Sentence builder: put shuffled word tiles in order.
//!
//! An answer is a list of tile numbers ("2 1 3"). The picked words joined by
//! single spaces must spell the sentence exactly; a wrong build clears the
//! selection and the same sentence is retried.

use super::bank::{bank_for, SentenceItem, SENTENCES};
use super::{Feedback, Minigame, Prompt};
use crate::types::GameMode;
use rand::seq::SliceRandom;
use rand::Rng;

struct Puzzle {
    item: SentenceItem,
    tiles: Vec<&'static str>,
}

pub struct SentenceBuilder {
    puzzles: Vec<Puzzle>,
    index: usize,
    /// Failed builds of the current sentence
    attempts: usize,
}

impl SentenceBuilder {
    pub fn new<R: Rng + ?Sized>(language_id: u64, item_count: usize, rng: &mut R) -> Self {
        let items = bank_for(SENTENCES, language_id)
            .map(|b| b.items)
            .unwrap_or_default();
        let puzzles = items
            .iter()
            .take(item_count)
            .map(|item| {
                let mut tiles = item.words.to_vec();
                tiles.shuffle(rng);
                Puzzle { item: *item, tiles }
            })
            .collect();
        Self {
            puzzles,
            index: 0,
            attempts: 0,
        }
    }

    fn parse_build(input: &str, tiles: &[&'static str]) -> Result<String, Feedback> {
        let invalid = || {
            Feedback::Invalid(format!(
                "Enter tile numbers from 1 to {}, e.g. \"2 1 3\"",
                tiles.len()
            ))
        };
        let words = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| match s.parse::<usize>() {
                Ok(n) if (1..=tiles.len()).contains(&n) => Ok(tiles[n - 1]),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if words.is_empty() {
            return Err(invalid());
        }
        Ok(words.join(" "))
    }
}

impl Minigame for SentenceBuilder {
    fn mode(&self) -> GameMode {
        GameMode::SentenceBuilder
    }

    fn total_items(&self) -> usize {
        self.puzzles.len()
    }

    fn completed_items(&self) -> usize {
        self.index
    }

    fn prompt(&self) -> Prompt {
        match self.puzzles.get(self.index) {
            Some(puzzle) => Prompt {
                text: match self.attempts {
                    0 => format!(
                        "Build the sentence ({} of {})",
                        self.index + 1,
                        self.puzzles.len()
                    ),
                    n => format!(
                        "Build the sentence ({} of {}), attempt {}",
                        self.index + 1,
                        self.puzzles.len(),
                        n + 1
                    ),
                },
                choices: puzzle.tiles.iter().map(|t| t.to_string()).collect(),
                speak: None,
            },
            None => Prompt {
                text: "All sentences built".to_string(),
                choices: Vec::new(),
                speak: None,
            },
        }
    }

    fn respond(&mut self, input: &str) -> Feedback {
        let Some(puzzle) = self.puzzles.get(self.index) else {
            return Feedback::Invalid("No sentences left".to_string());
        };
        let built = match Self::parse_build(input, &puzzle.tiles) {
            Ok(built) => built,
            Err(feedback) => return feedback,
        };
        if built == puzzle.item.sentence {
            self.index += 1;
            self.attempts = 0;
            Feedback::Correct
        } else {
            self.attempts += 1;
            Feedback::TryAgain
        }
    }
}
