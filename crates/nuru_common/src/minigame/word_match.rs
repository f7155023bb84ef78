//! Word match: pair each word with its translation.
//!
//! Tiles are numbered words first, then the shuffled translations. Picking a
//! word and then its translation (either order) matches the pair; any other
//! second pick just clears the selection.

use super::bank::{bank_for, WordPair, WORD_PAIRS};
use super::{parse_choice, Feedback, Minigame, Prompt};
use crate::types::GameMode;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Word,
    Translation,
}

#[derive(Debug, Clone)]
struct Tile {
    text: &'static str,
    pair: usize,
    side: Side,
    matched: bool,
}

pub struct WordMatch {
    pairs: Vec<WordPair>,
    tiles: Vec<Tile>,
    selected: Option<usize>,
    matched_pairs: usize,
}

impl WordMatch {
    pub fn new<R: Rng + ?Sized>(language_id: u64, item_count: usize, rng: &mut R) -> Self {
        let pairs: Vec<WordPair> = bank_for(WORD_PAIRS, language_id)
            .map(|b| b.items.iter().take(item_count).copied().collect())
            .unwrap_or_default();

        let mut translations: Vec<Tile> = pairs
            .iter()
            .enumerate()
            .map(|(pair, p)| Tile {
                text: p.translation,
                pair,
                side: Side::Translation,
                matched: false,
            })
            .collect();
        translations.shuffle(rng);

        let tiles = pairs
            .iter()
            .enumerate()
            .map(|(pair, p)| Tile {
                text: p.word,
                pair,
                side: Side::Word,
                matched: false,
            })
            .chain(translations)
            .collect();

        Self {
            pairs,
            tiles,
            selected: None,
            matched_pairs: 0,
        }
    }

    /// Text of the currently selected tile
    pub fn selection(&self) -> Option<&str> {
        self.selected.map(|i| self.tiles[i].text)
    }
}

impl Minigame for WordMatch {
    fn mode(&self) -> GameMode {
        GameMode::WordMatch
    }

    fn total_items(&self) -> usize {
        self.pairs.len()
    }

    fn completed_items(&self) -> usize {
        self.matched_pairs
    }

    fn prompt(&self) -> Prompt {
        let text = match self.selection() {
            Some(word) => format!("Selected \"{}\". Pick its match", word),
            None => "Pick a word, then its translation".to_string(),
        };
        let choices = self
            .tiles
            .iter()
            .map(|t| {
                if t.matched {
                    format!("{} (matched)", t.text)
                } else {
                    t.text.to_string()
                }
            })
            .collect();
        Prompt {
            text,
            choices,
            speak: None,
        }
    }

    fn respond(&mut self, input: &str) -> Feedback {
        let picked = match parse_choice(input, self.tiles.len()) {
            Ok(i) => i,
            Err(feedback) => return feedback,
        };
        if self.tiles[picked].matched {
            return Feedback::Invalid(format!("\"{}\" is already matched", self.tiles[picked].text));
        }

        let Some(first) = self.selected.take() else {
            self.selected = Some(picked);
            return Feedback::Selected(self.tiles[picked].text.to_string());
        };

        let (a, b) = (&self.tiles[first], &self.tiles[picked]);
        if a.pair != b.pair || a.side == b.side {
            return Feedback::Mismatch;
        }

        let pair = self.pairs[a.pair];
        self.tiles[first].matched = true;
        self.tiles[picked].matched = true;
        self.matched_pairs += 1;
        Feedback::Matched {
            word: pair.word.to_string(),
            translation: pair.translation.to_string(),
        }
    }
}
