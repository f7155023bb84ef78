//! Helpers for rendering culture entries and conversation scenarios.
//!
//! Content is shown target-language first, with safe fallbacks for the
//! optional fields.

use crate::types::{ConversationScenario, CultureContent, DialogueStep};

const PREVIEW_CHARS: usize = 150;

/// Title keywords that mark an entry as history content
const HISTORY_KEYWORDS: &[&str] = &[
    "history",
    "empire",
    "heritage",
    "roots",
    "nation",
    "colonial",
    "formation",
    "renaissance",
    "kingdoms",
];

/// Stable numeric id for a culture entry, derived from its title
///
/// 32-bit `h * 31 + c` over UTF-16 code units, then made non-negative.
/// Deterministic but not collision-resistant: two titles can map to the
/// same id and would then share completion state.
pub fn culture_entry_id(title: &str) -> u64 {
    let mut hash: i32 = 0;
    for unit in title.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    (hash as i64).unsigned_abs()
}

/// Primary text: the target-language text, else the content body
pub fn culture_display_text(entry: &CultureContent) -> &str {
    if !entry.language_text.is_empty() {
        &entry.language_text
    } else {
        &entry.content
    }
}

pub fn culture_translation(entry: &CultureContent) -> Option<&str> {
    (!entry.translated_text.is_empty()).then_some(entry.translated_text.as_str())
}

/// First 150 characters of the display text, with an ellipsis when cut
pub fn culture_preview(entry: &CultureContent) -> String {
    let text = culture_display_text(entry);
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

pub fn is_history_entry(title: &str) -> bool {
    let lower = title.to_lowercase();
    lower.starts_with("ancient") || HISTORY_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Culture list filter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CultureFilter {
    #[default]
    All,
    History,
}

impl CultureFilter {
    pub fn apply<'a>(&self, entries: &'a [CultureContent]) -> Vec<&'a CultureContent> {
        entries
            .iter()
            .filter(|entry| match self {
                CultureFilter::All => true,
                CultureFilter::History => is_history_entry(&entry.title),
            })
            .collect()
    }
}

pub fn is_culture_completed(entry: &CultureContent, completed: &[u64]) -> bool {
    completed.contains(&culture_entry_id(&entry.title))
}

pub fn step_prompt(step: &DialogueStep) -> &str {
    &step.prompt
}

pub fn step_response(step: &DialogueStep) -> &str {
    &step.expected_response
}

/// Cursor over a scenario's dialogue steps
#[derive(Debug, Clone)]
pub struct DialogueWalk<'a> {
    scenario: &'a ConversationScenario,
    current: usize,
    finished: bool,
}

impl<'a> DialogueWalk<'a> {
    pub fn new(scenario: &'a ConversationScenario) -> Self {
        Self {
            scenario,
            current: 0,
            finished: scenario.steps.is_empty(),
        }
    }

    pub fn current_step(&self) -> Option<&'a DialogueStep> {
        if self.finished {
            return None;
        }
        self.scenario.steps.get(self.current)
    }

    /// Zero-based index of the step being shown
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.scenario.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenario.steps.is_empty()
    }

    /// Move to the next step; returns false once the dialogue is over
    pub fn advance(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if self.current + 1 < self.scenario.steps.len() {
            self.current += 1;
            true
        } else {
            self.finished = true;
            false
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, content: &str, language_text: &str, translated: &str) -> CultureContent {
        CultureContent {
            title: title.to_string(),
            content: content.to_string(),
            xp_reward: 10,
            language_text: language_text.to_string(),
            translated_text: translated.to_string(),
        }
    }

    fn scenario(steps: usize) -> ConversationScenario {
        ConversationScenario {
            id: 4,
            title: "At the market".to_string(),
            description: String::new(),
            language_id: 2,
            xp_reward: 20,
            steps: (0..steps)
                .map(|i| DialogueStep {
                    speaker: "Vendor".to_string(),
                    prompt: format!("prompt {}", i),
                    expected_response: format!("response {}", i),
                })
                .collect(),
        }
    }

    #[test]
    fn test_culture_entry_id_known_values() {
        assert_eq!(culture_entry_id(""), 0);
        assert_eq!(culture_entry_id("a"), 97);
        assert_eq!(culture_entry_id("ab"), 97 * 31 + 98);
        // Wraps in 32 bits and takes the absolute value
        assert_eq!(culture_entry_id("hello world"), 1_794_106_052);
    }

    #[test]
    fn test_culture_entry_id_deterministic() {
        let a = culture_entry_id("Ancient Kingdoms of the Sahel");
        let b = culture_entry_id("Ancient Kingdoms of the Sahel");
        assert_eq!(a, b);
        assert_ne!(a, culture_entry_id("Ancient kingdoms of the Sahel"));
    }

    #[test]
    fn test_culture_entry_id_collisions_exist() {
        // "Aa" and "BB" share a hash: 65*31+97 == 66*31+66
        assert_eq!(culture_entry_id("Aa"), culture_entry_id("BB"));
    }

    #[test]
    fn test_display_text_fallbacks() {
        assert_eq!(culture_display_text(&entry("t", "body", "lugha", "")), "lugha");
        assert_eq!(culture_display_text(&entry("t", "body", "", "")), "body");
        assert_eq!(culture_display_text(&entry("t", "", "", "")), "");
        assert_eq!(culture_translation(&entry("t", "", "", "")), None);
        assert_eq!(culture_translation(&entry("t", "", "", "tr")), Some("tr"));
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(200);
        let preview = culture_preview(&entry("t", &long, "", ""));
        assert_eq!(preview.chars().count(), 153);
        assert!(preview.ends_with("..."));

        let short = culture_preview(&entry("t", "short", "", ""));
        assert_eq!(short, "short");
    }

    #[test]
    fn test_history_filter() {
        assert!(is_history_entry("Ancient Axum"));
        assert!(is_history_entry("The Mali Empire"));
        assert!(is_history_entry("Swahili Coast HISTORY"));
        assert!(!is_history_entry("Cooking Jollof"));
        assert!(!is_history_entry("Not so ancient times"));

        let entries = vec![
            entry("Colonial Era", "", "", ""),
            entry("Music and Dance", "", "", ""),
        ];
        assert_eq!(CultureFilter::History.apply(&entries).len(), 1);
        assert_eq!(CultureFilter::All.apply(&entries).len(), 2);
    }

    #[test]
    fn test_dialogue_walk() {
        let scenario = scenario(3);
        let mut walk = DialogueWalk::new(&scenario);
        assert_eq!(walk.current_step().map(step_prompt), Some("prompt 0"));
        assert!(walk.advance());
        assert!(walk.advance());
        assert_eq!(walk.position(), 2);
        assert_eq!(walk.current_step().map(step_response), Some("response 2"));
        assert!(!walk.advance());
        assert!(walk.is_finished());
        assert!(walk.current_step().is_none());
    }

    #[test]
    fn test_dialogue_walk_empty() {
        let scenario = scenario(0);
        let mut walk = DialogueWalk::new(&scenario);
        assert!(walk.is_finished());
        assert!(!walk.advance());
    }
}
