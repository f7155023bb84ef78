//! Seed item banks for the minigames.
//!
//! Banks are keyed by language id; a language without its own bank plays
//! the first one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPair {
    pub word: &'static str,
    pub translation: &'static str,
}

/// A sentence and the tiles it is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceItem {
    pub sentence: &'static str,
    pub words: &'static [&'static str],
}

/// A multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceItem {
    pub question: &'static str,
    /// Phrase played aloud before answering (listening only)
    pub phrase: Option<&'static str>,
    pub answer: &'static str,
    /// Wrong options, most plausible first
    pub distractors: &'static [&'static str],
}

/// A bank and the language its phrases are spoken in
#[derive(Debug, Clone, Copy)]
pub struct Bank<T: 'static> {
    pub language_id: u64,
    pub voice_language_id: u64,
    pub items: &'static [T],
}

const fn pair(word: &'static str, translation: &'static str) -> WordPair {
    WordPair { word, translation }
}

const fn sentence(sentence: &'static str, words: &'static [&'static str]) -> SentenceItem {
    SentenceItem { sentence, words }
}

const fn quiz(
    question: &'static str,
    answer: &'static str,
    distractors: &'static [&'static str],
) -> ChoiceItem {
    ChoiceItem {
        question,
        phrase: None,
        answer,
        distractors,
    }
}

const fn listen(
    phrase: &'static str,
    question: &'static str,
    answer: &'static str,
    distractors: &'static [&'static str],
) -> ChoiceItem {
    ChoiceItem {
        question,
        phrase: Some(phrase),
        answer,
        distractors,
    }
}

pub const WORD_PAIRS: &[Bank<WordPair>] = &[
    Bank {
        language_id: 1,
        voice_language_id: 1,
        items: &[
            pair("Hola", "Hello"),
            pair("Gracias", "Thank you"),
            pair("Adiós", "Goodbye"),
            pair("Sí", "Yes"),
            pair("No", "No"),
            pair("Por favor", "Please"),
            pair("Agua", "Water"),
            pair("Comida", "Food"),
        ],
    },
    Bank {
        language_id: 2,
        voice_language_id: 2,
        items: &[
            pair("Bonjour", "Hello"),
            pair("Merci", "Thank you"),
            pair("Au revoir", "Goodbye"),
            pair("Oui", "Yes"),
            pair("Non", "No"),
            pair("S'il vous plaît", "Please"),
            pair("Eau", "Water"),
            pair("Nourriture", "Food"),
        ],
    },
];

// Punctuation rides on the tiles so the joined words spell the sentence
pub const SENTENCES: &[Bank<SentenceItem>] = &[
    Bank {
        language_id: 1,
        voice_language_id: 1,
        items: &[
            sentence("Hola, ¿cómo estás?", &["Hola,", "¿cómo", "estás?"]),
            sentence("Me llamo Juan", &["Me", "llamo", "Juan"]),
            sentence("Buenos días, señor", &["Buenos", "días,", "señor"]),
            sentence("¿Dónde está el baño?", &["¿Dónde", "está", "el", "baño?"]),
            sentence("Gracias por todo", &["Gracias", "por", "todo"]),
        ],
    },
    Bank {
        language_id: 2,
        voice_language_id: 2,
        items: &[
            sentence("Bonjour, comment allez-vous?", &["Bonjour,", "comment", "allez-vous?"]),
            sentence("Je m'appelle Marie", &["Je", "m'appelle", "Marie"]),
            sentence("Bonne journée, monsieur", &["Bonne", "journée,", "monsieur"]),
            sentence("Où sont les toilettes?", &["Où", "sont", "les", "toilettes?"]),
            sentence("Merci beaucoup", &["Merci", "beaucoup"]),
        ],
    },
];

pub const VOCABULARY: &[Bank<ChoiceItem>] = &[
    Bank {
        language_id: 1,
        voice_language_id: 5,
        items: &[
            quiz("What does \"Bawo\" mean?", "Hello/How are you", &["Goodbye", "Thank you", "Please"]),
            quiz("What does \"Eso\" mean?", "Fruit", &["Water", "Food", "House"]),
            quiz("What does \"Ile-iwe\" mean?", "School", &["Market", "Home", "Church"]),
            quiz("What does \"Ojo\" mean?", "Day", &["Night", "Morning", "Evening"]),
            quiz("What does \"Omi\" mean?", "Water", &["Fire", "Air", "Earth"]),
            quiz("What does \"Onje\" mean?", "Food", &["Drink", "Plate", "Spoon"]),
        ],
    },
    Bank {
        language_id: 2,
        voice_language_id: 2,
        items: &[
            quiz("What does \"Habari\" mean?", "News/How are you", &["Goodbye", "Thank you", "Please"]),
            quiz("What does \"Chakula\" mean?", "Food", &["Water", "House", "School"]),
            quiz("What does \"Maji\" mean?", "Water", &["Fire", "Air", "Earth"]),
            quiz("What does \"Shule\" mean?", "School", &["Market", "Home", "Church"]),
            quiz("What does \"Nyumba\" mean?", "House", &["Car", "Tree", "Road"]),
            quiz("What does \"Siku\" mean?", "Day", &["Night", "Week", "Month"]),
        ],
    },
];

pub const LISTENING: &[Bank<ChoiceItem>] = &[
    Bank {
        language_id: 1,
        voice_language_id: 5,
        items: &[
            listen("Bawo ni o se wa?", "What does this phrase mean?", "How are you?", &["Good morning", "Thank you", "Goodbye"]),
            listen("Mo fe ra eso", "What does the speaker want?", "To buy fruit", &["To eat food", "To drink water", "To go home"]),
            listen("Ile-iwe wa nibo?", "What is being asked?", "Where is the school?", &["Where is home?", "Where is the market?", "Where is the church?"]),
            listen("E kaaro", "When would you say this?", "In the morning", &["In the evening", "At night", "At noon"]),
            listen("Mo nife re", "What emotion is expressed?", "Love", &["Anger", "Sadness", "Fear"]),
            listen("Omo daadaa", "What does this mean?", "Good child", &["Bad child", "Smart child", "Tall child"]),
            listen("Nje lo wa", "Where is the person?", "Outside", &["Inside", "Upstairs", "Downstairs"]),
            listen("Mo wa ile", "Where is the speaker going?", "Home", &["School", "Market", "Church"]),
        ],
    },
    Bank {
        language_id: 2,
        voice_language_id: 2,
        items: &[
            listen("Habari yako?", "What does this phrase mean?", "How are you?", &["Good morning", "Thank you", "Goodbye"]),
            listen("Ninatafuta chumba", "What is the speaker looking for?", "A room", &["Food", "Water", "A friend"]),
            listen("Shule iko wapi?", "What is being asked?", "Where is the school?", &["Where is home?", "Where is the market?", "Where is the church?"]),
            listen("Asante sana", "What is the speaker expressing?", "Gratitude", &["Anger", "Sadness", "Confusion"]),
            listen("Nakupenda", "What emotion is expressed?", "Love", &["Anger", "Sadness", "Fear"]),
            listen("Mtoto mzuri", "What does this mean?", "Good child", &["Bad child", "Smart child", "Tall child"]),
            listen("Nje ya nyumba", "Where is this location?", "Outside the house", &["Inside the house", "On the roof", "In the garden"]),
            listen("Naenda nyumbani", "Where is the speaker going?", "Home", &["School", "Market", "Church"]),
        ],
    },
];

/// Mixed-language questions; the challenge ignores the selected language
pub const CHALLENGE: &[ChoiceItem] = &[
    quiz("What is \"Hello\" in Spanish?", "Hola", &["Adiós", "Gracias", "Por favor"]),
    quiz("What is \"Thank you\" in French?", "Merci", &["Bonjour", "Au revoir", "Oui"]),
    quiz("What is \"Goodbye\" in Spanish?", "Adiós", &["Hola", "Gracias", "Sí"]),
    quiz("What is \"Yes\" in French?", "Oui", &["Non", "Merci", "Bonjour"]),
    quiz("What is \"Please\" in Spanish?", "Por favor", &["Gracias", "Hola", "Adiós"]),
    quiz("What is \"Water\" in Arabic?", "ماء", &["طعام", "بيت", "كتاب"]),
    quiz("What is \"Food\" in Swahili?", "Chakula", &["Maji", "Nyumba", "Kitabu"]),
    quiz("What is \"House\" in Arabic?", "بيت", &["ماء", "طعام", "كتاب"]),
    quiz("What is \"Book\" in Swahili?", "Kitabu", &["Maji", "Chakula", "Nyumba"]),
    quiz("What is \"Friend\" in Arabic?", "صديق", &["عائلة", "مدرسة", "سوق"]),
    quiz("What is \"Family\" in Swahili?", "Familia", &["Rafiki", "Shule", "Soko"]),
    quiz("What is \"School\" in Arabic?", "مدرسة", &["صديق", "عائلة", "سوق"]),
    quiz("What is \"Market\" in Swahili?", "Soko", &["Rafiki", "Familia", "Shule"]),
    quiz("What is \"Good morning\" in Yoruba?", "E kaaro", &["E kaasan", "E ku irole", "O dabo"]),
    quiz("What is \"Good afternoon\" in Yoruba?", "E kaasan", &["E kaaro", "E ku irole", "O dabo"]),
];

/// The bank for a language, falling back to the first bank
pub fn bank_for<T: 'static>(banks: &'static [Bank<T>], language_id: u64) -> Option<&'static Bank<T>> {
    banks
        .iter()
        .find(|b| b.language_id == language_id)
        .or_else(|| banks.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_to_first_bank() {
        assert_eq!(bank_for(WORD_PAIRS, 2).map(|b| b.items[0].word), Some("Bonjour"));
        assert_eq!(bank_for(WORD_PAIRS, 6).map(|b| b.items[0].word), Some("Hola"));
        let empty: &'static [Bank<WordPair>] = &[];
        assert!(bank_for(empty, 1).is_none());
    }

    #[test]
    fn test_sentence_tiles_spell_the_sentence() {
        for bank in SENTENCES {
            for item in bank.items {
                assert_eq!(item.words.join(" "), item.sentence);
            }
        }
    }

    #[test]
    fn test_answers_are_not_distractors() {
        let all = VOCABULARY
            .iter()
            .chain(LISTENING)
            .flat_map(|b| b.items.iter())
            .chain(CHALLENGE.iter());
        for item in all {
            assert!(!item.distractors.contains(&item.answer), "{}", item.question);
            assert_eq!(item.distractors.len(), 3);
        }
        assert_eq!(CHALLENGE.len(), 15);
        assert!(LISTENING.iter().all(|b| b.items.iter().all(|i| i.phrase.is_some())));
    }
}
