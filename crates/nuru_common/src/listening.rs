//! Listening practice lessons.
//!
//! A fixed catalog of words and phrases per seeded language, grouped by
//! category for display.

use serde::Serialize;

/// Display order for lesson categories
pub const CATEGORIES: [&str; 3] = ["Greetings", "Directions", "Food"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListeningLesson {
    pub id: u32,
    pub word: &'static str,
    pub translation: &'static str,
    pub category: &'static str,
}

const fn lesson(
    id: u32,
    word: &'static str,
    translation: &'static str,
    category: &'static str,
) -> ListeningLesson {
    ListeningLesson {
        id,
        word,
        translation,
        category,
    }
}

const ARABIC: &[ListeningLesson] = &[
    lesson(1, "مرحبا (Marhaba)", "Hello", "Greetings"),
    lesson(2, "شكرا (Shukran)", "Thank you", "Greetings"),
    lesson(3, "مع السلامة (Ma'a salama)", "Goodbye", "Greetings"),
    lesson(4, "أين الفندق؟ (Ayn al-funduq?)", "Where is the hotel?", "Directions"),
    lesson(5, "يمين (Yamin)", "Right", "Directions"),
    lesson(6, "يسار (Yasar)", "Left", "Directions"),
    lesson(7, "أريد الماء (Urid alma'a)", "I want water", "Food"),
    lesson(8, "دجاج (Dajaj)", "Chicken", "Food"),
    lesson(9, "أرز (Aruz)", "Rice", "Food"),
];

const SWAHILI: &[ListeningLesson] = &[
    lesson(1, "Habari", "Hello/How are you", "Greetings"),
    lesson(2, "Asante", "Thank you", "Greetings"),
    lesson(3, "Kwaheri", "Goodbye", "Greetings"),
    lesson(4, "Soko liko wapi?", "Where is the market?", "Directions"),
    lesson(5, "Kulia", "Right", "Directions"),
    lesson(6, "Kushoto", "Left", "Directions"),
    lesson(7, "Samaki", "Fish", "Food"),
    lesson(8, "Wali", "Rice", "Food"),
    lesson(9, "Maji", "Water", "Food"),
];

const HAUSA: &[ListeningLesson] = &[
    lesson(1, "Sannu", "Hello", "Greetings"),
    lesson(2, "Na gode", "Thank you", "Greetings"),
    lesson(3, "Sai an jima", "Goodbye", "Greetings"),
    lesson(4, "Ina otal?", "Where is the hotel?", "Directions"),
    lesson(5, "Dama", "Right", "Directions"),
    lesson(6, "Hagu", "Left", "Directions"),
    lesson(7, "Kaza", "Chicken", "Food"),
    lesson(8, "Shinkafa", "Rice", "Food"),
    lesson(9, "Ruwa", "Water", "Food"),
];

const AMHARIC: &[ListeningLesson] = &[
    lesson(1, "ሰላም (Selam)", "Hello", "Greetings"),
    lesson(2, "አመሰግናለሁ (Ameseginalew)", "Thank you", "Greetings"),
    lesson(3, "ደህና ሁን (Dehna hun)", "Goodbye", "Greetings"),
    lesson(4, "ሆቴል የት ነው? (Hotel yet new?)", "Where is the hotel?", "Directions"),
    lesson(5, "ቀኝ (Qegn)", "Right", "Directions"),
    lesson(6, "ግራ (Gra)", "Left", "Directions"),
    lesson(7, "ዶሮ (Doro)", "Chicken", "Food"),
    lesson(8, "ሩዝ (Ruz)", "Rice", "Food"),
    lesson(9, "ውሃ (Wiha)", "Water", "Food"),
];

const YORUBA: &[ListeningLesson] = &[
    lesson(1, "Bawo ni", "Hello", "Greetings"),
    lesson(2, "E se", "Thank you", "Greetings"),
    lesson(3, "O dabo", "Goodbye", "Greetings"),
    lesson(4, "Nibo ni hotẹẹli wa?", "Where is the hotel?", "Directions"),
    lesson(5, "Ọtun", "Right", "Directions"),
    lesson(6, "Osi", "Left", "Directions"),
    lesson(7, "Adie", "Chicken", "Food"),
    lesson(8, "Iresi", "Rice", "Food"),
    lesson(9, "Omi", "Water", "Food"),
];

const ZULU: &[ListeningLesson] = &[
    lesson(1, "Sawubona", "Hello", "Greetings"),
    lesson(2, "Ngiyabonga", "Thank you", "Greetings"),
    lesson(3, "Hamba kahle", "Goodbye", "Greetings"),
    lesson(4, "Ihhotela likuphi?", "Where is the hotel?", "Directions"),
    lesson(5, "Kwesokudla", "Right", "Directions"),
    lesson(6, "Kwesokunxele", "Left", "Directions"),
    lesson(7, "Inkukhu", "Chicken", "Food"),
    lesson(8, "Irayisi", "Rice", "Food"),
    lesson(9, "Amanzi", "Water", "Food"),
];

/// Lessons for a language; empty when the language has none
pub fn lessons_for(language_id: u64) -> &'static [ListeningLesson] {
    match language_id {
        1 => ARABIC,
        2 => SWAHILI,
        3 => HAUSA,
        4 => AMHARIC,
        5 => YORUBA,
        6 => ZULU,
        _ => &[],
    }
}

pub fn find_lesson(language_id: u64, lesson_id: u32) -> Option<&'static ListeningLesson> {
    lessons_for(language_id).iter().find(|l| l.id == lesson_id)
}

/// Lessons grouped in category display order, skipping empty categories
pub fn lessons_by_category(language_id: u64) -> Vec<(&'static str, Vec<&'static ListeningLesson>)> {
    let lessons = lessons_for(language_id);
    CATEGORIES
        .iter()
        .map(|category| {
            let items: Vec<_> = lessons.iter().filter(|l| l.category == *category).collect();
            (*category, items)
        })
        .filter(|(_, items)| !items.is_empty())
        .collect()
}
