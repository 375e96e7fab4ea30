//! The fixed question catalog.
//!
//! Ten questions, four options each.  Option `n` of every question
//! leans towards the category with ordinal `n`, so the letter picked
//! maps straight onto a house.

use crate::config::{OPTION_COUNT, QUESTION_COUNT};

/// One immutable catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    /// Prompt text, numbered for display.
    pub prompt: &'static str,
    /// Option labels in button order (A..D), letter prefix included.
    pub options: [&'static str; OPTION_COUNT],
}

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        prompt: "1. What do you value?",
        options: ["A) Bravery", "B) Loyalty", "C) Intelligence", "D) Ambition"],
    },
    Question {
        prompt: "2. What to do if someone cheats?",
        options: [
            "A) Call them out",
            "B) Let them be",
            "C) Inform teacher",
            "D) Gain from it",
        ],
    },
    Question {
        prompt: "3. Favorite subject?",
        options: ["A) Defense Arts", "B) Herbology", "C) Charms", "D) Potions"],
    },
    Question {
        prompt: "4. How do you face challenges?",
        options: ["A) Face head-on", "B) Team up", "C) Plan first", "D) Outsmart it"],
    },
    Question {
        prompt: "5. How do friends describe you?",
        options: ["A) Bold", "B) Kind", "C) Smart", "D) Resourceful"],
    },
    Question {
        prompt: "6. What to do with a mystery book?",
        options: [
            "A) Read it now",
            "B) Check safety",
            "C) Study it",
            "D) Use for gain",
        ],
    },
    Question {
        prompt: "7. Preferred pet?",
        options: ["A) Owl", "B) Toad", "C) Cat", "D) Phoenix"],
    },
    Question {
        prompt: "8. How do you solve problems?",
        options: [
            "A) Act fast",
            "B) Find a compromise",
            "C) Analyze first",
            "D) Outsmart",
        ],
    },
    Question {
        prompt: "9. What kind of friends do you like?",
        options: ["A) Adventurous", "B) Loyal", "C) Thoughtful", "D) Powerful"],
    },
    Question {
        prompt: "10. Dream career?",
        options: ["A) Auror", "B) Healer", "C) Scholar", "D) Minister"],
    },
];

/// Look up a question by zero-based index.
pub fn question(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_numbered_questions() {
        assert_eq!(QUESTIONS.len(), 10);
        for (i, q) in QUESTIONS.iter().enumerate() {
            let prefix = std::format!("{}. ", i + 1);
            assert!(q.prompt.starts_with(prefix.as_str()), "{}", q.prompt);
        }
    }

    #[test]
    fn options_carry_their_button_letter() {
        for q in QUESTIONS.iter() {
            for (label, letter) in q.options.iter().zip(["A) ", "B) ", "C) ", "D) "]) {
                assert!(label.starts_with(letter), "{label}");
            }
        }
    }

    #[test]
    fn lookup_out_of_range_is_none() {
        assert_eq!(question(0).map(|q| q.prompt), Some("1. What do you value?"));
        assert!(question(QUESTION_COUNT).is_none());
    }
}
