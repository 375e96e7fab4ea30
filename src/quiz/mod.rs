//! Quiz domain: choices, categories, the answer log and the state machine.
//!
//! The machine is a linear cycle driven by accepted button presses:
//!
//! ```text
//!   Idle ──press──▶ Running ──10th answer──▶ Completed ──press──▶ Idle
//!                    │   ▲
//!                    └───┘ answer 1..9
//! ```
//!
//! It never touches hardware; every call returns a [`Transition`] that
//! the caller turns into log lines and a redraw of [`Quiz::screen`].

pub mod catalog;
pub mod scoring;

#[cfg(test)]
mod tests;

use crate::config::{OPTION_COUNT, QUESTION_COUNT};
use crate::ui::Screen;

/// A button-press outcome, positionally matching option A..D.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    /// All choices in button priority order.
    pub const ALL: [Choice; OPTION_COUNT] = [Choice::A, Choice::B, Choice::C, Choice::D];

    /// Zero-based position (0..=3).
    pub const fn ordinal(self) -> usize {
        match self {
            Choice::A => 0,
            Choice::B => 1,
            Choice::C => 2,
            Choice::D => 3,
        }
    }

    /// One-based number as shown in diagnostics (1..=4).
    pub const fn number(self) -> u8 {
        self.ordinal() as u8 + 1
    }
}

/// Result labels.  Ordinal `n` is won by answering choice `n + 1` most.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
}

impl Category {
    pub const ALL: [Category; OPTION_COUNT] = [
        Category::Gryffindor,
        Category::Hufflepuff,
        Category::Ravenclaw,
        Category::Slytherin,
    ];

    pub const fn ordinal(self) -> usize {
        match self {
            Category::Gryffindor => 0,
            Category::Hufflepuff => 1,
            Category::Ravenclaw => 2,
            Category::Slytherin => 3,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Gryffindor => "Gryffindor",
            Category::Hufflepuff => "Hufflepuff",
            Category::Ravenclaw => "Ravenclaw",
            Category::Slytherin => "Slytherin",
        }
    }
}

impl From<Choice> for Category {
    fn from(choice: Choice) -> Self {
        Category::ALL[choice.ordinal()]
    }
}

/// Overall phase of the appliance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Welcome screen, waiting for any press.
    Idle,
    /// Questions being answered.
    Running,
    /// Result on screen, waiting for any press to restart.
    Completed,
}

/// Ten answer slots, filled strictly in order.
///
/// A slot is only ever written once; the whole log is cleared on reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnswerLog {
    slots: [Option<Choice>; QUESTION_COUNT],
}

impl AnswerLog {
    pub const fn new() -> Self {
        Self {
            slots: [None; QUESTION_COUNT],
        }
    }

    pub fn slots(&self) -> &[Option<Choice>; QUESTION_COUNT] {
        &self.slots
    }

    /// Number of answered slots.
    pub fn answered(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// All ten answers, or `None` while any slot is still open.
    pub fn complete(&self) -> Option<[Choice; QUESTION_COUNT]> {
        let mut out = [Choice::A; QUESTION_COUNT];
        for (dst, slot) in out.iter_mut().zip(self.slots.iter()) {
            *dst = (*slot)?;
        }
        Some(out)
    }

    /// Store `choice` in an empty slot.  Returns `false` (and leaves the
    /// log untouched) if the slot is taken or out of range.
    fn record(&mut self, index: usize, choice: Choice) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(choice);
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        self.slots = [None; QUESTION_COUNT];
    }
}

/// What a single accepted press did to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Idle → Running; question 0 is now current.
    Started,
    /// An answer was recorded; the quiz moved on to `question + 1`.
    Answered { question: usize, choice: Choice },
    /// The last answer was recorded and scored.  Running → Completed.
    Completed {
        question: usize,
        choice: Choice,
        category: Category,
    },
    /// Completed → Idle; answers cleared.
    Reset,
}

/// The quiz state machine.  Owns the answer log exclusively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    phase: Phase,
    current: usize,
    answers: AnswerLog,
    result: Option<Category>,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Quiz {
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            current: 0,
            answers: AnswerLog::new(),
            result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the question on screen; only meaningful while running.
    pub fn current_question(&self) -> Option<usize> {
        match self.phase {
            Phase::Running => Some(self.current),
            _ => None,
        }
    }

    pub fn answers(&self) -> &AnswerLog {
        &self.answers
    }

    /// Winning category of the finished quiz.
    pub fn result(&self) -> Option<Category> {
        self.result
    }

    /// Feed one accepted press.
    pub fn press(&mut self, choice: Choice) -> Transition {
        match self.phase {
            Phase::Idle => {
                self.current = 0;
                self.phase = Phase::Running;
                Transition::Started
            }
            Phase::Running => {
                let question = self.current;
                let recorded = self.answers.record(question, choice);
                debug_assert!(recorded, "answer slot {} already taken", question);
                self.current += 1;

                match self.answers.complete() {
                    Some(full) => {
                        let category = scoring::winner(&full);
                        self.result = Some(category);
                        self.phase = Phase::Completed;
                        Transition::Completed {
                            question,
                            choice,
                            category,
                        }
                    }
                    None => Transition::Answered { question, choice },
                }
            }
            Phase::Completed => {
                self.answers.clear();
                self.current = 0;
                self.result = None;
                self.phase = Phase::Idle;
                Transition::Reset
            }
        }
    }

    /// The screen that represents the current state.
    pub fn screen(&self) -> Screen {
        match self.phase {
            Phase::Idle => Screen::Welcome,
            Phase::Running => Screen::Question(self.current),
            Phase::Completed => self.result.map_or(Screen::Welcome, Screen::Result),
        }
    }
}
