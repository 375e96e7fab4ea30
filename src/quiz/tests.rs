//! Scenario tests for the quiz state machine.
//!
//! These tests run on the host (not embedded) and walk the machine
//! through full and partial quiz runs.

use super::{AnswerLog, Category, Choice, Phase, Quiz, Transition};
use crate::config::QUESTION_COUNT;
use crate::ui::Screen;

fn started() -> Quiz {
    let mut quiz = Quiz::new();
    assert_eq!(quiz.press(Choice::C), Transition::Started);
    quiz
}

fn answer_all(quiz: &mut Quiz, answers: [Choice; QUESTION_COUNT]) -> Transition {
    let mut last = None;
    for choice in answers {
        last = Some(quiz.press(choice));
    }
    last.unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Choice / Category
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn choice_numbers_follow_button_order() {
    for (i, choice) in Choice::ALL.iter().enumerate() {
        assert_eq!(choice.ordinal(), i);
        assert_eq!(choice.number() as usize, i + 1);
    }
}

#[test]
fn choice_maps_to_category_of_same_ordinal() {
    assert_eq!(Category::from(Choice::A), Category::Gryffindor);
    assert_eq!(Category::from(Choice::B), Category::Hufflepuff);
    assert_eq!(Category::from(Choice::C), Category::Ravenclaw);
    assert_eq!(Category::from(Choice::D), Category::Slytherin);
    assert_eq!(Category::Slytherin.ordinal(), 3);
    assert_eq!(Category::Ravenclaw.name(), "Ravenclaw");
}

// ═══════════════════════════════════════════════════════════════════════════
// Answer log
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn answer_log_starts_empty() {
    let log = AnswerLog::new();
    assert!(log.is_empty());
    assert_eq!(log.answered(), 0);
    assert_eq!(log.complete(), None);
    assert!(log.slots().iter().all(Option::is_none));
}

#[test]
fn answer_log_refuses_overwrite_and_out_of_range() {
    let mut log = AnswerLog::new();
    assert!(log.record(0, Choice::B));
    assert!(!log.record(0, Choice::D));
    assert_eq!(log.slots()[0], Some(Choice::B));
    assert!(!log.record(QUESTION_COUNT, Choice::A));
    assert_eq!(log.answered(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Transitions
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn new_quiz_is_idle_on_welcome() {
    let quiz = Quiz::new();
    assert_eq!(quiz.phase(), Phase::Idle);
    assert_eq!(quiz.current_question(), None);
    assert_eq!(quiz.screen(), Screen::Welcome);
    assert!(quiz.answers().is_empty());
}

#[test]
fn any_press_starts_without_recording() {
    let quiz = started();
    assert_eq!(quiz.phase(), Phase::Running);
    assert_eq!(quiz.current_question(), Some(0));
    assert_eq!(quiz.screen(), Screen::Question(0));
    assert!(quiz.answers().is_empty());
}

#[test]
fn each_answer_advances_exactly_one_question() {
    let mut quiz = started();
    for i in 0..QUESTION_COUNT - 1 {
        let choice = Choice::ALL[i % 4];
        assert_eq!(
            quiz.press(choice),
            Transition::Answered { question: i, choice }
        );
        assert_eq!(quiz.current_question(), Some(i + 1));
        assert_eq!(quiz.answers().answered(), i + 1);
        assert_eq!(quiz.answers().slots()[i], Some(choice));
        assert_eq!(quiz.screen(), Screen::Question(i + 1));
    }
}

#[test]
fn tenth_answer_completes_and_scores() {
    let mut quiz = started();
    let last = answer_all(&mut quiz, [Choice::D; QUESTION_COUNT]);
    assert_eq!(
        last,
        Transition::Completed {
            question: 9,
            choice: Choice::D,
            category: Category::Slytherin,
        }
    );
    assert_eq!(quiz.phase(), Phase::Completed);
    assert_eq!(quiz.current_question(), None);
    assert_eq!(quiz.result(), Some(Category::Slytherin));
    assert_eq!(quiz.screen(), Screen::Result(Category::Slytherin));
}

#[test]
fn tie_on_completion_picks_first_category() {
    use Choice::*;
    let mut quiz = started();
    answer_all(&mut quiz, [A, B, C, D, A, B, C, D, A, B]);
    assert_eq!(quiz.result(), Some(Category::Gryffindor));
}

#[test]
fn press_after_completion_resets_everything() {
    let mut quiz = started();
    answer_all(&mut quiz, [Choice::B; QUESTION_COUNT]);

    assert_eq!(quiz.press(Choice::A), Transition::Reset);
    assert_eq!(quiz.phase(), Phase::Idle);
    assert_eq!(quiz.screen(), Screen::Welcome);
    assert_eq!(quiz.result(), None);
    assert!(quiz.answers().is_empty());
    assert_eq!(quiz, Quiz::new());
}

#[test]
fn second_run_is_scored_independently() {
    let mut quiz = started();
    answer_all(&mut quiz, [Choice::A; QUESTION_COUNT]);
    quiz.press(Choice::A); // reset
    quiz.press(Choice::A); // start

    let last = answer_all(&mut quiz, [Choice::C; QUESTION_COUNT]);
    assert!(matches!(
        last,
        Transition::Completed {
            category: Category::Ravenclaw,
            ..
        }
    ));
}
