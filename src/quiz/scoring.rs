//! Plurality scoring of a finished answer log.

use super::{Category, Choice};
use crate::config::{OPTION_COUNT, QUESTION_COUNT};

/// Per-category answer counts, indexed by category ordinal.
pub type Tally = [u8; OPTION_COUNT];

/// Count how often each choice occurs in a finished log.
pub fn tally(answers: &[Choice; QUESTION_COUNT]) -> Tally {
    let mut counts = [0u8; OPTION_COUNT];
    for choice in answers {
        counts[choice.ordinal()] += 1;
    }
    counts
}

/// Pick the category with the strictly greatest count.
///
/// Ordinals are scanned in order and only a larger count replaces the
/// current leader, so a tie goes to the lowest ordinal.
pub fn winner(answers: &[Choice; QUESTION_COUNT]) -> Category {
    let counts = tally(answers);

    let mut best = 0;
    let mut best_count = 0;
    for (ordinal, &count) in counts.iter().enumerate() {
        if count > best_count {
            best_count = count;
            best = ordinal;
        }
    }

    Category::ALL[best]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(numbers: [u8; QUESTION_COUNT]) -> [Choice; QUESTION_COUNT] {
        numbers.map(|n| Choice::ALL[n as usize - 1])
    }

    #[test]
    fn all_same_choice_wins_outright() {
        assert_eq!(winner(&log([1; 10])), Category::Gryffindor);
        assert_eq!(winner(&log([3; 10])), Category::Ravenclaw);
    }

    #[test]
    fn tally_counts_each_choice() {
        let answers = log([1, 1, 2, 2, 3, 3, 4, 4, 1, 2]);
        assert_eq!(tally(&answers), [3, 3, 2, 2]);
    }

    #[test]
    fn tally_of_uniform_log_fills_one_bucket() {
        assert_eq!(tally(&[Choice::D; QUESTION_COUNT]), [0, 0, 0, 10]);
        let total: u8 = tally(&log([2, 4, 1, 3, 2, 4, 1, 3, 2, 2])).iter().sum();
        assert_eq!(total as usize, QUESTION_COUNT);
    }

    #[test]
    fn tie_goes_to_lowest_ordinal() {
        assert_eq!(winner(&log([1, 1, 2, 2, 3, 3, 4, 4, 1, 2])), Category::Gryffindor);
        assert_eq!(winner(&log([1, 2, 3, 4, 1, 2, 3, 4, 1, 2])), Category::Gryffindor);
        // Hufflepuff and Slytherin tied at 5, Hufflepuff is first.
        assert_eq!(winner(&log([4, 2, 4, 2, 4, 2, 4, 2, 4, 2])), Category::Hufflepuff);
    }

    #[test]
    fn late_category_wins_with_strict_majority() {
        assert_eq!(winner(&log([4, 4, 4, 4, 4, 4, 4, 4, 4, 3])), Category::Slytherin);
        assert_eq!(winner(&log([1, 2, 3, 3, 3, 4, 4, 2, 1, 3])), Category::Ravenclaw);
    }
}
