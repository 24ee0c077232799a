//! Property tests for the question bank
//!
//! Covers label resolution on arbitrary well-formed questions and the
//! sampling guarantees (size, uniqueness, membership, determinism).

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::bank::{sample_with_rng, Question};
use crate::error::QuizError;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

const LABELS: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Generate a well-formed question with 2 to 5 options
fn question_strategy() -> impl Strategy<Value = Question> {
    (
        2usize..=5,
        "[a-z ]{5,40}",
        "[a-z ]{0,60}",
        any::<prop::sample::Index>(),
    )
        .prop_map(|(option_count, prompt, explanation, correct_pick)| {
            let options: BTreeMap<String, String> = LABELS[..option_count]
                .iter()
                .map(|label| (label.to_string(), format!("choice {}", label)))
                .collect();
            let correct = LABELS[correct_pick.index(option_count)].to_string();
            Question {
                prompt,
                options,
                correct,
                explanation,
            }
        })
}

/// Generate a bank of 1 to `max` questions with distinct prompts
fn bank_strategy(max: usize) -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(question_strategy(), 1..=max).prop_map(|mut questions| {
        for (i, question) in questions.iter_mut().enumerate() {
            question.prompt = format!("{}: {}", i, question.prompt);
        }
        questions
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Generated questions always pass validation
    #[test]
    fn prop_generated_questions_validate(q in question_strategy()) {
        prop_assert!(q.validate().is_ok());
    }

    /// A correct label outside the option set always fails validation
    #[test]
    fn prop_foreign_correct_label_fails_validation(mut q in question_strategy()) {
        q.correct = "Z".to_string();
        prop_assert!(matches!(q.validate(), Err(QuizError::DataFormat(_))));
    }

    /// Any stored label resolves to itself regardless of input casing
    #[test]
    fn prop_labels_resolve_case_insensitively(q in question_strategy()) {
        for label in q.labels() {
            prop_assert_eq!(q.canonical_label(&label.to_lowercase()), Some(label));
            prop_assert_eq!(q.canonical_label(&format!(" {} ", label)), Some(label));
        }
    }

    /// The correct label always resolves and its text is non-empty
    #[test]
    fn prop_correct_label_always_resolves(q in question_strategy()) {
        prop_assert!(q.is_valid_choice(&q.correct));
        prop_assert!(!q.correct_text().is_empty());
    }

    /// Sampling returns exactly the requested number of distinct questions,
    /// all of them drawn from the bank
    #[test]
    fn prop_sample_size_and_membership(
        bank in bank_strategy(30),
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>()
    ) {
        let count = pick.index(bank.len()) + 1;
        let mut rng = StdRng::seed_from_u64(seed);
        let drawn = sample_with_rng(&bank, count, &mut rng).unwrap();

        prop_assert_eq!(drawn.len(), count);

        let mut seen = HashSet::new();
        for question in &drawn {
            prop_assert!(bank.contains(question));
            prop_assert!(
                seen.insert(question.prompt.clone()),
                "duplicate question {}",
                question.prompt
            );
        }
    }

    /// Drawing the whole bank yields a permutation of it
    #[test]
    fn prop_full_draw_is_permutation(bank in bank_strategy(15), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let drawn = sample_with_rng(&bank, bank.len(), &mut rng).unwrap();

        let mut drawn_prompts: Vec<String> = drawn.iter().map(|q| q.prompt.clone()).collect();
        let mut bank_prompts: Vec<String> = bank.iter().map(|q| q.prompt.clone()).collect();
        drawn_prompts.sort();
        bank_prompts.sort();
        prop_assert_eq!(drawn_prompts, bank_prompts);
    }

    /// The same seed always draws the same sample
    #[test]
    fn prop_same_seed_same_sample(
        bank in bank_strategy(20),
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>()
    ) {
        let count = pick.index(bank.len()) + 1;
        let a = sample_with_rng(&bank, count, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = sample_with_rng(&bank, count, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Asking for more questions than the bank holds is always rejected
    #[test]
    fn prop_oversized_request_rejected(bank in bank_strategy(10), extra in 1usize..=50) {
        let mut rng = StdRng::seed_from_u64(1);
        let result = sample_with_rng(&bank, bank.len() + extra, &mut rng);
        prop_assert!(
            matches!(result, Err(QuizError::NotEnoughQuestions { .. })),
            "drawing {} from a bank of {} must fail",
            bank.len() + extra,
            bank.len()
        );
    }

    /// A zero-size draw is always rejected
    #[test]
    fn prop_zero_draw_rejected(bank in bank_strategy(10)) {
        let mut rng = StdRng::seed_from_u64(1);
        let result = sample_with_rng(&bank, 0, &mut rng);
        prop_assert!(matches!(result, Err(QuizError::EmptySession)));
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_property_tests_compile() {
        assert!(true);
    }
}
