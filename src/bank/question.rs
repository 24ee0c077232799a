//! Question data structures

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::error::{QuizError, Result};

/// Normalize an option label for comparison: surrounding whitespace is
/// dropped and case is folded, so a typed "b " matches a stored "B".
#[inline]
pub fn normalize_label(label: &str) -> String {
    label.trim().to_uppercase()
}

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    /// Question text shown to the user
    pub prompt: String,
    /// Answer options keyed by label; sorted key order is the canonical
    /// display order
    pub options: BTreeMap<String, String>,
    /// Label of the correct option
    pub correct: String,
    /// Explanation shown once the answer is recorded
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Option labels in canonical (sorted) display order
    pub fn labels(&self) -> Vec<&str> {
        self.options.keys().map(String::as_str).collect()
    }

    /// Option labels in a freshly shuffled display order. Presentation only:
    /// grading always compares labels, never display positions.
    pub fn labels_shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&str> {
        let mut labels = self.labels();
        labels.shuffle(rng);
        labels
    }

    /// Resolve user input to the stored label it names, if any
    pub fn canonical_label(&self, input: &str) -> Option<&str> {
        let wanted = normalize_label(input);
        self.options
            .keys()
            .find(|label| normalize_label(label) == wanted)
            .map(String::as_str)
    }

    /// Whether `input` names one of this question's options
    #[inline]
    pub fn is_valid_choice(&self, input: &str) -> bool {
        self.canonical_label(input).is_some()
    }

    /// Stored label of the correct option
    pub fn correct_label(&self) -> &str {
        self.canonical_label(&self.correct).unwrap_or(&self.correct)
    }

    /// Text of the correct option, for feedback display
    pub fn correct_text(&self) -> &str {
        self.options
            .get(self.correct_label())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Check the invariants the deserializer cannot express
    pub fn validate(&self) -> Result<()> {
        match self.integrity_error() {
            Some(reason) => Err(QuizError::DataFormat(reason)),
            None => Ok(()),
        }
    }

    /// First broken invariant, described without positional context so bank
    /// loading can prepend the question index
    pub(crate) fn integrity_error(&self) -> Option<String> {
        if self.options.is_empty() {
            return Some("no options".to_string());
        }

        // Labels must survive normalization and stay distinct afterwards,
        // otherwise answer resolution becomes ambiguous
        let mut seen: Vec<String> = Vec::with_capacity(self.options.len());
        for label in self.options.keys() {
            let normalized = normalize_label(label);
            if normalized.is_empty() {
                return Some(format!("blank option label {:?}", label));
            }
            if seen.contains(&normalized) {
                return Some(format!("option labels collide on {:?}", normalized));
            }
            seen.push(normalized);
        }

        if self.canonical_label(&self.correct).is_none() {
            return Some(format!(
                "correct label {:?} is not among the options [{}]",
                self.correct,
                self.labels().join(", ")
            ));
        }

        None
    }
}
