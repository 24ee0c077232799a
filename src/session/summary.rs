//! Final score and review data for a finished session

use crate::bank::Question;

use super::AnswerRecord;

/// One reviewed question: what was asked paired with how it was answered
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    pub question: Question,
    pub record: AnswerRecord,
}

/// Final result of a finished session
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of correctly answered questions
    pub score: usize,
    /// Number of questions in the session
    pub total: usize,
    /// Every question paired with its record, in session order
    pub review: Vec<ReviewEntry>,
}

impl Summary {
    /// Share of correct answers as a percentage, `None` when the session
    /// had no questions and the ratio is undefined
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.score as f64 * 100.0 / self.total as f64)
        }
    }
}
