//! QuizSession - Stateful walk through a sampled question set
//!
//! A session owns its questions and an answer record slot per question.
//! It moves through three phases per question: the current question is
//! shown, an answer is recorded, and an explicit advance moves on. Once
//! the last question is advanced past, the session freezes and only the
//! summary remains reachable.

use crate::bank::{sample, Question};
use crate::error::{QuizError, Result};

use super::{ReviewEntry, Summary};

// ============================================================================
// Answer Records
// ============================================================================

/// Outcome of one submitted answer. Written once when the answer is
/// recorded and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    /// Stored label the user chose (canonical form, not raw input)
    pub chosen: String,
    /// Whether the chosen label was the correct one
    pub correct: bool,
}

/// Outcome of [`QuizSession::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The session moved on to the question at this index
    Next(usize),
    /// The last question was advanced past; the session is finished
    Finished,
}

// ============================================================================
// Session State Machine
// ============================================================================

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// The current question has no recorded answer yet
    Answering,
    /// The current question has a recorded answer; feedback is on display
    Feedback,
    /// Every question has been answered and advanced past
    Finished,
}

/// QuizSession - one run through a set of questions
///
/// Fields stay private so the counters can never drift from the records:
/// `score` always equals the number of correct records, and `index` only
/// ever moves forward one question at a time.
#[derive(Debug, Clone)]
pub struct QuizSession {
    /// Questions in presentation order
    questions: Vec<Question>,
    /// One record slot per question, filled as answers arrive
    records: Vec<Option<AnswerRecord>>,
    /// Position of the current question, `questions.len()` once finished
    index: usize,
    /// Running count of correct answers
    score: usize,
    /// Current phase
    phase: Phase,
}

impl QuizSession {
    /// Start a session over an already-sampled question list
    pub fn start(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptySession);
        }
        let slots = questions.len();
        Ok(Self {
            questions,
            records: vec![None; slots],
            index: 0,
            score: 0,
            phase: Phase::Answering,
        })
    }

    /// Draw `size` questions from `all` and start a session over the draw
    pub fn start_sampled(all: &[Question], size: usize) -> Result<Self> {
        Self::start(sample(all, size)?)
    }

    /// Drop all progress and begin again over a fresh question list
    pub fn restart(&mut self, questions: Vec<Question>) -> Result<()> {
        *self = Self::start(questions)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of questions in this session
    #[inline]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Index of the current question (equals [`total`](Self::total) once
    /// finished)
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Running count of correct answers
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of questions with a recorded answer
    pub fn answered(&self) -> usize {
        self.records.iter().flatten().count()
    }

    /// Whether the last question has been advanced past
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The question on display, plus its answer record once one exists
    pub fn current(&self) -> Result<(&Question, Option<&AnswerRecord>)> {
        if self.phase == Phase::Finished {
            return Err(QuizError::SessionFinished);
        }
        Ok((&self.questions[self.index], self.records[self.index].as_ref()))
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Record the user's choice for the current question and grade it.
    ///
    /// Input is matched against the option labels ignoring case and
    /// surrounding whitespace. Anything that names no option is rejected
    /// without touching the session, and a question that already has a
    /// record cannot be answered again.
    pub fn submit(&mut self, label: &str) -> Result<AnswerRecord> {
        match self.phase {
            Phase::Finished => return Err(QuizError::SessionFinished),
            Phase::Feedback => return Err(QuizError::AlreadyAnswered(self.index)),
            Phase::Answering => {}
        }

        let question = &self.questions[self.index];
        let chosen = question
            .canonical_label(label)
            .ok_or_else(|| QuizError::InvalidChoice(label.to_string()))?
            .to_string();

        let record = AnswerRecord {
            correct: chosen == question.correct_label(),
            chosen,
        };
        if record.correct {
            self.score += 1;
        }
        log::debug!(
            "question {}: chose {:?} ({})",
            self.index,
            record.chosen,
            if record.correct { "correct" } else { "wrong" }
        );

        self.records[self.index] = Some(record.clone());
        self.phase = Phase::Feedback;
        Ok(record)
    }

    /// Move past the current (answered) question.
    ///
    /// Advancing is only legal from the feedback phase, so a question can
    /// never be skipped without a recorded answer.
    pub fn advance(&mut self) -> Result<Advance> {
        match self.phase {
            Phase::Finished => Err(QuizError::SessionFinished),
            Phase::Answering => Err(QuizError::Unanswered(self.index)),
            Phase::Feedback => {
                self.index += 1;
                if self.index < self.questions.len() {
                    self.phase = Phase::Answering;
                    Ok(Advance::Next(self.index))
                } else {
                    self.phase = Phase::Finished;
                    log::debug!(
                        "session finished: {}/{} correct",
                        self.score,
                        self.questions.len()
                    );
                    Ok(Advance::Finished)
                }
            }
        }
    }

    /// Final score and per-question review, only once the session finished
    pub fn summary(&self) -> Result<Summary> {
        if self.phase != Phase::Finished {
            return Err(QuizError::NotFinished {
                index: self.index,
                total: self.questions.len(),
            });
        }

        let review: Vec<ReviewEntry> = self
            .questions
            .iter()
            .zip(self.records.iter())
            .filter_map(|(question, record)| {
                record.as_ref().map(|record| ReviewEntry {
                    question: question.clone(),
                    record: record.clone(),
                })
            })
            .collect();

        Ok(Summary {
            score: self.score,
            total: self.questions.len(),
            review,
        })
    }
}
