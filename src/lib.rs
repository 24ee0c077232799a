//! Quiz Core - Multiple-choice quiz engine
//!
//! This crate loads question banks from JSON, draws random samples, and
//! walks a quiz session one question at a time: show, answer, grade,
//! advance, and finally summarize with a per-question review. All terminal
//! I/O lives in the `quiz` binary; the library itself only ever touches the
//! filesystem to read a bank.
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use quiz_core::{Advance, Question, QuizSession};
//!
//! # fn main() -> quiz_core::Result<()> {
//! let questions = vec![Question {
//!     prompt: "2 + 2 = ?".to_string(),
//!     options: BTreeMap::from([
//!         ("A".to_string(), "3".to_string()),
//!         ("B".to_string(), "4".to_string()),
//!     ]),
//!     correct: "B".to_string(),
//!     explanation: "Basic arithmetic.".to_string(),
//! }];
//!
//! let mut session = QuizSession::start(questions)?;
//! let record = session.submit("b")?;
//! assert!(record.correct);
//! assert_eq!(session.advance()?, Advance::Finished);
//!
//! let summary = session.summary()?;
//! assert_eq!(summary.score, 1);
//! assert_eq!(summary.percentage(), Some(100.0));
//! # Ok(())
//! # }
//! ```

pub mod bank;
pub mod error;
pub mod session;

pub use bank::{parse_questions, sample, sample_with_rng, Question, QuestionBank};
pub use error::{QuizError, Result};
pub use session::{Advance, AnswerRecord, QuizSession, ReviewEntry, Summary};
