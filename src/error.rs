//! Error types for the quiz engine

use thiserror::Error;

/// Main error type for the quiz engine
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Question file not found: {path}")]
    DataNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed question data: {0}")]
    DataFormat(String),

    #[error("Invalid choice: {0:?} is not one of the offered options")]
    InvalidChoice(String),

    #[error("Question {0} already has a recorded answer")]
    AlreadyAnswered(usize),

    #[error("Question {0} has no recorded answer yet")]
    Unanswered(usize),

    #[error("A session needs at least one question")]
    EmptySession,

    #[error("Requested {requested} questions but only {available} are available")]
    NotEnoughQuestions { requested: usize, available: usize },

    #[error("The session is already finished")]
    SessionFinished,

    #[error("The session is still running (question {} of {total})", .index + 1)]
    NotFinished { index: usize, total: usize },
}

/// Result type alias for the quiz engine
pub type Result<T> = std::result::Result<T, QuizError>;
