//! Question bank module
//!
//! This module handles loading question sets from JSON files, validating
//! them, and drawing random samples for quiz sessions. A bank reads its
//! backing file at most once; the parsed set is cached and immutable for
//! the lifetime of the bank.

mod question;
mod sampler;

pub use question::*;
pub use sampler::*;

#[cfg(test)]
mod property_tests;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::error::{QuizError, Result};

/// File-backed question repository with load-once caching
#[derive(Debug)]
pub struct QuestionBank {
    path: PathBuf,
    cache: OnceCell<Vec<Question>>,
}

impl QuestionBank {
    /// Point the bank at a JSON question file without reading it yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse, and validate the backing file. The first successful
    /// call caches the parsed set; later calls return the cached set
    /// without touching the filesystem.
    pub fn load(&self) -> Result<&[Question]> {
        let questions = self.cache.get_or_try_init(|| read_questions(&self.path))?;
        Ok(questions.as_slice())
    }

    /// Load (or reuse the cached set) and draw `count` questions
    pub fn sample(&self, count: usize) -> Result<Vec<Question>> {
        sampler::sample(self.load()?, count)
    }
}

fn read_questions(path: &Path) -> Result<Vec<Question>> {
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        // A file that exists but is not UTF-8 is malformed data, not a missing source
        io::ErrorKind::InvalidData => {
            QuizError::DataFormat(format!("{} is not valid UTF-8", path.display()))
        }
        _ => QuizError::DataNotFound {
            path: path.display().to_string(),
            source,
        },
    })?;
    let questions = parse_questions(&raw)?;
    log::debug!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Parse a JSON question array and validate every entry
pub fn parse_questions(raw: &str) -> Result<Vec<Question>> {
    let questions: Vec<Question> =
        serde_json::from_str(raw).map_err(|e| QuizError::DataFormat(e.to_string()))?;

    for (index, question) in questions.iter().enumerate() {
        if let Some(reason) = question.integrity_error() {
            return Err(QuizError::DataFormat(format!(
                "question {}: {}",
                index, reason
            )));
        }
        if question.options.len() < 2 {
            log::warn!("question {} offers a single option", index);
        }
    }

    if questions.is_empty() {
        log::warn!("question bank is empty");
    }

    Ok(questions)
}
