//! Random question sampling
//!
//! A draw shuffles a copy of the whole set and truncates it, so every
//! question has the same chance of appearing regardless of file order.

use rand::seq::SliceRandom;
use rand::Rng;

use super::Question;
use crate::error::{QuizError, Result};

/// Draw `count` distinct questions from `all` in random order
#[inline]
pub fn sample(all: &[Question], count: usize) -> Result<Vec<Question>> {
    sample_with_rng(all, count, &mut rand::thread_rng())
}

/// Like [`sample`], but with a caller-supplied generator so tests can pin
/// the permutation
pub fn sample_with_rng<R>(all: &[Question], count: usize, rng: &mut R) -> Result<Vec<Question>>
where
    R: Rng + ?Sized,
{
    if all.is_empty() || count == 0 {
        return Err(QuizError::EmptySession);
    }
    if count > all.len() {
        return Err(QuizError::NotEnoughQuestions {
            requested: count,
            available: all.len(),
        });
    }

    let mut drawn = all.to_vec();
    drawn.shuffle(rng);
    drawn.truncate(count);
    Ok(drawn)
}
