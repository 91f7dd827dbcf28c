//! Random question sampling from a bank pool.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::bank::QuestionBank;
use crate::model::{Difficulty, QuestionRecord};

/// Draw up to `count` distinct questions from the (subject, difficulty) pool
/// in random order.
///
/// An unknown key or an empty pool yields an empty vector. When `count`
/// covers the whole pool, the entire pool is returned shuffled.
pub fn sample<R: Rng + ?Sized>(
    bank: &QuestionBank,
    subject: &str,
    difficulty: Difficulty,
    count: usize,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    let pool = bank.pool(subject, difficulty);
    if pool.is_empty() {
        tracing::debug!("no questions for {subject} ({difficulty})");
        return Vec::new();
    }

    let mut picked = pool.to_vec();
    picked.shuffle(rng);
    picked.truncate(count);

    tracing::debug!(
        "sampled {} of {} question(s) for {subject} ({difficulty})",
        picked.len(),
        pool.len()
    );
    picked
}

/// [`sample`] with the thread-local RNG.
pub fn sample_questions(
    bank: &QuestionBank,
    subject: &str,
    difficulty: Difficulty,
    count: usize,
) -> Vec<QuestionRecord> {
    sample(bank, subject, difficulty, count, &mut rand::rng())
}
