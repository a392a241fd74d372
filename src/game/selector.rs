//! Deterministic "player of the day" selection.
//!
//! The seed is a SHA-256 digest of the ISO date and the category's sex code,
//! reduced modulo [`SEED_MODULUS`]. Each call builds its own generator from
//! that seed, so concurrent selections never share RNG state.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::Category;

pub const SEED_MODULUS: u64 = 100_000_000;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no players available")]
    NoPlayers,
}

/// Seed string for a day, e.g. `2024-08-01-M`
pub fn seed_string(date: NaiveDate, category: Category) -> String {
    format!("{}-{}", date.format("%Y-%m-%d"), category.sex_code())
}

/// Digest of the seed string read as a big-endian integer, modulo `SEED_MODULUS`
pub fn daily_seed(date: NaiveDate, category: Category) -> u64 {
    let digest = Sha256::digest(seed_string(date, category).as_bytes());

    digest
        .iter()
        .fold(0u64, |acc, &byte| (acc * 256 + u64::from(byte)) % SEED_MODULUS)
}

/// Pick the target id for `date` and `category` from `eligible_ids`.
///
/// Ids are sorted and de-duplicated first, so the result only depends on the
/// set of ids and not on the order the store returned them in.
pub fn select_daily_target(
    date: NaiveDate,
    category: Category,
    eligible_ids: &[i64],
) -> Result<i64, SelectionError> {
    let mut ids = eligible_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    let seed = daily_seed(date, category);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let chosen = ids
        .choose(&mut rng)
        .copied()
        .ok_or(SelectionError::NoPlayers)?;

    tracing::debug!(
        %date,
        ?category,
        seed,
        chosen,
        candidates = ids.len(),
        "Selected daily target"
    );

    Ok(chosen)
}
