use serde::Serialize;
use std::fmt;

use crate::error::{CheckerError, CheckerResult};

pub const NUMBERS_PER_DRAW: usize = 6;
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 60;

/// Smallest match count that pays a prize.
pub const MIN_WINNING_MATCHES: usize = 4;

/// One historical drawing as read from the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawRecord {
    pub contest_number: u32,
    pub date: String,
    /// Always six distinct values in 1..=60, ascending.
    pub numbers: [u8; NUMBERS_PER_DRAW],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrizeTier {
    Sena,
    Quina,
    Quadra,
}

impl PrizeTier {
    pub fn from_match_count(match_count: usize) -> Option<PrizeTier> {
        match match_count {
            6 => Some(PrizeTier::Sena),
            5 => Some(PrizeTier::Quina),
            4 => Some(PrizeTier::Quadra),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrizeTier::Sena => "Sena (6 numbers)",
            PrizeTier::Quina => "Quina (5 numbers)",
            PrizeTier::Quadra => "Quadra (4 numbers)",
        }
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bet of six distinct numbers in 1..=60, kept sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bet([u8; NUMBERS_PER_DRAW]);

impl Bet {
    pub fn new(numbers: &[u8]) -> CheckerResult<Self> {
        let mut sorted = validate_numbers(numbers)?;
        sorted.sort_unstable();

        if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(CheckerError::DuplicateBetNumbers);
        }

        Ok(Bet(sorted))
    }

    pub fn numbers(&self) -> &[u8] {
        &self.0
    }
}

/// Size and range checks shared by `Bet::new` and the matcher.
/// Duplicates are not rejected here.
pub(crate) fn validate_numbers(numbers: &[u8]) -> CheckerResult<[u8; NUMBERS_PER_DRAW]> {
    let array: [u8; NUMBERS_PER_DRAW] = numbers
        .try_into()
        .map_err(|_| CheckerError::InvalidBetSize(numbers.len()))?;

    if let Some(&out_of_range) = array
        .iter()
        .find(|n| !(MIN_NUMBER..=MAX_NUMBER).contains(*n))
    {
        return Err(CheckerError::InvalidBetRange(out_of_range.to_string()));
    }

    Ok(array)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub contest_number: u32,
    pub date: String,
    pub matching_numbers: Vec<u8>,
    pub match_count: usize,
    pub prize_tier: PrizeTier,
}

/// Everything the presentation layer needs for one query.
#[derive(Debug, Serialize)]
pub struct BetReport {
    pub total_draws: usize,
    pub bet: Bet,
    pub results: Vec<MatchResult>,
}
