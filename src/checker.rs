use std::path::Path;

use crate::archive::load_archive;
use crate::error::CheckerResult;
use crate::types::{
    validate_numbers, Bet, BetReport, DrawRecord, MatchResult, PrizeTier, MIN_WINNING_MATCHES,
};

/// Holds a loaded archive and answers bet queries against it.
pub struct MegaSenaChecker {
    draws: Vec<DrawRecord>,
}

impl MegaSenaChecker {
    pub fn new(draws: Vec<DrawRecord>) -> Self {
        Self { draws }
    }

    pub fn from_file(path: &Path, separator: char) -> CheckerResult<Self> {
        Ok(Self::new(load_archive(path, separator)?))
    }

    /// Checks a raw bet. Size and range are validated here; duplicates are
    /// the caller's concern.
    pub fn check_bet(&self, bet_numbers: &[u8]) -> CheckerResult<Vec<MatchResult>> {
        let mut sorted_bet = validate_numbers(bet_numbers)?;
        sorted_bet.sort_unstable();
        Ok(self.scan(&sorted_bet))
    }

    pub fn check(&self, bet: &Bet) -> Vec<MatchResult> {
        self.scan(bet.numbers())
    }

    pub fn report(&self, bet: Bet) -> BetReport {
        BetReport {
            total_draws: self.get_total_draws(),
            results: self.check(&bet),
            bet,
        }
    }

    pub fn get_total_draws(&self) -> usize {
        self.draws.len()
    }

    pub fn draws(&self) -> &[DrawRecord] {
        &self.draws
    }

    // `sorted_bet` must be ascending.
    fn scan(&self, sorted_bet: &[u8]) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = self
            .draws
            .iter()
            .filter_map(|draw| {
                let matching_numbers = find_matching_numbers(sorted_bet, &draw.numbers);
                let match_count = matching_numbers.len();
                if match_count < MIN_WINNING_MATCHES {
                    return None;
                }
                let prize_tier = PrizeTier::from_match_count(match_count)?;

                Some(MatchResult {
                    contest_number: draw.contest_number,
                    date: draw.date.clone(),
                    matching_numbers,
                    match_count,
                    prize_tier,
                })
            })
            .collect();

        results.sort_by(|a, b| b.contest_number.cmp(&a.contest_number));
        tracing::debug!(
            draws = self.draws.len(),
            winners = results.len(),
            "scanned archive"
        );
        results
    }
}

fn find_matching_numbers(sorted_bet: &[u8], drawn_numbers: &[u8]) -> Vec<u8> {
    drawn_numbers
        .iter()
        .copied()
        .filter(|n| sorted_bet.binary_search(n).is_ok())
        .collect()
}
