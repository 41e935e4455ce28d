use serde::Serialize;
use std::fmt::Write;

use crate::types::{BetReport, MatchResult, PrizeTier};
use crate::utils::{format_numbers, normalize_draw_date};

pub const NO_PRIZE_MESSAGE: &str = "This bet would never have won any prize.";

pub fn render_text(report: &BetReport) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Loaded {} historical draws", report.total_draws);
    let _ = writeln!(out, "\nChecking bet: {}", format_numbers(report.bet.numbers()));

    if report.results.is_empty() {
        let _ = writeln!(out, "{}", NO_PRIZE_MESSAGE);
        return out;
    }

    let _ = writeln!(
        out,
        "\nThis bet would have won {} time(s):",
        report.results.len()
    );
    for (index, result) in report.results.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n{}. Contest {} ({})",
            index + 1,
            result.contest_number,
            result.date
        );
        let _ = writeln!(out, "   {}", result.prize_tier.label());
        let _ = writeln!(
            out,
            "   Matching numbers: {}",
            format_numbers(&result.matching_numbers)
        );
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total_draws: usize,
    bet: &'a [u8],
    wins: usize,
    results: Vec<JsonResult<'a>>,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    rank: usize,
    contest_number: u32,
    date: &'a str,
    date_iso: Option<String>,
    prize_tier: PrizeTier,
    match_count: usize,
    matching_numbers: &'a [u8],
}

impl<'a> JsonResult<'a> {
    fn new(rank: usize, result: &'a MatchResult) -> Self {
        Self {
            rank,
            contest_number: result.contest_number,
            date: &result.date,
            date_iso: normalize_draw_date(&result.date),
            prize_tier: result.prize_tier,
            match_count: result.match_count,
            matching_numbers: &result.matching_numbers,
        }
    }
}

pub fn render_json(report: &BetReport) -> serde_json::Result<String> {
    let json = JsonReport {
        total_draws: report.total_draws,
        bet: report.bet.numbers(),
        wins: report.results.len(),
        results: report
            .results
            .iter()
            .enumerate()
            .map(|(index, result)| JsonResult::new(index + 1, result))
            .collect(),
    };
    serde_json::to_string_pretty(&json)
}
