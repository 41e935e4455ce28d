use clap::Parser;
use std::path::PathBuf;

use crate::error::{CheckerError, CheckerResult};
use crate::types::{Bet, MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_DRAW};

/// Check a Mega-Sena bet against every historical draw
///
/// Reports each past contest where the six numbers would have matched
/// 4 (Quadra), 5 (Quina) or 6 (Sena) numbers, most recent first.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The six bet numbers, each between 1 and 60
    #[arg(value_name = "NUMBER", num_args = 0.., allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Draw archive (defaults to $MEGA_SENA_CSV or ./mega-sena.csv)
    #[arg(short, long, value_name = "FILE")]
    pub archive: Option<PathBuf>,

    /// Field separator used by the archive (defaults to $MEGA_SENA_SEPARATOR or ';')
    #[arg(short, long, value_name = "CHAR")]
    pub separator: Option<String>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable verbose logging (use -vv for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn usage() -> String {
    let bin = env!("CARGO_PKG_NAME");
    format!(
        "Usage: {bin} [OPTIONS] <num1> <num2> <num3> <num4> <num5> <num6>\n\
         Example: {bin} 6 11 4 49 54 38"
    )
}

pub fn check_argument_count(args: &[String]) -> CheckerResult<()> {
    if args.len() != NUMBERS_PER_DRAW {
        return Err(CheckerError::InvalidArgumentCount(args.len()));
    }
    Ok(())
}

/// Parses one bet argument. Integers that do not fit a `u8` are still
/// reported as out of range, naming the original text.
pub fn parse_number(arg: &str) -> CheckerResult<u8> {
    let value: i64 = arg
        .trim()
        .parse()
        .map_err(|_| CheckerError::InvalidNumberFormat(arg.to_string()))?;

    if value < i64::from(MIN_NUMBER) || value > i64::from(MAX_NUMBER) {
        return Err(CheckerError::InvalidBetRange(arg.to_string()));
    }
    Ok(value as u8)
}

/// Turns the raw positional arguments into a validated bet.
pub fn parse_bet(args: &[String]) -> CheckerResult<Bet> {
    check_argument_count(args)?;
    let numbers = args
        .iter()
        .map(|arg| parse_number(arg))
        .collect::<CheckerResult<Vec<u8>>>()?;
    Bet::new(&numbers)
}
