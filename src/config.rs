use std::env;
use std::path::PathBuf;

use crate::archive::DEFAULT_SEPARATOR;
use crate::error::{CheckerError, CheckerResult};

pub const DEFAULT_ARCHIVE_PATH: &str = "./mega-sena.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub archive_path: PathBuf,
    pub separator: char,
}

/// Command-line values win; the environment is only read for what they leave unset.
pub fn load_with(archive: Option<PathBuf>, separator: Option<&str>) -> CheckerResult<Config> {
    let archive_path = archive.unwrap_or_else(|| {
        env::var("MEGA_SENA_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ARCHIVE_PATH))
    });

    let separator = match separator {
        Some(raw) => parse_separator(raw)?,
        None => match env::var("MEGA_SENA_SEPARATOR") {
            Ok(raw) => parse_separator(&raw)?,
            Err(_) => DEFAULT_SEPARATOR,
        },
    };

    Ok(Config {
        archive_path,
        separator,
    })
}

pub fn parse_separator(raw: &str) -> CheckerResult<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CheckerError::InvalidConfig(format!(
            "separator must be a single character, got {:?}",
            raw
        ))),
    }
}
