use std::fs;
use std::path::Path;

use crate::error::{CheckerError, CheckerResult};
use crate::types::{DrawRecord, MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_DRAW};

/// Fields a row needs: contest, date and six numbers.
const MIN_FIELDS: usize = 2 + NUMBERS_PER_DRAW;

pub const DEFAULT_SEPARATOR: char = ';';

/// Reads the archive file and parses it. I/O failures are returned, never masked.
pub fn load_archive(path: &Path, separator: char) -> CheckerResult<Vec<DrawRecord>> {
    let text = fs::read_to_string(path).map_err(|source| CheckerError::ArchiveIo {
        path: path.to_path_buf(),
        source,
    })?;

    let draws = parse_archive(&text, separator);
    tracing::info!("Loaded {} draws from {}", draws.len(), path.display());
    Ok(draws)
}

/// Parse archive text into draws, keeping file order.
///
/// The first line is a header. Rows that are short, non-numeric, or carry
/// numbers outside 1..=60 or repeated numbers are skipped.
pub fn parse_archive(text: &str, separator: char) -> Vec<DrawRecord> {
    let mut draws = Vec::new();
    let mut skipped = 0usize;

    for line in text.trim().lines().skip(1) {
        match parse_row(line, separator) {
            Some(draw) => draws.push(draw),
            None => skipped += 1,
        }
    }

    tracing::debug!(accepted = draws.len(), skipped, "parsed draw archive");
    draws
}

fn parse_row(line: &str, separator: char) -> Option<DrawRecord> {
    let columns: Vec<&str> = line.split(separator).map(str::trim).collect();
    if columns.len() < MIN_FIELDS {
        return None;
    }

    let contest_number = columns[0].parse::<u32>().ok()?;
    let date = columns[1].to_string();

    let mut numbers = [0u8; NUMBERS_PER_DRAW];
    for (slot, raw) in numbers.iter_mut().zip(&columns[2..MIN_FIELDS]) {
        let n = raw.parse::<u8>().ok()?;
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&n) {
            return None;
        }
        *slot = n;
    }
    numbers.sort_unstable();

    if numbers.windows(2).any(|pair| pair[0] == pair[1]) {
        return None;
    }

    Some(DrawRecord {
        contest_number,
        date,
        numbers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Concurso;Data;B1;B2;B3;B4;B5;B6";

    #[test]
    fn test_header_is_skipped() {
        let text = format!("{HEADER}\n1;11/03/1996;41;5;4;52;30;33\n");
        let draws = parse_archive(&text, ';');

        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].contest_number, 1);
        assert_eq!(draws[0].date, "11/03/1996");
        assert_eq!(draws[0].numbers, [4, 5, 30, 33, 41, 52]);
    }

    #[test]
    fn test_keeps_file_order() {
        let text = format!(
            "{HEADER}\n3;01/04/1996;1;2;3;4;5;6\n1;11/03/1996;7;8;9;10;11;12\n2;18/03/1996;13;14;15;16;17;18"
        );
        let contests: Vec<u32> = parse_archive(&text, ';')
            .iter()
            .map(|d| d.contest_number)
            .collect();

        assert_eq!(contests, vec![3, 1, 2]);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let text = format!("{HEADER}\n1;11/03/1996;1;2;3;4;5\n\n2;18/03/1996;9;39;37;49;43;41\n");
        let draws = parse_archive(&text, ';');

        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].contest_number, 2);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let text = format!("{HEADER}\n5;15/04/1996;1;2;3;4;5;6;0;R$ 0,00;SP\n");
        let draws = parse_archive(&text, ';');

        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].numbers, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_non_numeric_rows_are_skipped() {
        let text = format!(
            "{HEADER}\nabc;11/03/1996;1;2;3;4;5;6\n2;18/03/1996;1;x;3;4;5;6\n3;25/03/1996;1;2;3;4;5;6"
        );
        let draws = parse_archive(&text, ';');

        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].contest_number, 3);
    }

    #[test]
    fn test_invalid_numbers_are_skipped() {
        let text = format!(
            "{HEADER}\n1;11/03/1996;0;2;3;4;5;6\n2;18/03/1996;1;2;3;4;5;61\n3;25/03/1996;1;1;3;4;5;6"
        );
        assert!(parse_archive(&text, ';').is_empty());
    }

    #[test]
    fn test_crlf_and_padding() {
        let text = format!("{HEADER}\r\n7; 29/04/1996 ; 10 ;20;30;40;50;60\r\n");
        let draws = parse_archive(&text, ';');

        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].date, "29/04/1996");
        assert_eq!(draws[0].numbers, [10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_custom_separator() {
        let text = "contest,date,a,b,c,d,e,f\n9,2024-01-06,60,1,2,3,4,5\n";
        let draws = parse_archive(text, ',');

        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].numbers, [1, 2, 3, 4, 5, 60]);
    }

    #[test]
    fn test_header_only_and_empty_text() {
        assert!(parse_archive(HEADER, ';').is_empty());
        assert!(parse_archive("", ';').is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_archive(Path::new("/nonexistent/mega-sena.csv"), ';').unwrap_err();
        assert!(matches!(err, CheckerError::ArchiveIo { .. }));
        assert!(!err.is_user_input());
    }
}
