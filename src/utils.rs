use chrono::NaiveDate;

/// `[4, 6, 11]`
pub fn format_numbers(numbers: &[u8]) -> String {
    let joined = numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

/// Normalises an archive date (`dd/mm/yyyy` or `yyyy-mm-dd`) to ISO-8601.
pub fn normalize_draw_date(date: &str) -> Option<String> {
    ["%d/%m/%Y", "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date.trim(), fmt).ok())
        .map(|d| d.format("%Y-%m-%d").to_string())
}
