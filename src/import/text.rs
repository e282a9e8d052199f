use super::normalize_cell;

/// Single-column delimited text: one address per line, `\n` or `\r\n` endings.
///
/// A leading byte-order mark (Excel's "CSV UTF-8") is not part of the first address.
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .strip_prefix('\u{FEFF}')
        .unwrap_or(content)
        .lines()
        .filter_map(normalize_cell)
        .collect()
}
