use thiserror::Error;

use crate::models::ParsedTable;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no usable CSV data in input")]
    NoData,
}

/// Naive CSV parse: first line is the header, every later non-blank line is a
/// data row. Lines split on `'\n'`, fields on `','`, everything trimmed.
///
/// This is intentionally simple. A comma is always a separator, even inside
/// quotes, and CR characters only disappear because each line is trimmed.
/// Empty or whitespace-only input yields [`ParseError::NoData`] rather than
/// a panic.
pub fn parse_csv(text: &str) -> Result<ParsedTable, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::NoData);
    }

    let mut lines = trimmed.split('\n');
    let header_line = lines.next().ok_or(ParseError::NoData)?;
    let headers = split_fields(header_line.trim());

    let mut rows = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            // Blank lines are tolerated anywhere and never become rows
            continue;
        }
        rows.push(split_fields(line));
    }

    Ok(ParsedTable { headers, rows })
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|field| field.trim().to_string()).collect()
}
