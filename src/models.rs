use serde::Serialize;

/// Output of the naive CSV parse: the trimmed header fields and every
/// non-blank data line, split on commas.
///
/// Rows are deliberately NOT validated against the header count. A line with
/// more or fewer fields than the header passes through unchanged; the parser
/// makes no padding or truncation decisions on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A bounded preview of a [`ParsedTable`], ready to project straight into a
/// display surface. Cell text is carried as-is, with no reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescription {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
