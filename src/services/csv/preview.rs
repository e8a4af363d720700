use crate::models::TableDescription;

/// First `min(limit, rows.len())` rows, in their original order, as a fresh
/// sequence. The source slice is never mutated.
pub fn select_preview_rows(rows: &[Vec<String>], limit: usize) -> Vec<Vec<String>> {
    rows.iter().take(limit).cloned().collect()
}

/// Project headers plus already-selected preview rows into a
/// [`TableDescription`]. Cell content is passed through untouched.
pub fn render(headers: &[String], preview_rows: &[Vec<String>]) -> TableDescription {
    TableDescription {
        headers: headers.to_vec(),
        rows: preview_rows.to_vec(),
    }
}
