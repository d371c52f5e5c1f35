use crate::core::tokenizer::tokenize;
use crate::domain::model::Row;
use crate::domain::schema::FieldKey;

/// Builds category threshold rows from a CSV blob.
///
/// Lines are trimmed and blanks dropped. The first line whose first cell
/// does not start with `#` is the header; its cells resolve through the
/// alias table and unknown columns are ignored. Data lines starting with
/// `#` are comments; rows with an empty name are discarded. Missing header
/// (or empty input) yields an empty set, never an error.
pub fn build_rows(csv_text: &str) -> Vec<Row> {
    let lines: Vec<&str> = csv_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut columns: Vec<(usize, FieldKey)> = Vec::new();
    let mut header_index = None;
    for (idx, line) in lines.iter().enumerate() {
        let cells = tokenize(line);
        if cells[0].starts_with('#') {
            continue;
        }
        for (col, cell) in cells.iter().enumerate() {
            if let Some(key) = FieldKey::from_header(cell) {
                columns.push((col, key));
            }
        }
        header_index = Some(idx);
        break;
    }
    let Some(header_index) = header_index else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for line in &lines[header_index + 1..] {
        let cells = tokenize(line);
        if cells[0].starts_with('#') {
            continue;
        }
        let mut row = Row::new();
        for &(col, key) in &columns {
            row.set(key, cells.get(col).cloned().unwrap_or_default());
        }
        if row.name().is_empty() {
            continue;
        }
        rows.push(row);
    }
    rows
}
