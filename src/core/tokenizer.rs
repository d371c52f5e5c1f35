/// Splits one CSV line into trimmed cells, honoring double-quote escaping.
///
/// A `"` toggles quoted state, except `""` inside quotes which emits a
/// literal quote. Commas split only outside quotes. An unterminated quote
/// is not an error; whatever accumulated is flushed as the final cell.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote: consume both, emit one, keep state.
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    cells.push(current.trim().to_string());
    cells
}
