use std::io::{self, BufRead};

/// Reads one amount per line. Surrounding whitespace is trimmed and blank
/// lines are skipped; anything else is passed through for validation.
pub fn read_amounts<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut amounts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            amounts.push(trimmed.to_string());
        }
    }
    Ok(amounts)
}
