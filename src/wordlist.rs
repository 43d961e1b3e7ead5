//! Reading word lists from line-oriented text.
//!
//! Each line holds one word (or phrase). Lines are trimmed and upper-cased;
//! blank lines and `#` comments are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Parses words from any buffered reader.
pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim().to_uppercase();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.push(word);
    }
    Ok(words)
}

/// Loads a word list from a file.
pub fn load(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let words = parse(BufReader::new(file))?;
    log::debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}
