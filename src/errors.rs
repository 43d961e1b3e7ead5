//! Error types for puzzle construction and export.

use std::io;

/// A problem with the parameters a puzzle was constructed from.
///
/// All of these are detected by [`crate::puzzle::Puzzle::new`] before any
/// grid is built.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("provide either an inline word list or a word-list file, not both")]
    BothWordSources,

    #[error("provide one of an inline word list or a word-list file")]
    NoWordSource,

    #[error("grid is {rows}x{cols}; the maximum number of rows and columns is {max}")]
    DimensionTooLarge { rows: usize, cols: usize, max: usize },

    #[error("grid must have at least one row and one column")]
    ZeroDimension,

    #[error("word list is empty")]
    EmptyWordList,

    #[error("word list contains an empty word")]
    EmptyWord,

    #[error("word list contains a word with characters other than A-Z and spaces: {word}")]
    InvalidLetter { word: String },

    #[error("word list contains a word with too many letters: {word} (the maximum is {max})")]
    WordTooLong { word: String, max: usize },

    #[error("failed to read word list: {0}")]
    WordList(#[from] io::Error),
}

/// A problem writing a finished puzzle to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no successful grid was made to output")]
    NoGrid,

    #[error("failed to write puzzle: {0}")]
    Io(#[from] io::Error),
}
