//! Word Search Generator Library
//!
//! Places a list of words into a rectangular grid along straight lines
//! (across, down and both diagonals, optionally backwards), fills the rest
//! with random letters, and renders the puzzle and its solution as text or
//! SVG.
//!
//! ```no_run
//! use wordsearch::{Mask, Puzzle, PuzzleConfig};
//!
//! let config = PuzzleConfig::new(13, 13)
//!     .with_words(["MERCURY", "VENUS", "EARTH", "MARS"])
//!     .with_mask(Mask::Circle);
//! let mut puzzle = Puzzle::new(config)?;
//! let outcome = puzzle.make(10);
//! if let Some(text) = puzzle.wordsearch_text() {
//!     println!("{text}");
//! }
//! println!("{outcome}");
//! # Ok::<(), wordsearch::ConfigError>(())
//! ```

pub mod errors;
pub mod grid;
pub mod log;
pub mod mask;
pub mod persistence;
pub mod placement;
pub mod puzzle;
pub mod search;
pub mod svg;
pub mod wordlist;

pub use errors::{ConfigError, ExportError};
pub use grid::{Cell, Grid, MAX_DIM};
pub use mask::Mask;
pub use placement::{Orientation, Placement};
pub use puzzle::{MakeOutcome, Puzzle, PuzzleConfig, DEFAULT_ATTEMPTS};
pub use svg::SvgLayout;
