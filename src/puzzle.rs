//! Puzzle sessions: configuration, retries and the finished grids.
//!
//! A [`Puzzle`] validates its configuration up front, then [`Puzzle::make`]
//! runs whole-grid attempts until every word fits or the attempt budget runs
//! out. A successful attempt leaves two grids behind: the puzzle itself, with
//! random filler, and its solution, holding only the placed words.

use std::cmp::Reverse;
use std::fmt;
use std::path::PathBuf;

use rand::Rng;

use crate::errors::ConfigError;
use crate::grid::{Grid, MAX_DIM};
use crate::mask::Mask;
use crate::placement::{letters_of, place_words, Placement};
use crate::wordlist;

/// Number of attempts [`Puzzle::make`] callers use when they have no preference.
pub const DEFAULT_ATTEMPTS: usize = 10;

/// Output file stem used when none is given.
pub const DEFAULT_OUTPUT_STEM: &str = "wordsearch";

/// Parameters a puzzle is built from.
///
/// Exactly one of `words` and `wordlist_path` must be set.
#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    pub rows: usize,
    pub cols: usize,
    pub words: Option<Vec<String>>,
    pub wordlist_path: Option<PathBuf>,
    pub mask: Mask,
    pub allow_backwards: bool,
    /// Stem of the files written by [`crate::persistence::save`].
    pub output_stem: String,
}

impl PuzzleConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            words: None,
            wordlist_path: None,
            mask: Mask::None,
            allow_backwards: false,
            output_stem: DEFAULT_OUTPUT_STEM.to_string(),
        }
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_wordlist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.wordlist_path = Some(path.into());
        self
    }

    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = mask;
        self
    }

    pub fn with_backwards(mut self, allow_backwards: bool) -> Self {
        self.allow_backwards = allow_backwards;
        self
    }

    pub fn with_output_stem(mut self, stem: impl Into<String>) -> Self {
        self.output_stem = stem.into();
        self
    }
}

/// Result of [`Puzzle::make`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MakeOutcome {
    /// Every word was placed; `attempts` is how many tries it took.
    Fitted { attempts: usize },
    /// No attempt placed every word; `attempts` is the budget that was used up.
    Exhausted { attempts: usize },
}

impl MakeOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, MakeOutcome::Fitted { .. })
    }

    pub fn attempts(self) -> usize {
        match self {
            MakeOutcome::Fitted { attempts } | MakeOutcome::Exhausted { attempts } => attempts,
        }
    }
}

impl fmt::Display for MakeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MakeOutcome::Fitted { attempts } => {
                write!(f, "Fitted the words in {attempts} attempt(s)")
            }
            MakeOutcome::Exhausted { attempts } => {
                write!(f, "Failed to place all the words after {attempts} attempts")
            }
        }
    }
}

/// The grids left by a successful attempt.
#[derive(Debug, Clone)]
struct Finished {
    grid: Grid,
    solution: Grid,
    placements: Vec<Placement>,
}

/// A word-search puzzle and, once made, its grid and solution.
#[derive(Debug, Clone)]
pub struct Puzzle {
    rows: usize,
    cols: usize,
    mask: Mask,
    /// Upper-cased words, longest first.
    words: Vec<String>,
    allow_backwards: bool,
    output_stem: String,
    finished: Option<Finished>,
}

impl Puzzle {
    /// Validates `config` and loads its word list.
    ///
    /// No grid is built until [`Puzzle::make`] is called.
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        let PuzzleConfig {
            rows,
            cols,
            words,
            wordlist_path,
            mask,
            allow_backwards,
            output_stem,
        } = config;

        if words.is_some() && wordlist_path.is_some() {
            return Err(ConfigError::BothWordSources);
        }
        if rows > MAX_DIM || cols > MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                rows,
                cols,
                max: MAX_DIM,
            });
        }
        if rows == 0 || cols == 0 {
            return Err(ConfigError::ZeroDimension);
        }

        let mut words: Vec<String> = if let Some(words) = words {
            words.iter().map(|w| w.trim().to_uppercase()).collect()
        } else if let Some(path) = wordlist_path {
            wordlist::load(&path)?
        } else {
            return Err(ConfigError::NoWordSource);
        };

        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        let max_len = rows.max(cols);
        for word in &words {
            // placed cells and the filler alphabet are both A-Z
            if !word.chars().all(|c| c == ' ' || c.is_ascii_uppercase()) {
                return Err(ConfigError::InvalidLetter { word: word.clone() });
            }
            // no word can be longer than the longer side of the grid
            let len = letters_of(word).len();
            if len == 0 {
                return Err(ConfigError::EmptyWord);
            }
            if len > max_len {
                return Err(ConfigError::WordTooLong {
                    word: word.clone(),
                    max: max_len,
                });
            }
        }

        // longest first; stable, so equal lengths keep their listed order
        words.sort_by_key(|word| Reverse(letters_of(word).len()));

        Ok(Self {
            rows,
            cols,
            mask,
            words,
            allow_backwards,
            output_stem,
            finished: None,
        })
    }

    /// Makes the puzzle using the thread-local random number generator.
    pub fn make(&mut self, attempts: usize) -> MakeOutcome {
        self.make_with_rng(attempts, &mut rand::thread_rng())
    }

    /// Makes the puzzle, trying up to `attempts` fresh grids.
    ///
    /// Any grid from an earlier call is discarded first, so after an
    /// [`MakeOutcome::Exhausted`] result no grid is available.
    pub fn make_with_rng<R: Rng + ?Sized>(&mut self, attempts: usize, rng: &mut R) -> MakeOutcome {
        self.finished = None;

        for attempt in 1..=attempts {
            match self.attempt(rng) {
                Some(finished) => {
                    self.finished = Some(finished);
                    let outcome = MakeOutcome::Fitted { attempts: attempt };
                    log::info!("{outcome}");
                    return outcome;
                }
                None => log::debug!("attempt {attempt} of {attempts} failed"),
            }
        }

        let outcome = MakeOutcome::Exhausted { attempts };
        log::warn!("{outcome}");
        outcome
    }

    /// Builds one grid from scratch, returning `None` if any word does not fit.
    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Finished> {
        let mut grid = Grid::new(self.rows, self.cols);
        self.mask.apply(&mut grid);

        let placements = place_words(&mut grid, &self.words, self.allow_backwards, rng)?;

        // the solution is taken before the filler goes in
        let mut solution = grid.clone();
        grid.fill_randomly(rng);
        grid.remove_mask();
        solution.remove_mask();

        Some(Finished {
            grid,
            solution,
            placements,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    pub fn allow_backwards(&self) -> bool {
        self.allow_backwards
    }

    pub fn output_stem(&self) -> &str {
        &self.output_stem
    }

    /// The words in placement order (longest first).
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_success(&self) -> bool {
        self.finished.is_some()
    }

    /// The finished puzzle grid, with random filler.
    pub fn grid(&self) -> Option<&Grid> {
        self.finished.as_ref().map(|f| &f.grid)
    }

    /// The solution grid: placed words only, blanks elsewhere.
    pub fn solution(&self) -> Option<&Grid> {
        self.finished.as_ref().map(|f| &f.solution)
    }

    /// Where each word went, in placement order.
    pub fn placements(&self) -> Option<&[Placement]> {
        self.finished.as_ref().map(|f| f.placements.as_slice())
    }

    pub fn grid_text(&self) -> Option<String> {
        self.grid().map(Grid::to_text)
    }

    pub fn wordlist_text(&self) -> String {
        self.words.join("\n")
    }

    /// The grid followed by the list of words to find.
    pub fn wordsearch_text(&self) -> Option<String> {
        self.grid_text()
            .map(|grid| format!("{grid}\n{}", self.wordlist_text()))
    }
}
