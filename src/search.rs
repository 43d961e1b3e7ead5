//! Finding words in a finished grid.
//!
//! Used to check that a puzzle really contains its word list and to build an
//! answer index. Words are searched in all eight directions.

use rustc_hash::FxHashMap;

use crate::grid::{Cell, Grid};
use crate::placement::{letters_of, Orientation};

/// All eight reading directions: the four writing orientations and their reverses.
pub const DIRECTIONS: [Orientation; 8] = [
    Orientation::RIGHT,
    Orientation::DOWN,
    Orientation::DOWN_RIGHT,
    Orientation::UP_RIGHT,
    Orientation::RIGHT.reversed(),
    Orientation::DOWN.reversed(),
    Orientation::DOWN_RIGHT.reversed(),
    Orientation::UP_RIGHT.reversed(),
];

/// Where a word reads in the grid, starting from its first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub row: usize,
    pub col: usize,
    pub direction: Orientation,
}

/// Index from letter to the cells holding it, built once per grid.
pub struct LetterIndex<'a> {
    grid: &'a Grid,
    cells_by_letter: FxHashMap<char, Vec<(usize, usize)>>,
}

impl<'a> LetterIndex<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        let mut cells_by_letter: FxHashMap<char, Vec<(usize, usize)>> = FxHashMap::default();
        for (pos, cell) in grid.cells() {
            if let Cell::Letter(letter) = cell {
                cells_by_letter.entry(letter).or_default().push(pos);
            }
        }
        Self {
            grid,
            cells_by_letter,
        }
    }

    /// Finds the first location (row-major start, then direction order) where
    /// `word` reads. Spaces in `word` are ignored.
    pub fn find(&self, word: &str) -> Option<Location> {
        let letters = letters_of(word);
        let first = *letters.first()?;
        let starts = self.cells_by_letter.get(&first)?;

        starts.iter().find_map(|&(row, col)| {
            DIRECTIONS
                .into_iter()
                .find(|&direction| reads_at(self.grid, &letters, row, col, direction))
                .map(|direction| Location {
                    row,
                    col,
                    direction,
                })
        })
    }
}

fn reads_at(grid: &Grid, letters: &[char], row: usize, col: usize, direction: Orientation) -> bool {
    letters.iter().enumerate().all(|(step, &letter)| {
        let step = step as isize;
        let r = row as isize + step * direction.dy;
        let c = col as isize + step * direction.dx;
        r >= 0 && c >= 0 && grid.get(r as usize, c as usize) == Some(Cell::Letter(letter))
    })
}

/// Finds a single word in `grid`.
pub fn find_word(grid: &Grid, word: &str) -> Option<Location> {
    LetterIndex::new(grid).find(word)
}

/// Finds every word, returning the words that could not be found.
pub fn missing_words<'w>(grid: &Grid, words: &'w [String]) -> Vec<&'w str> {
    let index = LetterIndex::new(grid);
    words
        .iter()
        .filter(|word| index.find(word).is_none())
        .map(String::as_str)
        .collect()
}
