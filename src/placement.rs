//! Randomized word placement.
//!
//! Each word is tried in the four orientations in random order. For each
//! orientation every start cell in the bounding box is tested, and one of the
//! valid candidates is picked uniformly at random. A word may cross letters
//! already in the grid as long as they match.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Cell, Grid};

/// A step direction through the grid, as (column step, row step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    pub dx: isize,
    pub dy: isize,
}

impl Orientation {
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };
    pub const DOWN: Self = Self { dx: 0, dy: 1 };
    pub const DOWN_RIGHT: Self = Self { dx: 1, dy: 1 };
    pub const UP_RIGHT: Self = Self { dx: 1, dy: -1 };

    /// The orientations a word is written in. Reversed words cover the other four.
    pub const ALL: [Self; 4] = [Self::RIGHT, Self::DOWN, Self::DOWN_RIGHT, Self::UP_RIGHT];

    /// The opposite direction, used when reading a reversed word forwards.
    pub const fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// A word committed to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The word as listed, with spaces removed.
    pub word: String,
    /// Row of the first letter written.
    pub row: usize,
    /// Column of the first letter written.
    pub col: usize,
    pub orientation: Orientation,
    /// Whether the letters were written last-to-first.
    pub reversed: bool,
}

impl Placement {
    /// The letters in the order they were written along `orientation`.
    pub fn written(&self) -> String {
        if self.reversed {
            self.word.chars().rev().collect()
        } else {
            self.word.clone()
        }
    }

    /// Grid cells occupied by the word, in writing order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = (self.row as isize, self.col as isize);
        let Orientation { dx, dy } = self.orientation;
        (0..self.word.chars().count() as isize)
            .map(move |step| ((row + step * dy) as usize, (col + step * dx) as usize))
    }
}

/// Removes the spaces from a listed word, giving the letters to place.
pub fn letters_of(word: &str) -> Vec<char> {
    word.chars().filter(|&c| c != ' ').collect()
}

/// Computes the rows and columns a word of `len` letters may start in.
///
/// Returns `None` when the word cannot fit in this orientation at all.
fn start_bounds(
    rows: usize,
    cols: usize,
    len: usize,
    orientation: Orientation,
) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
    let n = len.max(1) as isize;
    let (rows, cols) = (rows as isize, cols as isize);

    let col_min = 0;
    let col_max = if orientation.dx != 0 { cols - n } else { cols - 1 };
    // rows shrink by the word length for horizontal words too
    let (row_min, row_max) = if orientation.dy >= 0 {
        (0, rows - n)
    } else {
        // the word grows upwards from its start
        (n - 1, rows - 1)
    };

    if col_max < col_min || row_max < row_min {
        return None;
    }
    Some((
        row_min as usize..=row_max as usize,
        col_min as usize..=col_max as usize,
    ))
}

/// Tests whether `letters` can be written from (row, col) along `orientation`.
///
/// Every visited cell must be empty or already hold the same letter.
fn fits(grid: &Grid, letters: &[char], row: usize, col: usize, orientation: Orientation) -> bool {
    let (mut row, mut col) = (row as isize, col as isize);
    for &letter in letters {
        if row < 0 || col < 0 {
            return false;
        }
        match grid.get(row as usize, col as usize) {
            Some(Cell::Empty) => {}
            Some(Cell::Letter(existing)) if existing == letter => {}
            _ => return false,
        }
        row += orientation.dy;
        col += orientation.dx;
    }
    true
}

/// Lists every start cell where `letters` fits in the given orientation.
///
/// Cells are returned in row-major order.
pub fn candidates(grid: &Grid, letters: &[char], orientation: Orientation) -> Vec<(usize, usize)> {
    let Some((row_range, col_range)) =
        start_bounds(grid.rows(), grid.cols(), letters.len(), orientation)
    else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for row in row_range {
        for col in col_range.clone() {
            if fits(grid, letters, row, col, orientation) {
                found.push((row, col));
            }
        }
    }
    found
}

fn write_letters(grid: &mut Grid, letters: &[char], row: usize, col: usize, orientation: Orientation) {
    let (mut row, mut col) = (row as isize, col as isize);
    for &letter in letters {
        grid.set(row as usize, col as usize, Cell::Letter(letter));
        row += orientation.dy;
        col += orientation.dx;
    }
}

/// Places a single word at a random valid location.
///
/// Orientations are tried in a shuffled order; with `allow_backwards`, each
/// orientation trial independently flips a coin to write the word reversed.
/// The first orientation with any candidate wins. Returns `None`, leaving the
/// grid untouched, when no orientation has room for the word.
pub fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    allow_backwards: bool,
    rng: &mut R,
) -> Option<Placement> {
    let forward = letters_of(word);

    let mut orientations = Orientation::ALL;
    orientations.shuffle(rng);

    for orientation in orientations {
        let reversed = allow_backwards && rng.gen_bool(0.5);
        let letters: Vec<char> = if reversed {
            forward.iter().rev().copied().collect()
        } else {
            forward.clone()
        };

        let found = candidates(grid, &letters, orientation);
        let Some(&(row, col)) = found.choose(rng) else {
            log::trace!("no room for {word} along {orientation:?} (reversed: {reversed})");
            continue;
        };

        write_letters(grid, &letters, row, col, orientation);
        log::trace!(
            "placed {word} at ({row}, {col}) along {orientation:?} (reversed: {reversed}, {} candidates)",
            found.len()
        );
        return Some(Placement {
            word: forward.iter().collect(),
            row,
            col,
            orientation,
            reversed,
        });
    }

    None
}

/// Places every word in order, stopping at the first that does not fit.
///
/// On failure the grid keeps the words placed so far; callers discard it.
pub fn place_words<R: Rng + ?Sized>(
    grid: &mut Grid,
    words: &[String],
    allow_backwards: bool,
    rng: &mut R,
) -> Option<Vec<Placement>> {
    let mut placements = Vec::with_capacity(words.len());
    for word in words {
        match place_word(grid, word, allow_backwards, rng) {
            Some(placement) => placements.push(placement),
            None => {
                log::debug!("could not place {word}");
                return None;
            }
        }
    }
    Some(placements)
}
