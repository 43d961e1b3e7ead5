//! Shape masks that block grid cells before words are placed.
//!
//! A mask depends only on the grid dimensions, never on its contents, so
//! applying one is idempotent.

use std::fmt;
use std::str::FromStr;

use crate::grid::{Cell, Grid};

/// The shape of the usable region of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mask {
    /// Every cell is usable.
    #[default]
    None,
    /// An inscribed circle of usable cells.
    Circle,
    /// Two overlapping squares, like a Venn diagram.
    Squares,
}

impl Mask {
    pub const ALL: [Mask; 3] = [Mask::None, Mask::Circle, Mask::Squares];

    /// Returns whether this mask blocks cell (row, col) of a `rows x cols` grid.
    pub fn blocks(self, rows: usize, cols: usize, row: usize, col: usize) -> bool {
        match self {
            Mask::None => false,
            Mask::Circle => circle_blocks(rows, cols, row, col),
            Mask::Squares => squares_blocks(rows, cols, row, col),
        }
    }

    /// Marks every cell this mask blocks as [`Cell::Blocked`].
    pub fn apply(self, grid: &mut Grid) {
        if self == Mask::None {
            return;
        }
        let (rows, cols) = (grid.rows(), grid.cols());
        for row in 0..rows {
            for col in 0..cols {
                if self.blocks(rows, cols, row, col) {
                    grid.set(row, col, Cell::Blocked);
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mask::None => "none",
            Mask::Circle => "circle",
            Mask::Squares => "squares",
        }
    }
}

/// Blocks cells further from the centre than half the shorter side.
fn circle_blocks(rows: usize, cols: usize, row: usize, col: usize) -> bool {
    let r2 = (rows.min(cols) * rows.min(cols) / 4) as i64;
    let cy = (rows / 2) as i64;
    let cx = (cols / 2) as i64;
    let dy = row as i64 - cy;
    let dx = col as i64 - cx;
    dy * dy + dx * dx > r2
}

/// Blocks the frame around two overlapping squares.
///
/// A cell is blocked when it lies in the middle column band but outside the
/// central rows, or in the middle row band but outside the central columns.
/// For non-square grids the two tests are not symmetric.
fn squares_blocks(rows: usize, cols: usize, row: usize, col: usize) -> bool {
    let a = (0.38 * rows.min(cols) as f64) as i64;
    let (rows, cols) = (rows as i64, cols as i64);
    let (row, col) = (row as i64, col as i64);
    let cy = rows / 2;
    let cx = cols / 2;

    let column_band = a <= col && col < cols - a && (row < cy - a || row > cy + a);
    let row_band = a <= row && row < rows - a && (col < cx - a || col > cx + a);
    column_band || row_band
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mask::ALL
            .into_iter()
            .find(|mask| mask.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown mask {s:?} (expected none, circle or squares)"))
    }
}
