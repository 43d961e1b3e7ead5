//! Grid representation for word-search puzzles.
//!
//! The grid is a flat row-major buffer of [`Cell`]s. Cells start out empty,
//! masks mark some of them blocked, and the placement engine writes letters
//! into the rest.

use rand::seq::SliceRandom;
use rand::Rng;

/// Maximum number of rows and columns, keeping the candidate search tractable.
pub const MAX_DIM: usize = 32;

/// Letters used for random filler.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Unused; shown as a blank in finished output.
    Empty,
    /// Masked out; no letter may be placed here.
    Blocked,
    Letter(char),
}

impl Cell {
    /// The character used for this cell in text output.
    ///
    /// Blocked cells show as `'*'`; they never survive into a finished grid.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Blocked => '*',
            Cell::Letter(letter) => letter,
        }
    }
}

/// A `rows x cols` grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Converts (row, col) to a linear cell index.
    ///
    /// Index order is row-major: `idx = row * cols + col`.
    #[inline(always)]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Returns the cell at (row, col), or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.idx(row, col)])
        } else {
            None
        }
    }

    /// Overwrites the cell at (row, col).
    ///
    /// # Panics
    /// Panics if (row, col) lies outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        let idx = self.idx(row, col);
        self.cells[idx] = cell;
    }

    /// Iterates over `((row, col), cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| ((idx / cols, idx % cols), cell))
    }

    /// Fills every empty cell with a uniformly random letter.
    ///
    /// Blocked cells are left alone, so masked regions stay free of filler.
    pub fn fill_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            if *cell == Cell::Empty {
                if let Some(&letter) = ALPHABET.choose(rng) {
                    *cell = Cell::Letter(char::from(letter));
                }
            }
        }
    }

    /// Turns blocked cells back into blanks for output.
    pub fn remove_mask(&mut self) {
        for cell in &mut self.cells {
            if *cell == Cell::Blocked {
                *cell = Cell::Empty;
            }
        }
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Returns the rows as character vectors, one entry per cell.
    pub fn to_chars(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| row.iter().map(|cell| cell.to_char()).collect())
            .collect()
    }

    /// Formats the grid with cells separated by spaces and rows by newlines.
    pub fn to_text(&self) -> String {
        self.to_chars()
            .iter()
            .map(|row| {
                let mut line = String::with_capacity(row.len() * 2);
                for (i, c) in row.iter().enumerate() {
                    if i > 0 {
                        line.push(' ');
                    }
                    line.push(*c);
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 7);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.count(Cell::Empty), 28);
        assert_eq!(grid.get(3, 6), Some(Cell::Empty));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 7), None);
    }

    #[test]
    fn test_cells_iterate_row_major() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, Cell::Letter('Z'));
        let coords: Vec<_> = grid.cells().map(|(pos, _)| pos).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(grid.cells().last(), Some(((1, 2), Cell::Letter('Z'))));
    }

    #[test]
    fn test_fill_randomly_skips_blocked_and_letters() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, Cell::Blocked);
        grid.set(1, 1, Cell::Letter('Q'));

        let mut rng = StdRng::seed_from_u64(7);
        grid.fill_randomly(&mut rng);

        assert_eq!(grid.get(0, 0), Some(Cell::Blocked));
        assert_eq!(grid.get(1, 1), Some(Cell::Letter('Q')));
        assert_eq!(grid.count(Cell::Empty), 0);
        for (_, cell) in grid.cells() {
            if let Cell::Letter(letter) = cell {
                assert!(letter.is_ascii_uppercase(), "filler {letter:?} is not A-Z");
            }
        }
    }

    #[test]
    fn test_remove_mask_blanks_blocked_cells() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 1, Cell::Blocked);
        grid.set(1, 0, Cell::Letter('A'));
        grid.remove_mask();
        assert_eq!(grid.count(Cell::Blocked), 0);
        assert_eq!(grid.get(0, 1), Some(Cell::Empty));
        assert_eq!(grid.get(1, 0), Some(Cell::Letter('A')));
    }

    #[test]
    fn test_to_text_joins_cells() {
        let mut grid = Grid::new(2, 3);
        grid.set(0, 0, Cell::Letter('C'));
        grid.set(0, 1, Cell::Letter('A'));
        grid.set(0, 2, Cell::Letter('T'));
        grid.set(1, 1, Cell::Blocked);
        assert_eq!(grid.to_text(), "C A T\n  *  ");
    }

    #[test]
    #[should_panic(expected = "outside 2x2 grid")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(2, 2);
        grid.set(2, 0, Cell::Empty);
    }
}
