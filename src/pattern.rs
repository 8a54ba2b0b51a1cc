//! Symmetric cell pattern.
//!
//! Turns a seed into the `rows × cols` grid of cells that receive a shape.
//! The left half (plus the middle column when `cols` is odd) is read from the
//! seed bits and mirrored onto the right half.

use crate::seed::Seed;

/// Row-major boolean grid with left-right mirror symmetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGrid {
    cells: Vec<bool>,
    rows: u32,
    cols: u32,
}

impl PatternGrid {
    fn empty(rows: u32, cols: u32) -> Self {
        Self {
            cells: vec![false; rows as usize * cols as usize],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Whether the cell at (`row`, `col`) is active. Out-of-range cells are not.
    pub fn get(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols && self.cells[self.index(row, col)]
    }

    fn set(&mut self, row: u32, col: u32, value: bool) {
        let i = self.index(row, col);
        self.cells[i] = value;
    }

    /// Active cells as `(col, row)` pairs, row-major.
    pub fn active_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| ((i % cols) as u32, (i / cols) as u32))
    }

    pub fn count_active(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// `grid[y][x] == grid[y][cols - 1 - x]` for every cell.
    pub fn is_mirror_symmetric(&self) -> bool {
        (0..self.rows).all(|y| {
            (0..self.cols / 2).all(|x| self.get(y, x) == self.get(y, self.cols - 1 - x))
        })
    }
}

/// Build the pattern grid for `seed`.
///
/// Bits are consumed from a single [`Seed::bits`] stream shared by every row,
/// so row `y` starts at bit `y * ceil(cols / 2)`. Past bit 63 every cell is
/// inactive.
pub fn generate_pattern(seed: Seed, rows: u32, cols: u32) -> PatternGrid {
    let mut grid = PatternGrid::empty(rows, cols);
    let half = cols / 2;
    let middle_col = half + cols % 2;

    let mut bits = seed.bits();
    for y in 0..rows {
        for x in 0..middle_col {
            let on = bits.next().unwrap_or(false);
            grid.set(y, x, on);
            if x < half {
                grid.set(y, cols - 1 - x, on);
            }
        }
    }
    grid
}

// ============================================================================
// Tests
// ============================================================================
