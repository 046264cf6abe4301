//! Adaptive occupancy grid
//!
//! Bins matrix entries into square blocks so that a matrix of any size fits
//! a fixed viewport. Small matrices map one block per cell; large ones are
//! aggregated by the smallest square block size that respects the per-axis
//! budget.

use crate::format::Header;

/// Occupancy table over square blocks of the matrix index space
///
/// Constructed from a parsed [`Header`] and a viewport budget, then driven
/// by [`crate::parse_entries`] with one call per data line. Mutated in place
/// by exactly one caller; rendering reads the final state through the
/// accessors.
#[derive(Debug, Clone)]
pub struct Grid {
    block_size: u64,
    grid_rows: usize,
    grid_cols: usize,
    counts: Vec<u64>,
    entries: u64,
    max_occupancy: u64,
    mirror: bool,
}

/// Blocks needed along one axis for `dim` cells at `max` blocks
fn bin_size(dim: u64, max: u64) -> u64 {
    if dim <= max {
        1
    } else {
        dim.div_ceil(max)
    }
}

impl Grid {
    /// Allocate a grid sized for `header` within the given viewport budget
    ///
    /// `block_size` is the smallest value keeping both grid axes within
    /// their budgets; it is shared by the two axes so blocks stay square.
    /// A zero budget is treated as 1.
    pub fn new(header: &Header, max_grid_rows: u64, max_grid_cols: u64) -> Self {
        let row_bin = bin_size(header.rows, max_grid_rows.max(1));
        let col_bin = bin_size(header.cols, max_grid_cols.max(1));
        let block_size = row_bin.max(col_bin);

        let grid_rows = header.rows.div_ceil(block_size) as usize;
        let grid_cols = header.cols.div_ceil(block_size) as usize;

        Self {
            block_size,
            grid_rows,
            grid_cols,
            counts: vec![0; grid_rows * grid_cols],
            entries: 0,
            max_occupancy: 0,
            mirror: header.is_symmetric(),
        }
    }

    /// Record one 0-based matrix entry
    ///
    /// Under a non-general symmetry an off-diagonal entry also counts toward
    /// the transposed block; the diagonal test happens at full resolution,
    /// before bucketing, so entries inside one block still mirror correctly.
    pub fn record_entry(&mut self, row0: u64, col0: u64) {
        let block_row = (row0 / self.block_size) as usize;
        let block_col = (col0 / self.block_size) as usize;
        self.bump(block_row, block_col);
        if self.mirror && row0 != col0 {
            self.bump(block_col, block_row);
        }
    }

    fn bump(&mut self, block_row: usize, block_col: usize) {
        let cell = &mut self.counts[block_row * self.grid_cols + block_col];
        *cell += 1;
        if *cell > self.max_occupancy {
            self.max_occupancy = *cell;
        }
        self.entries += 1;
    }

    /// Grid height in blocks
    pub fn rows(&self) -> usize {
        self.grid_rows
    }

    /// Grid width in blocks
    pub fn cols(&self) -> usize {
        self.grid_cols
    }

    /// Matrix cells per block along one axis
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Most entries one block could hold, `block_size` squared
    ///
    /// Saturates instead of overflowing for degenerate huge block sizes.
    pub fn block_capacity(&self) -> u64 {
        self.block_size.saturating_mul(self.block_size)
    }

    /// Occupancy counter for one block
    pub fn count_at(&self, block_row: usize, block_col: usize) -> u64 {
        self.counts[block_row * self.grid_cols + block_col]
    }

    /// Largest counter across all blocks so far
    pub fn max_occupancy(&self) -> u64 {
        self.max_occupancy
    }

    /// Total entries recorded, symmetry expansion included
    pub fn entries(&self) -> u64 {
        self.entries
    }
}
