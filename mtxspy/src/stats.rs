//! Run summary

use mtxspy_core::{Grid, Header};

/// Summary of one aggregation run
///
/// Logged after a run, and serialized to JSON when the caller asks for a
/// stats file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridStats {
    /// Declared matrix dimensions
    pub matrix_rows: u64,
    pub matrix_cols: u64,
    /// Entry count declared in the header, before symmetry expansion
    pub declared_entries: u64,
    /// Matrix cells per block along one axis
    pub block_size: u64,
    /// Grid dimensions in blocks
    pub grid_rows: usize,
    pub grid_cols: usize,
    /// Entries aggregated, symmetry expansion included
    pub entries: u64,
    /// Densest block's counter
    pub max_occupancy: u64,
    pub block_capacity: u64,
}

impl GridStats {
    /// Snapshot a finished run
    pub fn collect(header: &Header, grid: &Grid) -> Self {
        Self {
            matrix_rows: header.rows,
            matrix_cols: header.cols,
            declared_entries: header.declared_entries,
            block_size: grid.block_size(),
            grid_rows: grid.rows(),
            grid_cols: grid.cols(),
            entries: grid.entries(),
            max_occupancy: grid.max_occupancy(),
            block_capacity: grid.block_capacity(),
        }
    }

    /// Log the summary at info level
    pub fn log(&self) {
        log::info!(
            "matrix {}x{}, {} declared entries",
            self.matrix_rows,
            self.matrix_cols,
            self.declared_entries
        );
        log::info!(
            "grid {}x{} blocks of {}x{} cells",
            self.grid_rows,
            self.grid_cols,
            self.block_size,
            self.block_size
        );
        log::info!(
            "aggregated {} entries, max occupancy {}/{}",
            self.entries,
            self.max_occupancy,
            self.block_capacity
        );
    }

    /// Write the summary as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn write_json<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
