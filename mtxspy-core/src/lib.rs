//! mtxspy Core - Matrix Market Streaming Parser and Occupancy Grid
//!
//! This crate provides the format definitions, streaming parsers, and the
//! adaptive occupancy grid. It performs no file I/O of its own; callers feed
//! it lines through the [`LineSource`] trait, so the same parser code path
//! serves in-memory buffers, buffered readers, and memory maps.
//!
//! A full run is three calls:
//!
//! ```
//! use mtxspy_core::{parse_entries, parse_header, Grid, SliceSource};
//!
//! let data = b"%%MatrixMarket matrix coordinate real general\n2 2 1\n2 1 0.5\n";
//! let mut source = SliceSource::new(data);
//! let header = parse_header(&mut source)?;
//! let mut grid = Grid::new(&header, 100, 100);
//! parse_entries(&mut source, &header, &mut grid)?;
//! assert_eq!(grid.count_at(1, 0), 1);
//! # Ok::<(), mtxspy_core::ParseError>(())
//! ```

pub mod error;
pub mod format;
pub mod grid;
pub mod parse;
pub mod source;

pub use error::{Axis, ParseError, ParseErrorKind, ParseResult};
pub use format::{ElementType, Header, MatrixFormat, Symmetry};
pub use grid::Grid;
pub use parse::{parse_entries, parse_header};
pub use source::{LineSource, SliceSource, SourceError, MAX_LINE_LEN};
