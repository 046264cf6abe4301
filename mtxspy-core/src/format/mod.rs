//! Matrix Market format definitions
//!
//! Pure data definitions for the textual Matrix Market exchange format.
//! No I/O operations - only the header model and the keyword tables the
//! parser matches against.

pub mod header;
pub mod keywords;

pub use header::{ElementType, Header, MatrixFormat, Symmetry};
