//! Diagnostic error types for Matrix Market parsing
//!
//! Every parse failure carries a 1-based `(line, column)` position pointing
//! at the first character of the offending token. Lines count physical lines
//! from the start of the file, comments included.

use std::fmt;

use crate::format::{keywords, Symmetry};

/// Matrix axis named by an out-of-bounds diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

/// Failure conditions reported while parsing a Matrix Market stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// First token is not the literal `%%MatrixMarket` banner
    MissingMagicBanner,
    /// Second banner token is not `matrix`; empty `found` means it was absent
    InvalidObjectKind { found: String },
    /// Third banner token is not a known storage format
    InvalidFormatKeyword { found: Option<String> },
    /// Fourth banner token is not a known element type
    InvalidTypeKeyword { found: Option<String> },
    /// Fifth banner token is not a known symmetry
    InvalidSymmetryKeyword { found: Option<String> },
    /// Extra tokens after the five the banner line allows
    TrailingHeaderTokens,
    /// Stream ended before a dimensions line was found
    MissingDimensionsLine,
    /// Dimensions line is not exactly three unsigned integers
    InvalidDimensionsLine,
    /// Non-general symmetry declared for a rectangular matrix
    NonSquareSymmetry { symmetry: Symmetry, rows: u64, cols: u64 },
    /// Data line does not start with a row index
    ExpectedRowIndex,
    /// Data line has no column index after the row index
    ExpectedColIndex,
    /// 1-based index outside the declared matrix dimensions
    IndexOutOfBounds { axis: Axis, index: u64, limit: u64 },
    /// Integer token does not fit into 64 bits
    IntegerOverflow,
    /// Physical line exceeds the fixed line-length ceiling
    LineTooLong,
    /// The underlying line source failed to produce bytes
    Read { message: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingMagicBanner => {
                write!(f, "missing %%MatrixMarket declaration")
            }
            ParseErrorKind::InvalidObjectKind { found } if found.is_empty() => {
                write!(f, "missing object keyword, expected 'matrix'")
            }
            ParseErrorKind::InvalidObjectKind { found } => {
                write!(f, "invalid object keyword '{found}', expected 'matrix'")
            }
            ParseErrorKind::InvalidFormatKeyword { found } => {
                keyword_message(f, "format", found, keywords::FORMATS)
            }
            ParseErrorKind::InvalidTypeKeyword { found } => {
                keyword_message(f, "type", found, keywords::ELEMENT_TYPES)
            }
            ParseErrorKind::InvalidSymmetryKeyword { found } => {
                keyword_message(f, "symmetry", found, keywords::SYMMETRIES)
            }
            ParseErrorKind::TrailingHeaderTokens => {
                write!(f, "unexpected characters on the header line")
            }
            ParseErrorKind::MissingDimensionsLine => write!(f, "missing matrix dimensions"),
            ParseErrorKind::InvalidDimensionsLine => write!(f, "invalid matrix dimensions"),
            ParseErrorKind::NonSquareSymmetry { symmetry, rows, cols } => {
                write!(
                    f,
                    "'{symmetry}' matrices must be square, matrix declares {rows}x{cols}"
                )
            }
            ParseErrorKind::ExpectedRowIndex => {
                write!(f, "unexpected character, expected row index")
            }
            ParseErrorKind::ExpectedColIndex => {
                write!(f, "unexpected character, expected column index")
            }
            ParseErrorKind::IndexOutOfBounds { axis, index, limit } => {
                write!(f, "{axis} index {index} out of bounds, matrix declares {limit}")
            }
            ParseErrorKind::IntegerOverflow => {
                write!(f, "value is too large and would cause overflow")
            }
            ParseErrorKind::LineTooLong => {
                write!(
                    f,
                    "line is too long (over {} characters)",
                    crate::source::MAX_LINE_LEN
                )
            }
            ParseErrorKind::Read { message } => write!(f, "read error: {message}"),
        }
    }
}

/// Shared wording for the three table-driven keyword slots
fn keyword_message<T>(
    f: &mut fmt::Formatter<'_>,
    slot: &str,
    found: &Option<String>,
    table: &[(&str, T)],
) -> fmt::Result {
    let expected = keywords::expected_list(table);
    match found {
        Some(word) => write!(f, "unexpected {slot} keyword '{word}', expected one of: {expected}"),
        None => write!(f, "missing {slot} keyword, expected one of: {expected}"),
    }
}

/// A parse failure and its position in the input stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based physical line, counting the banner and comment lines
    pub line: u64,
    /// 1-based column within the physical line
    pub column: usize,
}

impl ParseError {
    /// Create a parse error anchored at `(line, column)`
    pub fn new(kind: ParseErrorKind, line: u64, column: usize) -> Self {
        Self { kind, line, column }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: {}", self.line, self.column, self.kind)
    }
}

impl std::error::Error for ParseError {}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_in_message() {
        let err = ParseError::new(ParseErrorKind::ExpectedRowIndex, 7, 3);
        assert_eq!(
            err.to_string(),
            "line 7, column 3: unexpected character, expected row index"
        );
    }

    #[test]
    fn test_keyword_message_lists_options() {
        let err = ParseErrorKind::InvalidFormatKeyword {
            found: Some("dense".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "unexpected format keyword 'dense', expected one of: 'coordinate', 'array'"
        );
    }

    #[test]
    fn test_missing_keyword_message() {
        let err = ParseErrorKind::InvalidSymmetryKeyword { found: None };
        assert_eq!(
            err.to_string(),
            "missing symmetry keyword, expected one of: \
             'general', 'symmetric', 'skew-symmetric', 'hermitian'"
        );
    }

    #[test]
    fn test_non_square_symmetry_message() {
        let err = ParseErrorKind::NonSquareSymmetry {
            symmetry: Symmetry::Symmetric,
            rows: 2,
            cols: 5,
        };
        assert_eq!(
            err.to_string(),
            "'symmetric' matrices must be square, matrix declares 2x5"
        );
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = ParseErrorKind::IndexOutOfBounds {
            axis: Axis::Row,
            index: 11,
            limit: 10,
        };
        assert_eq!(err.to_string(), "row index 11 out of bounds, matrix declares 10");
    }
}
