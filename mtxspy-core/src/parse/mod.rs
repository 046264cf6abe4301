//! Streaming Matrix Market parsers
//!
//! [`parse_header`] consumes the banner and dimensions lines;
//! [`parse_entries`] then drives a [`crate::Grid`] with one event per data
//! line. Both operate in a single forward pass over a
//! [`crate::LineSource`] and report failures with exact 1-based line/column
//! positions.

pub mod entries;
pub mod header;
pub mod tokenizer;

pub use entries::parse_entries;
pub use header::parse_header;

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::source::{LineSource, SourceError};

/// Pull one line, converting source failures into positioned diagnostics
pub(crate) fn pull_line<S: LineSource + ?Sized>(
    source: &mut S,
    line_no: u64,
) -> ParseResult<Option<&[u8]>> {
    source.next_line().map_err(|err| match err {
        SourceError::LineTooLong => ParseError::new(ParseErrorKind::LineTooLong, line_no, 1),
        SourceError::Io(err) => ParseError::new(
            ParseErrorKind::Read {
                message: err.to_string(),
            },
            line_no,
            1,
        ),
    })
}

/// Read ASCII digits from `bytes` starting at `pos`
///
/// Returns the value and the first unprocessed index, or `None` when the
/// accumulated value does not fit into 64 bits. Does not skip leading
/// whitespace; stops at the first non-digit.
pub(crate) fn read_u64(bytes: &[u8], mut pos: usize) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        let digit = u64::from(bytes[pos] - b'0');
        value = value.checked_mul(10)?.checked_add(digit)?;
        pos += 1;
    }
    Some((value, pos))
}
