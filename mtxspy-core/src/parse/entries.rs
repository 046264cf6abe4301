//! Data line parsing and aggregation driver

use crate::error::{Axis, ParseError, ParseErrorKind, ParseResult};
use crate::format::Header;
use crate::grid::Grid;
use crate::parse::{pull_line, read_u64};
use crate::source::LineSource;

/// Feed every remaining data line into `grid`
///
/// Expects the source positioned immediately after the dimensions line, as
/// [`crate::parse_header`] leaves it. Blank lines are skipped; anything else
/// must start with a row and a column index, and trailing value fields are
/// ignored. The first malformed line aborts the whole parse.
pub fn parse_entries<S: LineSource + ?Sized>(
    source: &mut S,
    header: &Header,
    grid: &mut Grid,
) -> ParseResult<()> {
    let mut line_no = header.preamble_lines;
    loop {
        line_no += 1;
        match pull_line(source, line_no)? {
            Some(line) => process_line(line, line_no, header, grid)?,
            None => return Ok(()),
        }
    }
}

fn process_line(line: &[u8], line_no: u64, header: &Header, grid: &mut Grid) -> ParseResult<()> {
    let pos = skip_whitespace(line, 0);
    if pos >= line.len() {
        return Ok(());
    }
    if !line[pos].is_ascii_digit() {
        return Err(ParseError::new(
            ParseErrorKind::ExpectedRowIndex,
            line_no,
            pos + 1,
        ));
    }
    let (row, pos) = index_field(line, pos, Axis::Row, header.rows, line_no)?;

    let pos = skip_whitespace(line, pos);
    if pos >= line.len() || !line[pos].is_ascii_digit() {
        return Err(ParseError::new(
            ParseErrorKind::ExpectedColIndex,
            line_no,
            pos + 1,
        ));
    }
    let (col, _) = index_field(line, pos, Axis::Col, header.cols, line_no)?;

    grid.record_entry(row - 1, col - 1);
    Ok(())
}

/// Parse one 1-based index starting at a digit, bounds-checked against `limit`
fn index_field(
    line: &[u8],
    start: usize,
    axis: Axis,
    limit: u64,
    line_no: u64,
) -> ParseResult<(u64, usize)> {
    let (value, end) = read_u64(line, start).ok_or_else(|| {
        ParseError::new(ParseErrorKind::IntegerOverflow, line_no, start + 1)
    })?;
    if value == 0 || value > limit {
        return Err(ParseError::new(
            ParseErrorKind::IndexOutOfBounds {
                axis,
                index: value,
                limit,
            },
            line_no,
            start + 1,
        ));
    }
    Ok((value, end))
}

fn skip_whitespace(line: &[u8], mut pos: usize) -> usize {
    while pos < line.len() && line[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}
