//! Banner and dimensions line parsing
//!
//! The first line must carry the `%%MatrixMarket` banner with exactly four
//! declarations after it; subsequent `%` comment and blank lines are skipped
//! until the `rows cols entries` dimensions line.

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::format::{keywords, ElementType, Header, MatrixFormat, Symmetry};
use crate::parse::tokenizer::{LineTokenizer, Token};
use crate::parse::{pull_line, read_u64};
use crate::source::LineSource;

/// Parse the banner and dimensions lines into a validated [`Header`]
///
/// Leaves the source positioned at the first data line. On failure the
/// returned diagnostic points at the offending token; nothing further is
/// consumed from the source.
pub fn parse_header<S: LineSource + ?Sized>(source: &mut S) -> ParseResult<Header> {
    let line = match pull_line(source, 1)? {
        Some(line) => String::from_utf8_lossy(line).into_owned(),
        None => return Err(banner_error(ParseErrorKind::MissingMagicBanner, 1)),
    };

    let (format, element_type, symmetry) = parse_banner(&line)?;
    parse_dimensions(source, format, element_type, symmetry)
}

fn banner_error(kind: ParseErrorKind, column: usize) -> ParseError {
    ParseError::new(kind, 1, column)
}

fn parse_banner(line: &str) -> ParseResult<(MatrixFormat, ElementType, Symmetry)> {
    let mut tokens = LineTokenizer::new(line);

    // The magic token is the single case-sensitive match, anchored at column 1.
    match tokens.next_token() {
        Some(token) if token.column == 1 && token.word == Header::MAGIC => {}
        _ => return Err(banner_error(ParseErrorKind::MissingMagicBanner, 1)),
    }

    match tokens.next_token() {
        None => {
            return Err(banner_error(
                ParseErrorKind::InvalidObjectKind { found: String::new() },
                tokens.current_column(),
            ))
        }
        Some(token) if !token.word.eq_ignore_ascii_case("matrix") => {
            return Err(banner_error(
                ParseErrorKind::InvalidObjectKind {
                    found: token.word.to_string(),
                },
                token.column,
            ))
        }
        Some(_) => {}
    }

    let format = required_keyword(&mut tokens, keywords::FORMATS, |found| {
        ParseErrorKind::InvalidFormatKeyword { found }
    })?;
    let element_type = required_keyword(&mut tokens, keywords::ELEMENT_TYPES, |found| {
        ParseErrorKind::InvalidTypeKeyword { found }
    })?;
    let symmetry = required_keyword(&mut tokens, keywords::SYMMETRIES, |found| {
        ParseErrorKind::InvalidSymmetryKeyword { found }
    })?;

    if let Some(extra) = tokens.next_token() {
        return Err(banner_error(ParseErrorKind::TrailingHeaderTokens, extra.column));
    }

    Ok((format, element_type, symmetry))
}

/// Match one banner slot against its keyword table
fn required_keyword<T: Copy>(
    tokens: &mut LineTokenizer<'_>,
    table: &[(&str, T)],
    kind: impl FnOnce(Option<String>) -> ParseErrorKind,
) -> ParseResult<T> {
    match tokens.next_token() {
        None => Err(banner_error(kind(None), tokens.current_column())),
        Some(token) => keywords::lookup(token.word, table)
            .ok_or_else(|| banner_error(kind(Some(token.word.to_string())), token.column)),
    }
}

fn parse_dimensions<S: LineSource + ?Sized>(
    source: &mut S,
    format: MatrixFormat,
    element_type: ElementType,
    symmetry: Symmetry,
) -> ParseResult<Header> {
    let mut line_no: u64 = 1;

    loop {
        line_no += 1;
        let line = match pull_line(source, line_no)? {
            Some(line) => line,
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingDimensionsLine,
                    line_no,
                    1,
                ))
            }
        };
        if line.first() == Some(&b'%') {
            continue;
        }

        let line = String::from_utf8_lossy(line).into_owned();
        let mut tokens = LineTokenizer::new(&line);
        let Some(first) = tokens.next_token() else {
            continue;
        };

        let (rows, rows_column) = dimension_field(first, line_no)?;
        let (cols, cols_column) = match tokens.next_token() {
            Some(token) => dimension_field(token, line_no)?,
            None => return Err(invalid_dimensions(line_no, tokens.current_column())),
        };
        let declared_entries = match tokens.next_token() {
            Some(token) => dimension_field(token, line_no)?.0,
            None => return Err(invalid_dimensions(line_no, tokens.current_column())),
        };
        if let Some(extra) = tokens.next_token() {
            return Err(invalid_dimensions(line_no, extra.column));
        }

        if rows == 0 {
            return Err(invalid_dimensions(line_no, rows_column));
        }
        if cols == 0 {
            return Err(invalid_dimensions(line_no, cols_column));
        }
        // A symmetry declaration only makes sense for a square matrix, and
        // the mirror expansion relies on it.
        if symmetry != Symmetry::General && rows != cols {
            return Err(ParseError::new(
                ParseErrorKind::NonSquareSymmetry { symmetry, rows, cols },
                line_no,
                rows_column,
            ));
        }

        return Ok(Header {
            format,
            element_type,
            symmetry,
            rows,
            cols,
            declared_entries,
            preamble_lines: line_no,
        });
    }
}

fn invalid_dimensions(line_no: u64, column: usize) -> ParseError {
    ParseError::new(ParseErrorKind::InvalidDimensionsLine, line_no, column)
}

/// Parse one dimensions-line token as an unsigned integer
fn dimension_field(token: Token<'_>, line_no: u64) -> ParseResult<(u64, usize)> {
    let bytes = token.word.as_bytes();
    if !bytes[0].is_ascii_digit() {
        return Err(invalid_dimensions(line_no, token.column));
    }
    match read_u64(bytes, 0) {
        None => Err(ParseError::new(
            ParseErrorKind::IntegerOverflow,
            line_no,
            token.column,
        )),
        Some((value, end)) if end == bytes.len() => Ok((value, token.column)),
        Some(_) => Err(invalid_dimensions(line_no, token.column)),
    }
}
