//! Pull-based line access over in-memory buffers
//!
//! Parsers consume input through [`LineSource`], a lazy, finite,
//! non-restartable sequence of physical lines. This module ships the
//! in-memory implementation; file-backed sources live in the `mtxspy` crate
//! and share the same parser code path.

use std::fmt;
use std::io;

/// Longest physical line a source may yield, in bytes
///
/// Data files with tens of millions of entries are processed with O(1)
/// auxiliary memory per line; a line over this ceiling is reported as an
/// error rather than truncated or buffered without bound.
pub const MAX_LINE_LEN: usize = 1024;

/// Failure while pulling the next line
#[derive(Debug)]
pub enum SourceError {
    /// A line exceeded [`MAX_LINE_LEN`]
    LineTooLong,
    /// The underlying reader failed
    Io(io::Error),
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        SourceError::Io(err)
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::LineTooLong => {
                write!(f, "line is too long (over {MAX_LINE_LEN} characters)")
            }
            SourceError::Io(err) => write!(f, "read error: {err}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(err) => Some(err),
            SourceError::LineTooLong => None,
        }
    }
}

/// A lazy, finite sequence of physical lines
///
/// Lines are yielded without the trailing newline; a trailing `\r` is
/// stripped as well. The returned slice borrows from the source, so it is
/// only valid until the next call.
pub trait LineSource {
    /// Pull the next line, or `None` once the input is exhausted
    fn next_line(&mut self) -> Result<Option<&[u8]>, SourceError>;
}

/// Line source over a borrowed in-memory buffer
///
/// Used for buffers already resident in memory: test fixtures, string
/// literals, and memory-mapped files.
#[derive(Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Wrap a byte buffer positioned at the start of the file
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl LineSource for SliceSource<'_> {
    fn next_line(&mut self) -> Result<Option<&[u8]>, SourceError> {
        if self.pos >= self.data.len() {
            return Ok(None);
        }

        let rest = &self.data[self.pos..];
        let (mut line, advance) = match rest.iter().position(|&b| b == b'\n') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        self.pos += advance;

        if let [head @ .., b'\r'] = line {
            line = head;
        }
        if line.len() > MAX_LINE_LEN {
            return Err(SourceError::LineTooLong);
        }

        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(data: &[u8]) -> Vec<Vec<u8>> {
        let mut source = SliceSource::new(data);
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line.to_vec());
        }
        lines
    }

    #[test]
    fn test_splits_on_newline() {
        assert_eq!(collect(b"a b\nc d\n"), vec![b"a b".to_vec(), b"c d".to_vec()]);
    }

    #[test]
    fn test_final_line_without_newline() {
        assert_eq!(collect(b"1 1\n2 2"), vec![b"1 1".to_vec(), b"2 2".to_vec()]);
    }

    #[test]
    fn test_strips_carriage_return() {
        assert_eq!(collect(b"1 1\r\n2 2\r\n"), vec![b"1 1".to_vec(), b"2 2".to_vec()]);
    }

    #[test]
    fn test_empty_lines_are_yielded() {
        assert_eq!(
            collect(b"a\n\nb\n"),
            vec![b"a".to_vec(), b"".to_vec(), b"b".to_vec()]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_line_over_ceiling_is_an_error() {
        let long = vec![b'7'; MAX_LINE_LEN + 1];
        let mut source = SliceSource::new(&long);
        assert!(matches!(
            source.next_line(),
            Err(SourceError::LineTooLong)
        ));
    }

    #[test]
    fn test_line_at_ceiling_is_fine() {
        let exact = vec![b'7'; MAX_LINE_LEN];
        let mut source = SliceSource::new(&exact);
        assert_eq!(source.next_line().unwrap().unwrap().len(), MAX_LINE_LEN);
        assert!(source.next_line().unwrap().is_none());
    }
}
