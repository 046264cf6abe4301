//! Whitespace tokenizer with column tracking
//!
//! Header-stage diagnostics point at the column of the offending token, not
//! just the line, so the tokenizer remembers where each word starts.

/// A word and the 1-based column of its first character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub word: &'a str,
    pub column: usize,
}

/// Splits a line on ASCII whitespace, tracking token start columns
#[derive(Debug)]
pub struct LineTokenizer<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> LineTokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// 1-based column where the next token would start
    ///
    /// Past the last token this is one past the end of the line, which is
    /// where a missing-token diagnostic should point.
    pub fn current_column(&self) -> usize {
        let bytes = self.line.as_bytes();
        let mut pos = self.pos;
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        pos + 1
    }

    /// Next whitespace-delimited token, or `None` at end of line
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let bytes = self.line.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }

        Some(Token {
            word: &self.line[start..self.pos],
            column: start + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_start_columns() {
        let mut tokens = LineTokenizer::new("%%MatrixMarket matrix  coordinate");
        assert_eq!(
            tokens.next_token(),
            Some(Token { word: "%%MatrixMarket", column: 1 })
        );
        assert_eq!(tokens.next_token(), Some(Token { word: "matrix", column: 16 }));
        assert_eq!(
            tokens.next_token(),
            Some(Token { word: "coordinate", column: 24 })
        );
        assert_eq!(tokens.next_token(), None);
    }

    #[test]
    fn test_leading_whitespace_shifts_column() {
        let mut tokens = LineTokenizer::new("   abc");
        assert_eq!(tokens.next_token(), Some(Token { word: "abc", column: 4 }));
    }

    #[test]
    fn test_current_column_after_last_token() {
        let mut tokens = LineTokenizer::new("abc ");
        tokens.next_token();
        assert_eq!(tokens.current_column(), 5);
    }

    #[test]
    fn test_blank_line_has_no_tokens() {
        let mut tokens = LineTokenizer::new(" \t ");
        assert_eq!(tokens.next_token(), None);
        assert_eq!(tokens.current_column(), 4);
    }

    #[test]
    fn test_tabs_separate_tokens() {
        let mut tokens = LineTokenizer::new("4\t5");
        assert_eq!(tokens.next_token(), Some(Token { word: "4", column: 1 }));
        assert_eq!(tokens.next_token(), Some(Token { word: "5", column: 3 }));
    }
}
