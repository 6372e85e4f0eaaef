//! Left-to-right cursor over one race-history row
//!
//! The row text is never modified. Extractors advance the cursor past what
//! they recognise and the cursor remembers every consumed range, so the
//! remainder handed to the next step is always `rest()`.

use regex::Regex;
use std::ops::Range;

/// A whitespace-delimited token and where it sits in the row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text
    pub text: &'a str,
    /// Byte range in the row
    pub range: Range<usize>,
}

/// Cursor over an immutable row string
#[derive(Debug, Clone)]
pub struct RowCursor<'a> {
    text: &'a str,
    pos: usize,
    end: usize,
    consumed: Vec<Range<usize>>,
}

impl<'a> RowCursor<'a> {
    /// Start at the beginning of `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            end: text.len(),
            consumed: Vec::new(),
        }
    }

    /// Text not yet consumed
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..self.end]
    }

    /// Current byte offset in the row
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move past any whitespace at the cursor
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consume a match of `re` that begins exactly at the cursor
    pub fn take_match(&mut self, re: &Regex) -> Option<Token<'a>> {
        let m = re.find(self.rest()).filter(|m| m.start() == 0 && !m.is_empty())?;
        let range = self.pos..self.pos + m.end();
        Some(self.consume(range))
    }

    /// The next whitespace-delimited token, without consuming it
    pub fn peek_token(&self) -> Option<Token<'a>> {
        self.tokens().into_iter().next()
    }

    /// Consume the next token when `accept` approves its text
    pub fn take_token_if<F>(&mut self, accept: F) -> Option<Token<'a>>
    where
        F: FnOnce(&str) -> bool,
    {
        let token = self.peek_token().filter(|t| accept(t.text))?;
        Some(self.consume(token.range))
    }

    /// All remaining tokens, without consuming them
    pub fn tokens(&self) -> Vec<Token<'a>> {
        let mut out = Vec::new();
        let mut start = None;
        for (i, c) in self.rest().char_indices() {
            let at = self.pos + i;
            match (c.is_whitespace(), start) {
                (true, Some(s)) => {
                    out.push(self.token(s..at));
                    start = None;
                }
                (false, None) => start = Some(at),
                _ => {}
            }
        }
        if let Some(s) = start {
            out.push(self.token(s..self.end));
        }
        out
    }

    /// Consume everything from the cursor up to `range.end`
    ///
    /// Returns the text of `range`, which must start at or after the cursor.
    pub fn take_range(&mut self, range: Range<usize>) -> Option<Token<'a>> {
        if range.start < self.pos || range.end > self.end || range.start > range.end {
            return None;
        }
        self.pos = range.start;
        Some(self.consume(range))
    }

    /// Stop the row at `offset`; text after it is consumed
    pub fn truncate_end(&mut self, offset: usize) {
        if offset >= self.pos && offset < self.end {
            self.consumed.push(offset..self.end);
            self.end = offset;
        }
    }

    /// Every range consumed so far, in the order consumed
    pub fn consumed(&self) -> &[Range<usize>] {
        &self.consumed
    }

    fn token(&self, range: Range<usize>) -> Token<'a> {
        Token {
            text: &self.text[range.clone()],
            range,
        }
    }

    fn consume(&mut self, range: Range<usize>) -> Token<'a> {
        self.pos = range.end;
        self.consumed.push(range.clone());
        self.token(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_do_not_consume() {
        let cursor = RowCursor::new("  6f ft  24 ");
        let tokens = cursor.tokens();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["6f", "ft", "24"]);
        assert_eq!(tokens[2].range, 9..11);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_take_match_is_anchored() {
        let re = Regex::new(r"^\d+f").unwrap();
        let mut cursor = RowCursor::new("ft 6f");
        assert!(cursor.take_match(&re).is_none());

        let mut cursor = RowCursor::new("6f ft");
        let token = cursor.take_match(&re).unwrap();
        assert_eq!(token.text, "6f");
        assert_eq!(cursor.rest(), " ft");
    }

    #[test]
    fn test_take_token_if() {
        let mut cursor = RowCursor::new("ft 24");
        assert!(cursor.take_token_if(|t| t == "gd").is_none());
        assert_eq!(cursor.take_token_if(|t| t == "ft").unwrap().text, "ft");
        assert_eq!(cursor.rest(), " 24");
        assert_eq!(cursor.consumed(), &[0..2]);
    }

    #[test]
    fn test_take_range_skips_ahead() {
        let mut cursor = RowCursor::new("a b c d");
        let token = cursor.take_range(4..5).unwrap();
        assert_eq!(token.text, "c");
        assert_eq!(cursor.rest(), " d");
        assert!(cursor.take_range(0..1).is_none());
    }

    #[test]
    fn test_truncate_end() {
        let mut cursor = RowCursor::new("comment here 8");
        cursor.truncate_end(13);
        assert_eq!(cursor.rest(), "comment here ");
        assert_eq!(cursor.tokens().len(), 2);
    }

    #[test]
    fn test_multibyte_tokens() {
        let cursor = RowCursor::new("ñ bumped");
        let tokens = cursor.tokens();
        assert_eq!(tokens[0].text, "ñ");
        assert_eq!(tokens[1].range, 3..9);
    }
}
