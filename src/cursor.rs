//! The input cursor: a buffer-backed position over already-validated UTF-8
//! text, with bounded-free lookahead (the whole document is loaded up front,
//! so unlike a streaming reader there is no fixed lookahead window to manage)
//! and line/column tracking for error reporting.

use crate::chars::is_newline;
use crate::error::{KResult, KdlErrorKind};
use crate::error::Position;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    pos: usize,
    line: usize,
    column: usize,
}

/// A cursor over a document's source text.
///
/// The source is validated UTF-8 before a `Cursor` is ever constructed (see
/// [`crate::parser::validate_utf8`]), so every method here can assume valid
/// encoding and never needs to report `InvalidEncoding` itself.
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0, line: 1, column: 0, depth: 0 }
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn enter_children(&mut self) {
        self.depth += 1;
    }

    pub fn exit_children(&mut self) {
        self.depth -= 1;
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { pos: self.pos, line: self.line, column: self.column }
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
    }

    pub fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    pub fn peek_byte_at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    pub fn peek_rune(&self) -> KResult<char> {
        self.source[self.pos..].chars().next().ok_or(KdlErrorKind::UnexpectedEof)
    }

    pub fn peek_rune_at(&self, n: usize) -> KResult<char> {
        self.source[self.pos..].chars().nth(n).ok_or(KdlErrorKind::UnexpectedEof)
    }

    pub fn starts_with(&self, s: &str) -> bool {
        self.source[self.pos..].starts_with(s)
    }

    /// The remainder of the source text from the current position.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Advance past the next occurrence of `needle`, without consuming it,
    /// and return the text skipped over. `None` if `needle` does not occur
    /// again before end of input, in which case nothing is consumed.
    ///
    /// Used by content scans (raw strings) that have no escape processing
    /// and can jump straight to the next delimiter byte instead of
    /// advancing rune by rune.
    pub fn consume_until_byte(&mut self, needle: u8) -> Option<&'a str> {
        let rest = &self.source[self.pos..];
        let idx = memchr::memchr(needle, rest.as_bytes())?;
        let text = &rest[..idx];
        self.pos += idx;
        for ch in text.chars() {
            self.advance_position(ch);
        }
        Some(text)
    }

    /// Advance by one code point, returning it. Fails at end of input.
    pub fn consume_rune(&mut self) -> KResult<char> {
        let ch = self.peek_rune()?;
        self.pos += ch.len_utf8();
        self.advance_position(ch);
        Ok(ch)
    }

    pub fn consume_runes(&mut self, n: usize) -> KResult<()> {
        for _ in 0..n {
            self.consume_rune()?;
        }
        Ok(())
    }

    /// Advance by exactly `n` bytes. Only valid for fixed single-byte-per-rune
    /// ASCII literals (punctuation and the `true`/`false`/`null` keywords);
    /// general text must use [`Self::consume_rune`] instead.
    pub fn consume_bytes(&mut self, n: usize) {
        for _ in 0..n {
            match self.peek_byte() {
                Some(b) => {
                    debug_assert!(b.is_ascii(), "consume_bytes used on non-ASCII content");
                    self.pos += 1;
                    self.advance_position(b as char);
                }
                None => break,
            }
        }
    }

    fn advance_position(&mut self, ch: char) {
        if ch == '\r' {
            if self.peek_byte() == Some(b'\n') {
                // Leave line/column alone; the following '\n' bumps the line.
                return;
            }
            self.line += 1;
            self.column = 0;
        } else if is_newline(ch) {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}
