//! Skips whitespace, line continuations, and line/block comments between
//! syntactically significant tokens. Newlines are significant terminators
//! and are left untouched here; the node and document parsers consume them.

use crate::chars::{is_newline, is_whitespace};
use crate::cursor::Cursor;
use crate::error::{KResult, KdlErrorKind};

/// Skip a run of trivia. Stops at the first newline, the first
/// non-trivia rune, or end of input — all three are reported as `Ok(())`,
/// since running out of trivia to skip is never itself an error; only an
/// unterminated block comment is.
pub(crate) fn skip_trivia(cur: &mut Cursor) -> KResult<()> {
    loop {
        if cur.is_eof() {
            return Ok(());
        }
        let ch = cur.peek_rune()?;

        if is_whitespace(ch) {
            cur.consume_rune()?;
            continue;
        }

        if ch == '\\' {
            cur.consume_bytes(1);
            skip_line_continuation(cur)?;
            continue;
        }

        if cur.starts_with("//") {
            cur.consume_bytes(2);
            return skip_to_newline(cur, false);
        }

        if cur.starts_with("/*") {
            cur.consume_bytes(2);
            skip_block_comment(cur)?;
            continue;
        }

        return Ok(());
    }
}

/// Skip past a `\` line continuation: only whitespace may separate the
/// backslash from the newline it continues past. Anything else — a
/// non-whitespace, non-newline rune — is a syntax error rather than content
/// to be silently swallowed. Reaching end of input after the backslash (with
/// only whitespace in between) is not an error; there is simply nothing left
/// to continue onto.
fn skip_line_continuation(cur: &mut Cursor) -> KResult<()> {
    loop {
        if cur.is_eof() {
            return Ok(());
        }

        if cur.starts_with("\r\n") {
            cur.consume_bytes(2);
            return Ok(());
        }

        let ch = cur.peek_rune()?;
        if is_newline(ch) {
            cur.consume_rune()?;
            return Ok(());
        }
        if is_whitespace(ch) {
            cur.consume_rune()?;
            continue;
        }

        return Err(KdlErrorKind::InvalidSyntax {
            message: "a line continuation's '\\' must be followed only by whitespace and a newline".into(),
        });
    }
}

/// Skip to (or past) the next newline, treating `\r\n` as a single newline.
/// If `after_break` is false, the cursor stops immediately before the
/// newline rather than consuming it.
pub(crate) fn skip_to_newline(cur: &mut Cursor, after_break: bool) -> KResult<()> {
    loop {
        if cur.starts_with("\r\n") {
            if after_break {
                cur.consume_bytes(2);
            } else {
                cur.consume_bytes(1);
            }
            return Ok(());
        }

        if cur.is_eof() {
            return Ok(());
        }

        let ch = cur.peek_rune()?;
        if is_newline(ch) {
            if after_break {
                cur.consume_rune()?;
            }
            return Ok(());
        }

        cur.consume_rune()?;
    }
}

fn skip_block_comment(cur: &mut Cursor) -> KResult<()> {
    let mut depth = 1usize;
    loop {
        if cur.starts_with("/*") {
            cur.consume_bytes(2);
            depth += 1;
            continue;
        }
        if cur.starts_with("*/") {
            cur.consume_bytes(2);
            depth -= 1;
            if depth == 0 {
                return Ok(());
            }
            continue;
        }
        if cur.is_eof() {
            return Err(KdlErrorKind::UnexpectedEof);
        }
        cur.consume_rune()?;
    }
}
