//! Bare/quoted/raw identifier reading, with a caller-selected stop mode
//! controlling which punctuation terminates rather than faults the scan.

use crate::chars::{
    is_bare_ident_initial, is_bare_ident_rune, is_newline, is_reserved_keyword, is_unicode_digit, is_whitespace,
};
use crate::cursor::Cursor;
use crate::error::{KResult, KdlErrorKind};
use crate::identifier::{Identifier, TypeHint};
use crate::parser::strings::{read_quoted_string, read_raw_string};

/// Which punctuation characters terminate (rather than fault) a bare
/// identifier scan. The source uses a small enumeration here rather than
/// flag booleans because the contexts are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopMode {
    Freestanding,
    CloseParen,
    Equals,
    Semicolon,
}

impl StopMode {
    fn terminates(self, ch: char) -> bool {
        match self {
            StopMode::Freestanding => false,
            StopMode::CloseParen => ch == ')',
            StopMode::Equals => ch == '=',
            StopMode::Semicolon => ch == ';',
        }
    }
}

pub(crate) fn read_bare_identifier(cur: &mut Cursor, stop: StopMode) -> KResult<Identifier> {
    let first = cur.peek_rune()?;
    if !is_bare_ident_initial(first) {
        return Err(KdlErrorKind::InvalidInitialCharInBareIdentifier { found: first });
    }

    let mut lexeme = String::new();
    loop {
        if cur.is_eof() {
            break;
        }
        let ch = cur.peek_rune()?;
        if is_whitespace(ch) || is_newline(ch) {
            break;
        }
        if !is_bare_ident_rune(ch) {
            if stop.terminates(ch) {
                break;
            }
            return Err(KdlErrorKind::InvalidCharInBareIdentifier { found: ch });
        }
        lexeme.push(cur.consume_rune()?);
    }

    if is_reserved_keyword(&lexeme) || is_sign_prefixed_numeric_lexeme(&lexeme) {
        return Err(KdlErrorKind::InvalidBareIdentifier { identifier: lexeme });
    }

    Ok(Identifier::new(lexeme))
}

/// True for a lexeme that looks like the start of a signed number rather
/// than a bare identifier: `+`/`-` followed by a Unicode digit, or `+`/`-`
/// on its own with nothing after it (a lone sign has no digit to confirm a
/// number, but it's not a legal identifier either — the caller falls
/// through to the number reader, which reports the empty-sign lexeme as a
/// malformed decimal).
fn is_sign_prefixed_numeric_lexeme(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    match chars.next() {
        Some('+') | Some('-') => match chars.next() {
            Some(c) => is_unicode_digit(c),
            None => true,
        },
        _ => false,
    }
}

/// Reads an identifier in any of its three surface forms. The returned
/// `bool` is true when the identifier came from a quoted or raw string,
/// which matters to callers deciding whether an empty or keyword-like
/// lexeme is legal.
pub(crate) fn read_identifier(cur: &mut Cursor, stop: StopMode) -> KResult<(Identifier, bool)> {
    let ch = cur.peek_rune()?;

    if ch == '"' {
        let s = read_quoted_string(cur)?;
        return Ok((Identifier::new(s), true));
    }

    if ch == 'r' {
        let checkpoint = cur.checkpoint();
        return match read_raw_string(cur) {
            Ok(s) => Ok((Identifier::new(s), true)),
            Err(_) => {
                cur.rewind(checkpoint);
                Ok((read_bare_identifier(cur, stop)?, false))
            }
        };
    }

    if is_bare_ident_initial(ch) {
        Ok((read_bare_identifier(cur, stop)?, false))
    } else {
        Err(KdlErrorKind::InvalidInitialCharInBareIdentifier { found: ch })
    }
}

/// Reads an optional `(identifier)` type hint. Consumes nothing and returns
/// `Absent` if the next byte isn't `(`.
pub(crate) fn read_maybe_type_hint(cur: &mut Cursor) -> KResult<TypeHint> {
    if cur.peek_rune()? != '(' {
        return Ok(TypeHint::Absent);
    }
    cur.consume_bytes(1);

    let (id, _) = read_identifier(cur, StopMode::CloseParen)?;

    if cur.peek_rune()? != ')' {
        return Err(KdlErrorKind::ExpectedCloseTypeHint);
    }
    cur.consume_bytes(1);

    Ok(TypeHint::Present(id))
}
