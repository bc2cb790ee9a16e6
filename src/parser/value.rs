//! Reads a single `Value`: optional type hint, then the literal itself,
//! dispatched on the first significant rune.

use crate::chars::is_unicode_digit;
use crate::cursor::Cursor;
use crate::error::{KResult, KdlErrorKind};
use crate::parser::ident::read_maybe_type_hint;
use crate::parser::number::{read_number, Number};
use crate::parser::strings::{read_quoted_string, read_raw_string};
use crate::value::{Value, ValueKind};

pub(crate) fn read_value(cur: &mut Cursor) -> KResult<Value> {
    let type_hint = read_maybe_type_hint(cur)?;
    let ch = cur.peek_rune()?;

    let kind = if is_unicode_digit(ch) || ch == '-' || ch == '+' {
        match read_number(cur)? {
            Number::Integer(i) => ValueKind::Integer(i),
            Number::Float(f) => ValueKind::Float(f),
        }
    } else {
        match ch {
            '"' => ValueKind::String(read_quoted_string(cur)?),
            'r' => ValueKind::String(read_raw_string(cur)?),
            't' | 'f' => ValueKind::Bool(read_bool(cur)?),
            'n' => {
                read_null(cur)?;
                ValueKind::Null
            }
            other => return Err(KdlErrorKind::ExpectedValue { found: Some(other) }),
        }
    };

    Ok(Value { kind, type_hint })
}

fn read_bool(cur: &mut Cursor) -> KResult<bool> {
    if cur.starts_with("true") {
        cur.consume_bytes(4);
        Ok(true)
    } else if cur.starts_with("false") {
        cur.consume_bytes(5);
        Ok(false)
    } else {
        Err(KdlErrorKind::ExpectedBool)
    }
}

fn read_null(cur: &mut Cursor) -> KResult<()> {
    if cur.starts_with("null") {
        cur.consume_bytes(4);
        Ok(())
    } else {
        Err(KdlErrorKind::ExpectedNull)
    }
}
