//! Quoted and raw string reading, shared by the value reader (for string
//! literals) and the identifier reader (quoted/raw identifiers).

use crate::cursor::Cursor;
use crate::error::{KResult, KdlErrorKind};

/// Reads a `"…"` quoted string, decoding its escape sequences.
pub(crate) fn read_quoted_string(cur: &mut Cursor) -> KResult<String> {
    if cur.peek_rune()? != '"' {
        return Err(KdlErrorKind::ExpectedQuotedString);
    }
    cur.consume_bytes(1);

    let mut out = String::new();
    loop {
        if cur.is_eof() {
            return Err(KdlErrorKind::UnexpectedEofInsideString);
        }
        let ch = cur.consume_rune()?;
        match ch {
            '"' => return Ok(out),
            '\\' => out.push(read_escape(cur)?),
            other => out.push(other),
        }
    }
}

fn read_escape(cur: &mut Cursor) -> KResult<char> {
    let esc = cur.consume_rune().map_err(|_| KdlErrorKind::UnexpectedEofInsideString)?;
    Ok(match esc {
        '/' => '/',
        '\\' => '\\',
        '"' => '"',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'u' => return read_unicode_escape(cur),
        other => {
            return Err(KdlErrorKind::InvalidSyntax {
                message: format!("'\\{other}' is not a valid escape sequence"),
            })
        }
    })
}

fn read_unicode_escape(cur: &mut Cursor) -> KResult<char> {
    let open = cur.consume_rune().map_err(|_| KdlErrorKind::UnexpectedEofInsideString)?;
    if open != '{' {
        return Err(KdlErrorKind::InvalidSyntax { message: "expected '{' after \\u".into() });
    }

    let mut digits = String::new();
    loop {
        let d = cur.consume_rune().map_err(|_| KdlErrorKind::UnexpectedEofInsideString)?;
        if d == '}' {
            break;
        }
        if digits.len() >= 6 || !d.is_ascii_hexdigit() {
            return Err(KdlErrorKind::InvalidSyntax { message: "invalid unicode escape".into() });
        }
        digits.push(d);
    }

    if digits.is_empty() {
        return Err(KdlErrorKind::InvalidSyntax { message: "empty unicode escape".into() });
    }

    let code_point = u32::from_str_radix(&digits, 16)
        .map_err(|_| KdlErrorKind::InvalidSyntax { message: "invalid unicode escape".into() })?;
    char::from_u32(code_point)
        .ok_or_else(|| KdlErrorKind::InvalidSyntax { message: "invalid unicode scalar value".into() })
}

/// Reads an `r…"…"…` raw string: `r`, N pound signs, a quote, uninterpreted
/// content, a quote, then exactly N pound signs.
pub(crate) fn read_raw_string(cur: &mut Cursor) -> KResult<String> {
    if cur.peek_rune()? != 'r' {
        return Err(KdlErrorKind::ExpectedRawString);
    }
    let start = cur.checkpoint();
    cur.consume_bytes(1);

    let mut pound_count = 0usize;
    loop {
        match cur.peek_byte() {
            Some(b'#') => {
                pound_count += 1;
                cur.consume_bytes(1);
            }
            Some(b'"') => break,
            _ => {
                cur.rewind(start);
                return Err(KdlErrorKind::ExpectedRawString);
            }
        }
    }
    cur.consume_bytes(1);

    let mut out = String::new();
    loop {
        if cur.is_eof() {
            cur.rewind(start);
            return Err(KdlErrorKind::UnexpectedEofInsideString);
        }

        if cur.peek_byte() == Some(b'"') {
            let after_content = cur.checkpoint();
            cur.consume_bytes(1);

            let mut closing_pounds = 0usize;
            while closing_pounds < pound_count && cur.peek_byte() == Some(b'#') {
                cur.consume_bytes(1);
                closing_pounds += 1;
            }

            if closing_pounds == pound_count {
                return Ok(out);
            }

            cur.rewind(after_content);
            out.push(cur.consume_rune()?);
            continue;
        }

        match cur.consume_until_byte(b'"') {
            Some(text) => out.push_str(text),
            None => {
                // No closing quote anywhere in the remainder; drain to EOF
                // so the next loop iteration's `is_eof` check reports it.
                while !cur.is_eof() {
                    out.push(cur.consume_rune()?);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decodes_simple_escapes() {
        let mut cur = Cursor::new(r#""a\nb\tc\"d""#);
        assert_eq!(read_quoted_string(&mut cur).unwrap(), "a\nb\tc\"d");
    }

    #[test]
    fn decodes_unicode_escape() {
        let mut cur = Cursor::new(r#""\u{1F600}""#);
        assert_eq!(read_quoted_string(&mut cur).unwrap(), "\u{1F600}");
    }

    #[test]
    fn unterminated_quoted_string_fails() {
        let mut cur = Cursor::new("\"abc");
        assert_eq!(read_quoted_string(&mut cur), Err(KdlErrorKind::UnexpectedEofInsideString));
    }

    #[test]
    fn raw_string_matches_pound_count() {
        let mut cur = Cursor::new(r####"r###"he said "##what?##" to me"###"####);
        assert_eq!(read_raw_string(&mut cur).unwrap(), r##"he said "##what?##" to me"##);
    }

    #[test]
    fn raw_string_with_no_pounds() {
        let mut cur = Cursor::new(r#"r"hello""#);
        assert_eq!(read_raw_string(&mut cur).unwrap(), "hello");
    }

    #[test]
    fn malformed_raw_string_opening_is_rejected() {
        let mut cur = Cursor::new("rfoo");
        assert_eq!(read_raw_string(&mut cur), Err(KdlErrorKind::ExpectedRawString));
    }
}
