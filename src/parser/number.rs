//! Numeric literal reading: four bases, underscore separators, and the
//! decimal exponent classification rules.

use num_bigint::BigInt;

use crate::chars::{is_newline, is_whitespace};
use crate::cursor::Cursor;
use crate::error::{KResult, KdlErrorKind};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Number {
    Integer(BigInt),
    Float(f64),
}

pub(crate) fn read_number(cur: &mut Cursor) -> KResult<Number> {
    let raw = scan_number_lexeme(cur)?;
    if raw.is_empty() {
        return Err(KdlErrorKind::EmptyNumber);
    }

    let (sign_negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(&raw)),
    };

    if let Some(digits) = unsigned.strip_prefix("0b") {
        return parse_non_decimal(digits, 2, sign_negative, is_binary_digit, KdlErrorKind::BadBinary);
    }
    if let Some(digits) = unsigned.strip_prefix("0o") {
        return parse_non_decimal(digits, 8, sign_negative, is_octal_digit, KdlErrorKind::BadOctal);
    }
    if let Some(digits) = unsigned.strip_prefix("0x") {
        return parse_non_decimal(digits, 16, sign_negative, |c| c.is_ascii_hexdigit(), KdlErrorKind::BadHex);
    }

    if !validate_decimal(unsigned) {
        return Err(KdlErrorKind::BadDecimal);
    }

    let has_dot = unsigned.contains('.');
    let exponent = decimal_exponent(unsigned);
    let cleaned: String = unsigned.chars().filter(|c| *c != '_').collect();

    if has_dot || exponent.is_some_and(|e| e < 0) {
        let text = if sign_negative { format!("-{cleaned}") } else { cleaned };
        let value: f64 = text.parse().map_err(|_| KdlErrorKind::ParseFloatFailed)?;
        return Ok(Number::Float(value));
    }

    if let Some(exp) = exponent {
        let mantissa = cleaned.split(['e', 'E']).next().unwrap_or(&cleaned);
        let mut digits = mantissa.to_string();
        digits.extend(std::iter::repeat('0').take(exp as usize));
        let mut value: BigInt = digits.parse().map_err(|_| KdlErrorKind::ParseIntegerFailed)?;
        if sign_negative {
            value = -value;
        }
        return Ok(Number::Integer(value));
    }

    let mut value: BigInt = cleaned.parse().map_err(|_| KdlErrorKind::ParseIntegerFailed)?;
    if sign_negative {
        value = -value;
    }
    Ok(Number::Integer(value))
}

fn parse_non_decimal(
    digits: &str,
    base: u32,
    sign_negative: bool,
    is_digit: impl Fn(char) -> bool,
    bad_kind: KdlErrorKind,
) -> KResult<Number> {
    if !validate_digit_run(digits, &is_digit) {
        return Err(bad_kind);
    }
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let mut value = BigInt::parse_bytes(cleaned.as_bytes(), base).ok_or(KdlErrorKind::ParseIntegerFailed)?;
    if sign_negative {
        value = -value;
    }
    Ok(Number::Integer(value))
}

fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1'
}

fn is_octal_digit(c: char) -> bool {
    ('0'..='7').contains(&c)
}

/// `digit (digit|_)*`: at least one digit of the given kind, then any mix
/// of further digits and underscore separators.
fn validate_digit_run(s: &str, is_digit: &impl Fn(char) -> bool) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_digit(c) => {}
        _ => return false,
    }
    chars.all(|c| is_digit(c) || c == '_')
}

/// `digit(digit|_)* (. digit(digit|_)*)? ([eE] [+-]? digit(digit|_)*)?`
fn validate_decimal(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut i = match consume_digit_run(&chars, 0) {
        Some(i) => i,
        None => return false,
    };

    if i < n && chars[i] == '.' {
        i += 1;
        i = match consume_digit_run(&chars, i) {
            Some(i) => i,
            None => return false,
        };
    }

    if i < n && (chars[i] == 'e' || chars[i] == 'E') {
        i += 1;
        if i < n && (chars[i] == '+' || chars[i] == '-') {
            i += 1;
        }
        i = match consume_digit_run(&chars, i) {
            Some(i) => i,
            None => return false,
        };
    }

    i == n
}

fn consume_digit_run(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    if i >= chars.len() || !chars[i].is_ascii_digit() {
        return None;
    }
    i += 1;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '_') {
        i += 1;
    }
    Some(i)
}

fn decimal_exponent(s: &str) -> Option<i64> {
    let idx = s.find(['e', 'E'])?;
    let exp_part: String = s[idx + 1..].chars().filter(|c| *c != '_').collect();
    exp_part.parse::<i64>().ok()
}

/// Scans the raw lexeme of a number: every rune up to the first value
/// terminator, comment-start slash, or end of input. Underscore separators
/// and sign/base prefixes are all kept as-is for [`read_number`] to inspect.
fn scan_number_lexeme(cur: &mut Cursor) -> KResult<String> {
    let mut raw = String::new();
    loop {
        if cur.is_eof() {
            break;
        }
        let ch = cur.peek_rune()?;
        if ch == ';' || ch == '}' || ch == '/' || is_whitespace(ch) || is_newline(ch) {
            break;
        }
        raw.push(cur.consume_rune()?);
    }
    Ok(raw)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    fn read(s: &str) -> Number {
        let mut cur = Cursor::new(s);
        read_number(&mut cur).unwrap()
    }

    #[test_case("4", "4" ; "plain")]
    #[test_case("+2", "2" ; "explicit plus")]
    #[test_case("-6", "-6" ; "negative")]
    #[test_case("1_33_7", "1337" ; "underscore separators")]
    #[test_case("4e3", "4000" ; "nonneg exponent pads zeros")]
    fn classifies_as_integer(input: &str, expected: &str) {
        match read(input) {
            Number::Integer(i) => assert_eq!(i.to_string(), expected),
            Number::Float(f) => panic!("expected integer, got float {f}"),
        }
    }

    #[test_case("7e-2", 0.07 ; "negative exponent")]
    #[test_case("-1.1e-2", -0.011 ; "negative mantissa and exponent")]
    fn classifies_as_float(input: &str, expected: f64) {
        match read(input) {
            Number::Float(f) => assert!((f - expected).abs() < 1e-12),
            Number::Integer(i) => panic!("expected float, got integer {i}"),
        }
    }

    #[test]
    fn hex_octal_binary_bases() {
        assert_eq!(read("0x1F").to_owned_string(), "31");
        assert_eq!(read("0o17").to_owned_string(), "15");
        assert_eq!(read("0b101").to_owned_string(), "5");
    }

    trait AsOwnedString {
        fn to_owned_string(&self) -> String;
    }
    impl AsOwnedString for Number {
        fn to_owned_string(&self) -> String {
            match self {
                Number::Integer(i) => i.to_string(),
                Number::Float(f) => f.to_string(),
            }
        }
    }

    #[test]
    fn empty_number_is_an_error() {
        let mut cur = Cursor::new(";");
        assert_eq!(read_number(&mut cur), Err(KdlErrorKind::EmptyNumber));
    }

    #[test]
    fn dot_inside_non_decimal_base_is_rejected() {
        let mut cur = Cursor::new("0x1.5");
        assert!(read_number(&mut cur).is_err());
    }
}
