//! Character-class predicates used throughout the lexer-free parser.
//!
//! Every predicate here is a pure function of a single `char`, matching the
//! grammar's definition of whitespace, newlines, and identifier characters
//! by exclusion rather than by an explicit token table.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// One of the six newline code points recognized by the grammar. `\r\n` is
/// collapsed to a single logical newline by the cursor, not by this predicate.
pub fn is_newline(c: char) -> bool {
    matches!(c, '\u{000A}' | '\u{000D}' | '\u{0085}' | '\u{000C}' | '\u{2028}' | '\u{2029}')
}

/// Any of the eighteen whitespace code points the grammar treats as
/// insignificant spacing (newlines are handled separately).
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0020}'
            | '\u{0009}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// True if the character is a Unicode decimal digit (general category `Nd`).
pub fn is_unicode_digit(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Number
}

const FORBIDDEN_IDENT_CHARS: &[char] =
    &['(', ')', '{', '}', '[', ']', '/', '\\', '<', '>', ';', '=', ',', '"'];

/// A rune that may appear anywhere in a bare identifier: not one of the
/// grammar's reserved punctuation characters, not whitespace or a newline,
/// and not a control character.
pub fn is_bare_ident_rune(c: char) -> bool {
    if FORBIDDEN_IDENT_CHARS.contains(&c) {
        return false;
    }
    if is_whitespace(c) || is_newline(c) {
        return false;
    }
    (c as u32) > 0x20 && (c as u32) <= 0x10_FFFF
}

/// A rune that may start a bare identifier: a bare-ident rune that is not
/// also a Unicode digit (digits are reserved for the start of numbers).
pub fn is_bare_ident_initial(c: char) -> bool {
    is_bare_ident_rune(c) && !is_unicode_digit(c)
}

/// True for any character that legally terminates an argument or property
/// value: `;`, `}`, whitespace, or a newline.
pub fn is_value_terminator(c: char) -> bool {
    c == ';' || c == '}' || is_whitespace(c) || is_newline(c)
}

/// The three bare words that are reserved and cannot be used as a bare
/// identifier, since they lex as their respective literal values instead.
pub fn is_reserved_keyword(s: &str) -> bool {
    matches!(s, "true" | "false" | "null")
}
