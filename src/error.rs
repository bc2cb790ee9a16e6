use thiserror::Error;

/// A 1-based line and 0-based column (measured in Unicode code points since
/// the last newline) at which a parse error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The specific reason a parse failed, without source position information.
///
/// Internal parsing routines return this bare kind; only the outermost parse
/// entry point (`Document::parse`) attaches a [`Position`] to produce a
/// [`KdlError`]. This mirrors the two-layer error design of the original
/// implementation this crate's grammar is grounded on, where intermediate
/// readers return plain sentinel errors and only the top-level reader wraps
/// them with line/column context.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KdlErrorKind {
    #[error("numeric literal does not match the decimal grammar")]
    BadDecimal,
    #[error("numeric literal does not match the hexadecimal grammar")]
    BadHex,
    #[error("numeric literal does not match the octal grammar")]
    BadOctal,
    #[error("numeric literal does not match the binary grammar")]
    BadBinary,
    #[error("numeric literal is empty")]
    EmptyNumber,
    #[error("underscore separators are only allowed in decimal literals")]
    SeparatorOutsideDecimal,
    #[error("could not parse integer literal")]
    ParseIntegerFailed,
    #[error("could not parse float literal")]
    ParseFloatFailed,

    #[error("expected a quoted string")]
    ExpectedQuotedString,
    #[error("expected a raw string")]
    ExpectedRawString,
    #[error("expected a boolean literal")]
    ExpectedBool,
    #[error("expected a null literal")]
    ExpectedNull,
    #[error("expected a value, found {found:?}")]
    ExpectedValue { found: Option<char> },
    #[error("expected ')' to close a type hint")]
    ExpectedCloseTypeHint,

    #[error("{identifier:?} is not a valid bare identifier")]
    InvalidBareIdentifier { identifier: String },
    #[error("'{found}' is not a valid character in a bare identifier")]
    InvalidCharInBareIdentifier { found: char },
    #[error("'{found}' is not a valid initial character for a bare identifier")]
    InvalidInitialCharInBareIdentifier { found: char },

    #[error("unexpected bare identifier used as an argument")]
    UnexpectedBareIdentifier,
    #[error("unexpected token '{found}' after identifier")]
    UnexpectedTokenAfterIdentifier { found: char },
    #[error("unexpected token '{found}' after value")]
    UnexpectedTokenAfterValue { found: char },

    #[error("unexpected ';' not terminating a node")]
    UnexpectedSemicolon,
    #[error("unexpected top-level '}}'")]
    UnexpectedTopLevelRightBracket,
    #[error("'/-' did not suppress a node, argument, or property")]
    UnexpectedSlashdash,

    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unexpected end of input inside a string literal")]
    UnexpectedEofInsideString,

    #[error("document is not valid UTF-8")]
    InvalidEncoding,

    #[error("invalid syntax: {message}")]
    InvalidSyntax { message: String },
}

/// A parse error, wrapped with the position at which it occurred.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} [{position}]")]
pub struct KdlError {
    pub kind: KdlErrorKind,
    pub position: Position,
}

impl KdlError {
    pub fn new(kind: KdlErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

pub(crate) type KResult<T> = Result<T, KdlErrorKind>;
