//! Parsing entry points: validate UTF-8 (for the byte-slice entry point),
//! then drive the document-level node list reader over a fresh cursor.

mod ident;
mod node;
mod number;
mod strings;
mod trivia;
mod value;

use crate::chars::is_newline;
use crate::cursor::Cursor;
use crate::document::Document;
use crate::error::{KdlError, KdlErrorKind, Position};

pub(crate) fn parse_bytes(bytes: &[u8]) -> Result<Document, KdlError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        let position = position_of_byte(bytes, e.valid_up_to());
        KdlError::new(KdlErrorKind::InvalidEncoding, position)
    })?;
    parse_str(text)
}

/// Line/column of the byte that broke UTF-8 validation, computed over the
/// valid prefix the standard decoder already confirmed.
fn position_of_byte(bytes: &[u8], valid_up_to: usize) -> Position {
    let prefix = std::str::from_utf8(&bytes[..valid_up_to]).expect("prefix validated by caller");
    let (mut line, mut column) = (1usize, 0usize);
    let mut chars = prefix.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' && chars.peek() == Some(&'\n') {
            continue;
        }
        if is_newline(ch) {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    Position::new(line, column)
}

pub(crate) fn parse_str(text: &str) -> Result<Document, KdlError> {
    let mut cur = Cursor::new(text);
    match node::read_nodes(&mut cur) {
        Ok(nodes) => Ok(Document::from_nodes(nodes)),
        Err(kind) => Err(KdlError::new(kind, cur.position())),
    }
}
