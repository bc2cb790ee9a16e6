//! A parser and writer for the KDL document language.
//!
//! ```
//! let doc = kdl_doc::parse_str("greeting \"hello\"\n").unwrap();
//! assert_eq!(doc.nodes()[0].name.as_str(), "greeting");
//! ```

pub use document::{parse, parse_str, Document};
pub use error::{KdlError, KdlErrorKind, Position};
pub use identifier::{Identifier, TypeHint};
pub use node::Node;
pub use value::{Value, ValueKind};

mod chars;
mod cursor;
mod document;
mod error;
mod identifier;
mod node;
mod parser;
mod value;
mod writer;
