//! The `Document` type: an ordered sequence of top-level nodes, plus the
//! crate's public parse/write entry points.

use crate::error::KdlError;
use crate::node::Node;
use crate::parser;
use crate::writer;

/// An ordered sequence of top-level nodes. There is no implicit root node.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn push(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Parse a byte buffer into a document. The buffer must be valid UTF-8.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = bytes.len()))]
    pub fn parse(bytes: &[u8]) -> Result<Self, KdlError> {
        match parser::parse_bytes(bytes) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                tracing::debug!(%err, "document parse failed");
                Err(err)
            }
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn parse_str(text: &str) -> Result<Self, KdlError> {
        match parser::parse_str(text) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                tracing::debug!(%err, "document parse failed");
                Err(err)
            }
        }
    }

    /// Serialize this document to its normalized textual form.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = self.nodes.len()))]
    pub fn write(&self) -> String {
        writer::write_document(self)
    }

    pub fn write_bytes(&self) -> Vec<u8> {
        self.write().into_bytes()
    }

    pub fn write_to(&self, sink: &mut impl std::fmt::Write) -> std::fmt::Result {
        writer::write_document_to(self, sink)
    }
}

/// Parse a byte buffer into a document. Equivalent to [`Document::parse`].
pub fn parse(bytes: &[u8]) -> Result<Document, KdlError> {
    Document::parse(bytes)
}

/// Parse a UTF-8 string into a document. Equivalent to [`Document::parse_str`].
pub fn parse_str(text: &str) -> Result<Document, KdlError> {
    Document::parse_str(text)
}
