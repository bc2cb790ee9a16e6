#![cfg(feature = "serde")]

use kdl_doc::{Document, Node};

#[test]
fn document_round_trips_through_json() {
    let mut doc = Document::new();
    let mut node = Node::new("package");
    node.push_arg("demo").set_prop("version", "1.0.0");
    node.push_child(Node::new("empty"));
    doc.push(node);

    let json = serde_json::to_string(&doc).unwrap();
    let decoded: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, doc);
}

#[test]
fn integers_survive_json_as_arbitrary_precision() {
    let doc = kdl_doc::parse_str("n 99999999999999999999999999999999\n").unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    let decoded: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, doc);
}
