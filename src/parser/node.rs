//! The node parser: reads a node head (type hint + name), then its body of
//! arguments, properties, and an optional children block, honoring
//! slash-dash suppression at node, argument, and property granularity.

use crate::chars::{is_newline, is_value_terminator};
use crate::cursor::Cursor;
use crate::error::{KResult, KdlErrorKind};
use crate::node::Node;
use crate::parser::ident::{read_identifier, read_maybe_type_hint, StopMode};
use crate::parser::trivia::{skip_to_newline, skip_trivia};
use crate::parser::value::read_value;
use crate::value::Value;

/// Reads a sequence of nodes until end of input at depth 0, or a `}` that
/// closes the enclosing children block at depth > 0 (consumed here).
pub(crate) fn read_nodes(cur: &mut Cursor) -> KResult<Vec<Node>> {
    let mut nodes = Vec::new();

    loop {
        loop {
            skip_trivia(cur)?;

            if cur.is_eof() {
                if cur.depth() == 0 {
                    return Ok(nodes);
                }
                return Err(KdlErrorKind::UnexpectedEof);
            }

            let ch = cur.peek_rune()?;
            if !is_newline(ch) {
                if ch == ';' {
                    return Err(KdlErrorKind::UnexpectedSemicolon);
                }
                if ch == '}' {
                    if cur.depth() == 0 {
                        return Err(KdlErrorKind::UnexpectedTopLevelRightBracket);
                    }
                    cur.consume_bytes(1);
                    return Ok(nodes);
                }
                break;
            }

            skip_to_newline(cur, true)?;
        }

        let slashdash = cur.starts_with("/-");
        if slashdash {
            cur.consume_bytes(2);
        }

        skip_trivia(cur)?;
        if cur.is_eof() {
            return Err(KdlErrorKind::UnexpectedSlashdash);
        }

        let node = read_node(cur)?;
        if !slashdash {
            nodes.push(node);
        }
    }
}

pub(crate) fn read_node(cur: &mut Cursor) -> KResult<Node> {
    let type_hint = read_maybe_type_hint(cur)?;
    let (name, _) = read_identifier(cur, StopMode::Semicolon)?;

    let mut node = Node::new(name);
    node.type_hint = type_hint;

    loop {
        skip_trivia(cur)?;

        if cur.is_eof() {
            return Ok(node);
        }

        let slashdash = cur.starts_with("/-");
        if slashdash {
            cur.consume_bytes(2);
        }

        skip_trivia(cur)?;

        if cur.is_eof() {
            if slashdash {
                return Err(KdlErrorKind::UnexpectedSlashdash);
            }
            return Ok(node);
        }

        let ch = cur.peek_rune()?;

        if is_newline(ch) {
            cur.consume_rune()?;
            if slashdash {
                return Err(KdlErrorKind::UnexpectedSlashdash);
            }
            return Ok(node);
        } else if ch == ';' {
            cur.consume_bytes(1);
            if slashdash {
                return Err(KdlErrorKind::UnexpectedSlashdash);
            }
            return Ok(node);
        } else if ch == '}' {
            if slashdash {
                return Err(KdlErrorKind::UnexpectedSlashdash);
            }
            return Ok(node);
        } else if ch == '{' {
            cur.consume_bytes(1);
            cur.enter_children();
            let children = read_nodes(cur)?;
            cur.exit_children();
            if !slashdash {
                for child in children {
                    node.push_child(child);
                }
            }
        } else {
            read_arg_or_prop(cur, &mut node, slashdash)?;
        }
    }
}

/// Reads a single argument or property and, unless `discard` is set, adds
/// it to `dest`.
fn read_arg_or_prop(cur: &mut Cursor, dest: &mut Node, discard: bool) -> KResult<()> {
    let hint = read_maybe_type_hint(cur)?;

    if hint.is_absent() {
        let checkpoint = cur.checkpoint();
        if let Ok((ident, quoted)) = read_identifier(cur, StopMode::Equals) {
            if cur.is_eof() {
                if quoted {
                    if !discard {
                        dest.push_arg(Value::string(ident.into_string()));
                    }
                    return Ok(());
                }
                return Err(KdlErrorKind::UnexpectedBareIdentifier);
            }

            let ch = cur.peek_rune()?;
            if is_value_terminator(ch) {
                if quoted {
                    if !discard {
                        dest.push_arg(Value::string(ident.into_string()));
                    }
                    return Ok(());
                }
                return Err(KdlErrorKind::UnexpectedBareIdentifier);
            } else if ch == '=' {
                cur.consume_bytes(1);
                let value = read_value(cur)?;
                if !discard {
                    dest.set_prop(ident, value);
                }
                return Ok(());
            }
            return Err(KdlErrorKind::UnexpectedTokenAfterIdentifier { found: ch });
        }

        cur.rewind(checkpoint);
    }

    let mut value = read_value(cur)?;
    value.type_hint = hint;

    if cur.is_eof() {
        if !discard {
            dest.push_arg(value);
        }
        return Ok(());
    }

    let ch = cur.peek_rune()?;
    if is_value_terminator(ch) {
        if !discard {
            dest.push_arg(value);
        }
        return Ok(());
    }

    Err(KdlErrorKind::UnexpectedTokenAfterValue { found: ch })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::identifier::Identifier;

    fn parse(s: &str) -> Vec<Node> {
        let mut cur = Cursor::new(s);
        read_nodes(&mut cur).unwrap()
    }

    #[test]
    fn reads_a_flat_node_with_args_and_props() {
        let nodes = parse("person \"Alice\" age=30\n");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, Identifier::new("person"));
        assert_eq!(nodes[0].args.len(), 1);
        assert_eq!(nodes[0].get_prop("age").unwrap().as_integer().unwrap().to_string(), "30");
    }

    #[test]
    fn reads_nested_children() {
        let nodes = parse("parent {\n    child1\n    child2\n}\n");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].children.len(), 2);
    }

    #[test]
    fn bare_identifier_as_argument_is_rejected() {
        let mut cur = Cursor::new("node bareword\n");
        assert_eq!(read_nodes(&mut cur), Err(KdlErrorKind::UnexpectedBareIdentifier));
    }

    #[test]
    fn slashdash_suppresses_node_argument_and_child() {
        let nodes = parse("node1 /-\"skip-arg\" \"keep\"\n/-node2 \"gone\"\nnode3 { /-child1; child2 }\n");
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].args.len(), 1);
        assert_eq!(nodes[0].args[0].as_str(), Some("keep"));
        assert_eq!(nodes[1].children.len(), 1);
        assert_eq!(nodes[1].children[0].name, Identifier::new("child2"));
    }

    #[test]
    fn top_level_right_bracket_is_an_error() {
        let mut cur = Cursor::new("}");
        assert_eq!(read_nodes(&mut cur), Err(KdlErrorKind::UnexpectedTopLevelRightBracket));
    }

    #[test]
    fn semicolon_before_a_node_name_is_an_error() {
        let mut cur = Cursor::new(";node\n");
        assert_eq!(read_nodes(&mut cur), Err(KdlErrorKind::UnexpectedSemicolon));
    }

    #[test]
    fn last_property_value_wins() {
        let nodes = parse("الطاب الطاب=1 الطاب=2\n");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, Identifier::new("الطاب"));
        assert_eq!(nodes[0].props.len(), 1);
        assert_eq!(
            nodes[0].get_prop("الطاب").unwrap().as_integer().unwrap().to_string(),
            "2"
        );
    }
}
