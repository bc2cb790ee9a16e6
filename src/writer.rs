//! Serializes a [`Document`] back to its normalized textual form: four
//! spaces per indent level, lexicographically ordered properties (free from
//! the `BTreeMap` storage), and the numeric/string/identifier formatting
//! rules of the grammar.

use std::fmt::Write;

use num_bigint::BigInt;

use crate::document::Document;
use crate::identifier::{Identifier, TypeHint};
use crate::node::Node;
use crate::value::{Value, ValueKind};

const INDENT_UNIT: &str = "    ";

pub(crate) fn write_document(doc: &Document) -> String {
    let mut out = String::new();
    write_document_to(doc, &mut out).expect("writing to a String never fails");
    out
}

pub(crate) fn write_document_to(doc: &Document, sink: &mut impl Write) -> std::fmt::Result {
    for node in doc.nodes() {
        write_node(sink, node, 0)?;
        sink.write_char('\n')?;
    }
    Ok(())
}

fn write_node(sink: &mut impl Write, node: &Node, depth: usize) -> std::fmt::Result {
    for _ in 0..depth {
        sink.write_str(INDENT_UNIT)?;
    }

    write_type_hint(sink, &node.type_hint)?;
    write_identifier(sink, &node.name)?;

    if !node.args.is_empty() {
        sink.write_char(' ')?;
        write_args(sink, &node.args)?;
    }

    if !node.props.is_empty() {
        sink.write_char(' ')?;
        write_props(sink, &node.props)?;
    }

    if !node.children.is_empty() {
        sink.write_str(" {\n")?;
        for child in &node.children {
            write_node(sink, child, depth + 1)?;
            sink.write_char('\n')?;
        }
        for _ in 0..depth {
            sink.write_str(INDENT_UNIT)?;
        }
        sink.write_char('}')?;
    }

    Ok(())
}

fn write_args(sink: &mut impl Write, args: &[Value]) -> std::fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            sink.write_char(' ')?;
        }
        write_value(sink, arg)?;
    }
    Ok(())
}

fn write_props(sink: &mut impl Write, props: &std::collections::BTreeMap<Identifier, Value>) -> std::fmt::Result {
    for (i, (key, value)) in props.iter().enumerate() {
        if i > 0 {
            sink.write_char(' ')?;
        }
        write_identifier(sink, key)?;
        sink.write_char('=')?;
        write_value(sink, value)?;
    }
    Ok(())
}

fn write_value(sink: &mut impl Write, value: &Value) -> std::fmt::Result {
    write_type_hint(sink, &value.type_hint)?;
    match &value.kind {
        ValueKind::Null => sink.write_str("null"),
        ValueKind::Bool(true) => sink.write_str("true"),
        ValueKind::Bool(false) => sink.write_str("false"),
        ValueKind::String(s) => write_string(sink, s),
        ValueKind::Integer(i) => write_integer(sink, i),
        ValueKind::Float(f) => write_float(sink, *f),
    }
}

fn write_type_hint(sink: &mut impl Write, hint: &TypeHint) -> std::fmt::Result {
    if let TypeHint::Present(id) = hint {
        sink.write_char('(')?;
        write_identifier(sink, id)?;
        sink.write_char(')')?;
    }
    Ok(())
}

fn write_identifier(sink: &mut impl Write, id: &Identifier) -> std::fmt::Result {
    if id.is_valid_bare() {
        sink.write_str(id.as_str())
    } else {
        write_string(sink, id.as_str())
    }
}

fn write_string(sink: &mut impl Write, s: &str) -> std::fmt::Result {
    sink.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '\\' => sink.write_str("\\\\")?,
            '"' => sink.write_str("\\\"")?,
            '\n' => sink.write_str("\\n")?,
            '\r' => sink.write_str("\\r")?,
            '\t' => sink.write_str("\\t")?,
            '\u{0008}' => sink.write_str("\\b")?,
            '\u{000C}' => sink.write_str("\\f")?,
            other => sink.write_char(other)?,
        }
    }
    sink.write_char('"')
}

/// Decimal with large trailing-zero runs collapsed to scientific notation,
/// since a literal with six or more trailing zeros is more legible that way.
fn write_integer(sink: &mut impl Write, i: &BigInt) -> std::fmt::Result {
    let text = i.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    let trailing_zeros = digits.chars().rev().take_while(|c| *c == '0').count();
    if digits != "0" && trailing_zeros >= 6 {
        let mantissa = &digits[..digits.len() - trailing_zeros];
        return write!(sink, "{sign}{mantissa}E+{trailing_zeros}");
    }

    sink.write_str(sign)?;
    sink.write_str(digits)
}

/// `0.0` for zero, `Inf`/`-Inf` for infinities, a plain decimal with
/// trailing zeros trimmed for magnitudes in `(0.1, 1e9)`, scientific
/// notation otherwise. Always contains `.` or `E` so a float is never
/// confused for an integer on re-parse.
fn write_float(sink: &mut impl Write, f: f64) -> std::fmt::Result {
    if f == 0.0 {
        return sink.write_str("0.0");
    }
    if f.is_infinite() {
        return sink.write_str(if f < 0.0 { "-Inf" } else { "Inf" });
    }
    if f.is_nan() {
        return sink.write_str("NaN");
    }

    let magnitude = f.abs();
    if magnitude > 0.1 && magnitude < 1.0e9 {
        let mut text = format!("{f:.14}");
        if text.contains('.') {
            while text.ends_with('0') {
                text.pop();
            }
            if text.ends_with('.') {
                text.push('0');
            }
        }
        return sink.write_str(&text);
    }

    let text = format!("{f:E}");
    // Rust renders scientific notation as `1.5e9`, and collapses an integral
    // mantissa to bare digits (`1e10`); the grammar wants an uppercase `E`,
    // an explicit `+` on non-negative exponents, and a mantissa that always
    // carries a `.` so the value re-parses as a Float rather than an
    // Integer (see number.rs's non-negative-exponent integer padding rule).
    let idx = text.find('E').expect("Rust's {:E} formatter always emits an 'E'");
    let (mantissa, exponent) = text.split_at(idx);
    let exponent = &exponent[1..];
    let mantissa = if mantissa.contains('.') { mantissa.to_string() } else { format!("{mantissa}.0") };
    let text = if exponent.starts_with('-') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}E+{exponent}")
    };
    sink.write_str(&text)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::Node;
    use num_bigint::BigInt;

    fn write(node: Node) -> String {
        let mut doc = Document::new();
        doc.push(node);
        doc.write()
    }

    #[test]
    fn writes_a_bare_node_with_no_content() {
        assert_eq!(write(Node::new("name")), "name\n");
    }

    #[test]
    fn quotes_identifiers_that_are_not_bare() {
        let node = Node::new("has space");
        assert_eq!(write(node), "\"has space\"\n");
    }

    #[test]
    fn sorts_properties_lexicographically() {
        let mut node = Node::new("n");
        node.set_prop("zeta", 1i64).set_prop("alpha", 2i64);
        assert_eq!(write(node), "n alpha=2 zeta=1\n");
    }

    #[test]
    fn integer_with_long_trailing_zero_run_uses_scientific_form() {
        let mut sink = String::new();
        write_integer(&mut sink, &BigInt::from(4_000_000i64)).unwrap();
        assert_eq!(sink, "4E+6");
    }

    #[test]
    fn small_trailing_zero_runs_stay_plain() {
        let mut sink = String::new();
        write_integer(&mut sink, &BigInt::from(4000i64)).unwrap();
        assert_eq!(sink, "4000");
    }

    #[test]
    fn float_formatting_cases() {
        let mut sink = String::new();
        write_float(&mut sink, 0.0).unwrap();
        assert_eq!(sink, "0.0");

        let mut sink = String::new();
        write_float(&mut sink, f64::INFINITY).unwrap();
        assert_eq!(sink, "Inf");

        let mut sink = String::new();
        write_float(&mut sink, 1.5).unwrap();
        assert_eq!(sink, "1.5");
    }

    #[test]
    fn scientific_notation_mantissa_always_carries_a_decimal_point() {
        let mut sink = String::new();
        write_float(&mut sink, 1e10).unwrap();
        assert_eq!(sink, "1.0E+10");

        let mut sink = String::new();
        write_float(&mut sink, 2e9).unwrap();
        assert_eq!(sink, "2.0E+9");
    }

    #[test]
    fn children_block_indents_one_level() {
        let mut parent = Node::new("parent");
        parent.push_child(Node::new("child"));
        assert_eq!(write(parent), "parent {\n    child\n}\n");
    }

    #[test]
    fn string_escapes_round_trip() {
        let mut sink = String::new();
        write_string(&mut sink, "a\nb\\c\"d").unwrap();
        assert_eq!(sink, "\"a\\nb\\\\c\\\"d\"");
    }
}
