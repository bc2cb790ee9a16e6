
use harness::parse;
use test_case::test_case;

#[test_case("4", "4" ; "decimal")]
#[test_case("0x1F", "31" ; "hex")]
#[test_case("0o17", "15" ; "octal")]
#[test_case("0b101", "5" ; "binary")]
#[test_case("1_000_000", "1000000" ; "decimal with separators")]
#[test_case("0xff_ff", "65535" ; "hex with separators")]
fn parses_integer_literal(literal: &str, expected_decimal: &str) {
    let doc = parse(&format!("n {literal}\n"));
    assert_eq!(doc.nodes()[0].args[0].as_integer().unwrap().to_string(), expected_decimal);
}

#[test_case("1.5")]
#[test_case("-0.25")]
#[test_case("3e-1")]
fn parses_float_literal(literal: &str) {
    let doc = parse(&format!("n {literal}\n"));
    assert!(doc.nodes()[0].args[0].as_float().is_some());
}

#[test]
fn integers_and_floats_with_equal_value_are_formatted_identically() {
    let a = parse("n 0b100\n").write();
    let b = parse("n 4\n").write();
    assert_eq!(a, b);
}

#[test]
fn integer_round_trips_through_large_trailing_zero_run() {
    let doc = parse("n 4000000\n");
    let written = doc.write();
    assert_eq!(written, "n 4E+6\n");
    let reparsed = parse(&written);
    assert_eq!(reparsed, doc);
}

#[test]
fn float_is_never_written_without_a_dot_or_exponent_marker() {
    let doc = parse("n 1.0\n");
    let written = doc.write();
    assert!(written.contains('.') || written.contains('E'));
}

#[test]
fn malformed_hex_literal_is_rejected() {
    let err = kdl_doc::parse_str("n 0xZZ\n").unwrap_err();
    assert_eq!(err.kind, kdl_doc::KdlErrorKind::BadHex);
}

#[test]
fn lone_sign_with_no_digits_is_a_bad_decimal() {
    let err = kdl_doc::parse_str("n -\n").unwrap_err();
    assert_eq!(err.kind, kdl_doc::KdlErrorKind::BadDecimal);
}

#[test]
fn a_dot_is_never_legal_in_a_non_decimal_base() {
    let err = kdl_doc::parse_str("n 0x1.5\n").unwrap_err();
    assert_eq!(err.kind, kdl_doc::KdlErrorKind::BadHex);
}

#[test]
fn a_large_float_round_trips_as_a_float_not_an_integer() {
    let doc = parse("n 1.0e10\n");
    assert!(doc.nodes()[0].args[0].as_float().is_some());

    let written = doc.write();
    assert_eq!(written, "n 1.0E+10\n");

    let reparsed = parse(&written);
    assert_eq!(reparsed, doc);
    assert!(reparsed.nodes()[0].args[0].as_float().is_some());
}

#[test]
fn signed_arguments_parse_as_numbers_not_bare_identifiers() {
    let doc = parse("n +2 -6 -0.25 -1.1e-2\n");
    let args = &doc.nodes()[0].args;
    assert_eq!(args[0].as_integer().unwrap().to_string(), "2");
    assert_eq!(args[1].as_integer().unwrap().to_string(), "-6");
    assert!((args[2].as_float().unwrap() - (-0.25)).abs() < 1e-12);
    assert!((args[3].as_float().unwrap() - (-0.011)).abs() < 1e-12);
}
