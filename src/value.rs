//! The `Value` type: the tagged union of the five literal kinds a KDL
//! argument or property value can hold, plus its optional type hint.

use num_bigint::BigInt;

use crate::identifier::TypeHint;

/// The five literal kinds a KDL value can carry.
///
/// `Integer` is arbitrary precision ([`BigInt`]) since the grammar places no
/// bound on the digits of a decimal, hex, octal, or binary literal. `Float`
/// is a plain `f64`, whose 53-bit mantissa already satisfies the grammar's
/// minimum precision requirement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Null,
    Bool(bool),
    String(String),
    Integer(BigInt),
    Float(f64),
}

/// A single value: its literal payload plus an optional type hint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Value {
    pub kind: ValueKind,
    pub type_hint: TypeHint,
}

impl Value {
    pub fn new(kind: ValueKind) -> Self {
        Self { kind, type_hint: TypeHint::Absent }
    }

    pub fn with_type_hint(mut self, hint: impl Into<TypeHint>) -> Self {
        self.type_hint = hint.into();
        self
    }

    pub fn null() -> Self {
        Self::new(ValueKind::Null)
    }

    pub fn bool(b: bool) -> Self {
        Self::new(ValueKind::Bool(b))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::new(ValueKind::String(s.into()))
    }

    pub fn integer(i: impl Into<BigInt>) -> Self {
        Self::new(ValueKind::Integer(i.into()))
    }

    pub fn float(f: f64) -> Self {
        Self::new(ValueKind::Float(f))
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind, ValueKind::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match &self.kind {
            ValueKind::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match &self.kind {
            ValueKind::Integer(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match &self.kind {
            ValueKind::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::integer(BigInt::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::float(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn constructors_round_trip_accessors() {
        assert!(Value::null().is_null());
        assert_eq!(Value::bool(true).as_bool(), Some(true));
        assert_eq!(Value::string("hi").as_str(), Some("hi"));
        assert_eq!(Value::integer(42i64).as_integer(), Some(&BigInt::from(42)));
        assert_eq!(Value::float(1.5).as_float(), Some(1.5));
    }

    #[test]
    fn type_hint_attaches() {
        let v = Value::integer(1i64).with_type_hint(crate::identifier::Identifier::new("u8"));
        assert!(v.type_hint.is_present());
    }
}
