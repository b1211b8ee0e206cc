//! Typed property values.
//!
//! Every event property is a [`PropertyValue`]: a closed union over the
//! shapes an analytics backend can transport. Classification into this
//! union happens once, at the API boundary, through the `From` conversions
//! below; downstream code matches on variants instead of inspecting types.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A string-keyed map of property values.
///
/// This is the shape callers hand to the manager: event-specific properties,
/// super-properties, and nested property groups all use it.
pub type PropertyMap = HashMap<String, PropertyValue>;

/// A single event property value.
///
/// The union covers primitives, homogeneous lists, nested maps, and opaque
/// serializable objects. Values outside this vocabulary cannot be
/// constructed; values inside it may still be dropped during normalization
/// (mixed-type lists, nulls) per the coercion rules in `eventics-core`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Absence of a value. Carried in the union but not transportable;
    /// normalization drops it.
    Null,

    /// Boolean true or false.
    Bool(bool),

    /// A single byte.
    Byte(u8),

    /// A single character.
    Char(char),

    /// 64-bit signed integer. All integer widths coerce onto this.
    Int(i64),

    /// 64-bit IEEE-754 floating point. `f32` widens onto this.
    Float(f64),

    /// UTF-8 string.
    String(String),

    /// Ordered list of values. Only homogeneous primitive lists survive
    /// normalization.
    List(Vec<PropertyValue>),

    /// Nested property map.
    Map(PropertyMap),

    /// Opaque serializable object.
    Object(serde_json::Value),
}

impl PropertyValue {
    /// Returns the variant name as a string (for diagnostics).
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "Null",
            PropertyValue::Bool(_) => "Bool",
            PropertyValue::Byte(_) => "Byte",
            PropertyValue::Char(_) => "Char",
            PropertyValue::Int(_) => "Int",
            PropertyValue::Float(_) => "Float",
            PropertyValue::String(_) => "String",
            PropertyValue::List(_) => "List",
            PropertyValue::Map(_) => "Map",
            PropertyValue::Object(_) => "Object",
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as byte.
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            PropertyValue::Byte(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as char.
    pub fn as_char(&self) -> Option<char> {
        match self {
            PropertyValue::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as list slice.
    pub fn as_list(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// Try to get as nested map reference.
    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            PropertyValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Try to get as opaque object reference.
    pub fn as_object(&self) -> Option<&serde_json::Value> {
        match self {
            PropertyValue::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "null"),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Byte(b) => write!(f, "{}", b),
            PropertyValue::Char(c) => write!(f, "{}", c),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::String(s) => write!(f, "{}", s),
            PropertyValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            PropertyValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            PropertyValue::Object(o) => write!(f, "{}", o),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<u8> for PropertyValue {
    fn from(value: u8) -> Self {
        PropertyValue::Byte(value)
    }
}

impl From<char> for PropertyValue {
    fn from(value: char) -> Self {
        PropertyValue::Char(value)
    }
}

impl From<i16> for PropertyValue {
    fn from(value: i16) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<u16> for PropertyValue {
    fn from(value: u16) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        PropertyValue::Float(value.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        PropertyValue::Object(value)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(values: Vec<T>) -> Self {
        PropertyValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => PropertyValue::Null,
        }
    }
}

impl From<PropertyMap> for PropertyValue {
    fn from(map: PropertyMap) -> Self {
        PropertyValue::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(PropertyValue::from(true), PropertyValue::Bool(true));
        assert_eq!(PropertyValue::from(7u8), PropertyValue::Byte(7));
        assert_eq!(PropertyValue::from('x'), PropertyValue::Char('x'));
        assert_eq!(PropertyValue::from(42i32), PropertyValue::Int(42));
        assert_eq!(PropertyValue::from(42i64), PropertyValue::Int(42));
        assert_eq!(PropertyValue::from(1.5f64), PropertyValue::Float(1.5));
        assert_eq!(
            PropertyValue::from("hello"),
            PropertyValue::String("hello".to_string())
        );
    }

    #[test]
    fn test_from_f32_widens() {
        let value = PropertyValue::from(2.5f32);
        assert_eq!(value.as_float(), Some(2.5));
    }

    #[test]
    fn test_from_vec() {
        let value = PropertyValue::from(vec!["a", "b"]);
        let list = value.as_list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].as_str(), Some("a"));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(PropertyValue::from(Some(1i64)), PropertyValue::Int(1));
        assert!(PropertyValue::from(None::<i64>).is_null());
    }

    #[test]
    fn test_from_json_value() {
        let value = PropertyValue::from(serde_json::json!({"nested": true}));
        assert!(value.as_object().is_some());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(PropertyValue::Null.type_name(), "Null");
        assert_eq!(PropertyValue::Int(1).type_name(), "Int");
        assert_eq!(PropertyValue::List(vec![]).type_name(), "List");
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let value = PropertyValue::Int(5);
        assert!(value.as_str().is_none());
        assert!(value.as_bool().is_none());
        assert!(value.as_float().is_none());
        assert_eq!(value.as_int(), Some(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(PropertyValue::Null.to_string(), "null");
        assert_eq!(PropertyValue::Bool(true).to_string(), "true");
        assert_eq!(PropertyValue::Int(10).to_string(), "10");
        assert_eq!(PropertyValue::String("w".into()).to_string(), "w");
        assert_eq!(
            PropertyValue::List(vec![PropertyValue::Int(1), PropertyValue::Int(2)]).to_string(),
            "[1, 2]"
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let value = PropertyValue::List(vec![
            PropertyValue::Int(1),
            PropertyValue::Int(2),
            PropertyValue::Int(3),
        ]);

        let json = serde_json::to_string(&value).unwrap();
        let deserialized: PropertyValue = serde_json::from_str(&json).unwrap();

        assert_eq!(value, deserialized);
    }
}
