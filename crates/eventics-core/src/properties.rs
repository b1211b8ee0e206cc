//! The normalized property container and its coercion rules.
//!
//! [`NormalizedProperties`] is the backend-transportable representation of
//! an event's properties. Insertion classifies each value against a fixed
//! precedence of rules; values that match no rule are dropped silently.
//! That lossy policy is deliberate and is never reported as an error;
//! callers may depend on partial-property delivery.

use eventics_models::{PropertyMap, PropertyValue};

/// The backend-transportable property set for a single event.
///
/// Built incrementally by inserting super-properties first, then
/// event-specific properties; a same-key insert overwrites the earlier
/// value in place, so event scope wins over global scope while the key
/// keeps its original position. Iteration yields entries in insertion
/// order.
///
/// Property sets are small, so the container is a plain vector with linear
/// key lookup.
#[derive(Debug, Clone, Default)]
pub struct NormalizedProperties {
    entries: Vec<(String, PropertyValue)>,
}

impl NormalizedProperties {
    /// Creates an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `value` and stores it under `key`.
    ///
    /// Classification precedence:
    /// 1. scalar tags (`Bool`, `Byte`, `Char`, `Int`, `Float`, `String`)
    ///    pass through;
    /// 2. a nested `Map` recurses, dropping unsupported inner entries
    ///    per-key;
    /// 3. a `List` is kept only when every element classifies to the one
    ///    tag the first element establishes (a scalar or `Object`);
    /// 4. an opaque `Object` passes through;
    /// 5. everything else (`Null`, a mixed-type list, a list of lists or
    ///    maps) matches no rule and is dropped.
    ///
    /// Returns `true` if the value was stored, `false` if it was dropped.
    /// A drop writes no entry and is not an error.
    pub fn insert(&mut self, key: impl Into<String>, value: PropertyValue) -> bool {
        let Some(value) = coerce(value) else {
            return false;
        };
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
        true
    }

    /// Inserts every entry of a property map.
    pub fn extend(&mut self, properties: PropertyMap) {
        for (key, value) in properties {
            self.insert(key, value);
        }
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no properties are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

/// Equality is map equality: same keys, same values, order ignored.
impl PartialEq for NormalizedProperties {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

fn coerce(value: PropertyValue) -> Option<PropertyValue> {
    match value {
        PropertyValue::Bool(_)
        | PropertyValue::Byte(_)
        | PropertyValue::Char(_)
        | PropertyValue::Int(_)
        | PropertyValue::Float(_)
        | PropertyValue::String(_)
        | PropertyValue::Object(_) => Some(value),
        PropertyValue::Map(map) => Some(PropertyValue::Map(coerce_map(map))),
        PropertyValue::List(items) => coerce_list(items),
        PropertyValue::Null => None,
    }
}

fn coerce_map(map: PropertyMap) -> PropertyMap {
    map.into_iter()
        .filter_map(|(key, value)| coerce(value).map(|value| (key, value)))
        .collect()
}

/// A list survives only when homogeneous: the first element establishes the
/// tag, and every element must carry it. An empty list trivially satisfies
/// the first rule and is kept.
fn coerce_list(items: Vec<PropertyValue>) -> Option<PropertyValue> {
    let Some(first) = items.first() else {
        return Some(PropertyValue::List(items));
    };
    if !is_supported_element(first) {
        return None;
    }
    let tag = std::mem::discriminant(first);
    if items.iter().all(|item| std::mem::discriminant(item) == tag) {
        Some(PropertyValue::List(items))
    } else {
        None
    }
}

fn is_supported_element(value: &PropertyValue) -> bool {
    matches!(
        value,
        PropertyValue::Bool(_)
            | PropertyValue::Byte(_)
            | PropertyValue::Char(_)
            | PropertyValue::Int(_)
            | PropertyValue::Float(_)
            | PropertyValue::String(_)
            | PropertyValue::Object(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventics_models::put;

    #[test]
    fn test_scalar_roundtrip() {
        let mut props = NormalizedProperties::new();

        assert!(props.insert("bool", PropertyValue::Bool(true)));
        assert!(props.insert("byte", PropertyValue::Byte(7)));
        assert!(props.insert("char", PropertyValue::Char('x')));
        assert!(props.insert("int", PropertyValue::Int(42)));
        assert!(props.insert("float", PropertyValue::Float(1.5)));
        assert!(props.insert("string", PropertyValue::String("s".into())));

        assert_eq!(props.get("bool"), Some(&PropertyValue::Bool(true)));
        assert_eq!(props.get("byte"), Some(&PropertyValue::Byte(7)));
        assert_eq!(props.get("char"), Some(&PropertyValue::Char('x')));
        assert_eq!(props.get("int"), Some(&PropertyValue::Int(42)));
        assert_eq!(props.get("float"), Some(&PropertyValue::Float(1.5)));
        assert_eq!(props.get("string"), Some(&PropertyValue::String("s".into())));
        assert_eq!(props.len(), 6);
    }

    #[test]
    fn test_object_roundtrip() {
        let mut props = NormalizedProperties::new();
        let object = PropertyValue::Object(serde_json::json!({"a": 1}));

        assert!(props.insert("obj", object.clone()));
        assert_eq!(props.get("obj"), Some(&object));
    }

    #[test]
    fn test_null_dropped() {
        let mut props = NormalizedProperties::new();

        assert!(!props.insert("missing", PropertyValue::Null));
        assert!(!props.contains_key("missing"));
        assert!(props.is_empty());
    }

    #[test]
    fn test_homogeneous_lists_kept() {
        let mut props = NormalizedProperties::new();

        assert!(props.insert(
            "strings",
            PropertyValue::from(vec!["a", "b", "c"]),
        ));
        assert!(props.insert(
            "ints",
            PropertyValue::from(vec![1i64, 2, 3]),
        ));

        assert_eq!(props.get("strings").unwrap().as_list().unwrap().len(), 3);
        assert_eq!(props.get("ints").unwrap().as_list().unwrap().len(), 3);
    }

    #[test]
    fn test_mixed_list_dropped() {
        let mut props = NormalizedProperties::new();
        let mixed = PropertyValue::List(vec![
            PropertyValue::String("a".into()),
            PropertyValue::Int(1),
        ]);

        assert!(!props.insert("mixed", mixed));
        assert!(!props.contains_key("mixed"));
    }

    #[test]
    fn test_empty_list_kept() {
        let mut props = NormalizedProperties::new();

        assert!(props.insert("empty", PropertyValue::List(Vec::new())));
        assert_eq!(props.get("empty").unwrap().as_list(), Some(&[][..]));
    }

    #[test]
    fn test_list_of_lists_dropped() {
        let mut props = NormalizedProperties::new();
        let nested = PropertyValue::List(vec![PropertyValue::List(vec![PropertyValue::Int(1)])]);

        assert!(!props.insert("nested", nested));
    }

    #[test]
    fn test_nested_map_cleaned_recursively() {
        let mut inner = PropertyMap::new();
        put(&mut inner, "kept", 1i64);
        inner.insert("dropped".to_string(), PropertyValue::Null);

        let mut props = NormalizedProperties::new();
        assert!(props.insert("nested", PropertyValue::Map(inner)));

        let stored = props.get("nested").unwrap().as_map().unwrap();
        assert_eq!(stored.get("kept"), Some(&PropertyValue::Int(1)));
        assert!(!stored.contains_key("dropped"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut props = NormalizedProperties::new();
        props.insert("first", PropertyValue::Int(1));
        props.insert("second", PropertyValue::Int(2));
        props.insert("first", PropertyValue::Int(10));

        assert_eq!(props.get("first"), Some(&PropertyValue::Int(10)));
        assert_eq!(props.len(), 2);
        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(keys, vec!["first", "second"]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut props = NormalizedProperties::new();
        props.insert("c", PropertyValue::Int(3));
        props.insert("a", PropertyValue::Int(1));
        props.insert("b", PropertyValue::Int(2));

        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut left = NormalizedProperties::new();
        left.insert("a", PropertyValue::Int(1));
        left.insert("b", PropertyValue::Int(2));

        let mut right = NormalizedProperties::new();
        right.insert("b", PropertyValue::Int(2));
        right.insert("a", PropertyValue::Int(1));

        assert_eq!(left, right);

        right.insert("a", PropertyValue::Int(9));
        assert_ne!(left, right);
    }

    #[test]
    fn test_extend_from_map() {
        let mut map = PropertyMap::new();
        put(&mut map, "kept", "v");
        map.insert("dropped".to_string(), PropertyValue::Null);

        let mut props = NormalizedProperties::new();
        props.extend(map);

        assert_eq!(props.len(), 1);
        assert!(props.contains_key("kept"));
    }
}
