//! The format-neutral intermediate document.
//!
//! [`Document`] is a string-keyed mapping whose values are the sum type
//! [`Value`] = {null, bool, number, string, sequence, mapping}. Both decoders
//! produce it and both encoders consume it, so neither side knows which
//! format the other speaks.
//!
//! Numbers keep their kind: signed integers, unsigned integers above
//! `i64::MAX`, and floats (including YAML's `.inf` and `.nan`) are separate
//! variants, so `1` stays `1` and `1.0` stays `1.0` across a conversion.
//! Keys are held sorted, so output is deterministic for a given document.

use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

/// A string-keyed mapping of values.
pub type Mapping = BTreeMap<String, Value>;

/// A decoded value of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// Any integer that fits in `i64`.
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    /// May be non-finite when decoded from YAML.
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// The first non-finite float found in a depth-first walk, if any.
    pub fn first_non_finite(&self) -> Option<f64> {
        match self {
            Value::Float(f) if !f.is_finite() => Some(*f),
            Value::Sequence(seq) => seq.iter().find_map(Value::first_non_finite),
            Value::Mapping(map) => map.values().find_map(Value::first_non_finite),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Unsigned(u) => serializer.serialize_u64(*u),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(seq) => seq.serialize(serializer),
            Value::Mapping(map) => map.serialize(serializer),
        }
    }
}

// ── Conversions from decoder trees ───────────────────────────────────────

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as J;
        match v {
            J::Null => Value::Null,
            J::Bool(b) => Value::Bool(b),
            J::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Unsigned(u)
                } else {
                    n.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            J::String(s) => Value::String(s),
            J::Array(seq) => Value::Sequence(seq.into_iter().map(Value::from).collect()),
            J::Object(map) => {
                Value::Mapping(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Tags are dropped and the tagged value kept. Scalar mapping keys are
/// rendered as strings; sequence or mapping keys are an error.
///
/// Merge keys are not applied here; call `apply_merge` first.
impl TryFrom<serde_yaml::Value> for Value {
    type Error = String;

    fn try_from(v: serde_yaml::Value) -> Result<Self, Self::Error> {
        use serde_yaml::Value as Y;
        Ok(match v {
            Y::Null => Value::Null,
            Y::Bool(b) => Value::Bool(b),
            Y::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Unsigned(u)
                } else {
                    n.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            Y::String(s) => Value::String(s),
            Y::Sequence(seq) => Value::Sequence(
                seq.into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Y::Mapping(map) => {
                let mut out = Mapping::new();
                for (k, v) in map {
                    out.insert(yaml_key(k)?, Value::try_from(v)?);
                }
                Value::Mapping(out)
            }
            Y::Tagged(tagged) => Value::try_from(tagged.value)?,
        })
    }
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, String> {
    use serde_yaml::Value as Y;
    match key {
        Y::String(s) => Ok(s),
        Y::Number(n) => Ok(n.to_string()),
        Y::Bool(b) => Ok(b.to_string()),
        Y::Null => Ok("null".to_string()),
        Y::Tagged(tagged) => yaml_key(tagged.value),
        Y::Sequence(_) => Err("mapping keys must be scalars, found a sequence".to_string()),
        Y::Mapping(_) => Err("mapping keys must be scalars, found a mapping".to_string()),
    }
}

// ── Document ─────────────────────────────────────────────────────────────

/// A decoded mapping document.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Document(Mapping);

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn a decoded root value into a document.
    ///
    /// A mapping root is taken as-is and a null root becomes the empty
    /// document. Any other root is returned unchanged as `Err` so the
    /// caller can report what it found.
    pub fn from_root(root: Value) -> Result<Self, Value> {
        match root {
            Value::Mapping(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(other),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Mapping {
        &self.0
    }

    pub fn into_map(self) -> Mapping {
        self.0
    }

    /// The first non-finite float anywhere in the document.
    pub fn first_non_finite(&self) -> Option<f64> {
        self.0.values().find_map(Value::first_non_finite)
    }
}

impl From<Mapping> for Document {
    fn from(map: Mapping) -> Self {
        Self(map)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Mapping(doc.0)
    }
}

/// Name the variant of `value`, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Integer(_) | Value::Unsigned(_) => "integer",
        Value::Float(_) => "float",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn yaml(text: &str) -> serde_yaml::Value {
        serde_yaml::from_str(text).expect("valid yaml")
    }

    #[test]
    fn mapping_root_is_accepted() {
        let doc = Document::from_root(Value::from(json!({"a": 1}))).expect("mapping root");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("a"), Some(&Value::Integer(1)));
    }

    #[test]
    fn null_root_is_empty_document() {
        let doc = Document::from_root(Value::Null).expect("null root");
        assert!(doc.is_empty());
    }

    #[test]
    fn non_mapping_roots_are_rejected() {
        for root in [json!([1, 2]), json!("x"), json!(3), json!(true)] {
            let root = Value::from(root);
            let back = Document::from_root(root.clone()).unwrap_err();
            assert_eq!(back, root);
        }
    }

    #[test]
    fn iter_is_key_sorted() {
        let doc = Document::from_root(Value::from(json!({"b": 1, "a": 2, "c": 3}))).unwrap();
        let keys: Vec<&str> = doc.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn json_numbers_keep_their_kind() {
        assert_eq!(Value::from(json!(-7)), Value::Integer(-7));
        assert_eq!(Value::from(json!(7)), Value::Integer(7));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Unsigned(u64::MAX));
        assert_eq!(Value::from(json!(7.5)), Value::Float(7.5));
    }

    #[test]
    fn yaml_and_json_agree_on_plain_values() {
        let from_yaml = Value::try_from(yaml("a: 1\nb: [true, ~, x, 2.5]\n")).unwrap();
        let from_json = Value::from(json!({"a": 1, "b": [true, null, "x", 2.5]}));
        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn yaml_non_finite_floats_are_kept() {
        let v = Value::try_from(yaml("x: .inf\ny: -.inf\nz: .nan\n")).unwrap();
        let Value::Mapping(map) = v else {
            panic!("expected a mapping")
        };
        assert_eq!(map["x"], Value::Float(f64::INFINITY));
        assert_eq!(map["y"], Value::Float(f64::NEG_INFINITY));
        assert!(matches!(map["z"], Value::Float(f) if f.is_nan()));
    }

    #[test]
    fn yaml_tags_are_dropped() {
        let v = Value::try_from(yaml("a: !foo bar\nb: !thing {c: 1}\n")).unwrap();
        assert_eq!(v, Value::from(json!({"a": "bar", "b": {"c": 1}})));
    }

    #[test]
    fn yaml_scalar_keys_become_strings() {
        let v = Value::try_from(yaml("1: a\ntrue: b\n2.5: c\n")).unwrap();
        assert_eq!(v, Value::from(json!({"1": "a", "true": "b", "2.5": "c"})));
    }

    #[test]
    fn yaml_complex_keys_are_rejected() {
        let err = Value::try_from(yaml("? [a, b]\n: c\n")).unwrap_err();
        assert!(err.contains("sequence"), "got: {err}");
    }

    #[test]
    fn first_non_finite_walks_nested_values() {
        let mut map = Mapping::new();
        map.insert(
            "outer".into(),
            Value::Sequence(vec![Value::Integer(1), Value::Float(f64::NEG_INFINITY)]),
        );
        let doc = Document::from(map);
        assert_eq!(doc.first_non_finite(), Some(f64::NEG_INFINITY));
        assert_eq!(Document::new().first_non_finite(), None);
    }

    #[test]
    fn value_kind_names() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&Value::Bool(false)), "boolean");
        assert_eq!(value_kind(&Value::Integer(-7)), "integer");
        assert_eq!(value_kind(&Value::Unsigned(u64::MAX)), "integer");
        assert_eq!(value_kind(&Value::Float(7.5)), "float");
        assert_eq!(value_kind(&Value::String("s".into())), "string");
        assert_eq!(value_kind(&Value::Sequence(vec![])), "sequence");
        assert_eq!(value_kind(&Value::Mapping(Mapping::new())), "mapping");
    }

    #[test]
    fn serializes_as_plain_object() {
        let doc = Document::from_root(Value::from(json!({"k": [1, "two", null, 0.5]}))).unwrap();
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"k":[1,"two",null,0.5]}"#
        );
    }
}
