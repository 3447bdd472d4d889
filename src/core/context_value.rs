//! Structured context data attached to a single log call

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arbitrary nested plain data.
///
/// Objects keep their keys in insertion order; rendering never sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum ContextValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<ContextValue>),
    Object(Vec<(String, ContextValue)>),
}

impl ContextValue {
    /// Start an empty object to fill with [`ContextValue::with_field`].
    #[must_use]
    pub fn object() -> Self {
        ContextValue::Object(Vec::new())
    }

    /// Start an empty array to fill with [`ContextValue::with_item`].
    #[must_use]
    pub fn array() -> Self {
        ContextValue::Array(Vec::new())
    }

    /// Append a key/value pair. Replaces the value in place if the key exists.
    ///
    /// Has no effect on non-object values.
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.insert(key, value);
        self
    }

    /// Append an element. Has no effect on non-array values.
    #[must_use]
    pub fn with_item<V: Into<ContextValue>>(mut self, value: V) -> Self {
        if let ContextValue::Array(items) = &mut self {
            items.push(value.into());
        }
        self
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        if let ContextValue::Object(pairs) = self {
            let key = key.into();
            let value = value.into();
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some((_, existing)) => *existing = value,
                None => pairs.push((key, value)),
            }
        }
    }

    /// Look up a key on an object value.
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        match self {
            ContextValue::Object(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ContextValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ContextValue::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ContextValue::String(_))
    }

    /// True for objects and arrays.
    pub fn is_structured(&self) -> bool {
        matches!(self, ContextValue::Object(_) | ContextValue::Array(_))
    }
}

/// Scalars print their natural textual form; containers print compactly.
impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Null => f.write_str("null"),
            ContextValue::Bool(b) => write!(f, "{}", b),
            ContextValue::Int(i) => write!(f, "{}", i),
            ContextValue::Float(fl) if fl.is_infinite() => {
                f.write_str(if fl.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            ContextValue::Float(fl) => write!(f, "{}", fl),
            ContextValue::String(s) => f.write_str(s),
            ContextValue::Array(_) | ContextValue::Object(_) => {
                f.write_str(&super::value_renderer::render(self, true))
            }
        }
    }
}

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        ContextValue::String(s)
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        ContextValue::String(s.to_string())
    }
}

impl From<&String> for ContextValue {
    fn from(s: &String) -> Self {
        ContextValue::String(s.clone())
    }
}

impl From<i64> for ContextValue {
    fn from(i: i64) -> Self {
        ContextValue::Int(i)
    }
}

impl From<i32> for ContextValue {
    fn from(i: i32) -> Self {
        ContextValue::Int(i as i64)
    }
}

impl From<u32> for ContextValue {
    fn from(i: u32) -> Self {
        ContextValue::Int(i as i64)
    }
}

impl From<usize> for ContextValue {
    fn from(i: usize) -> Self {
        i64::try_from(i)
            .map(ContextValue::Int)
            .unwrap_or(ContextValue::Float(i as f64))
    }
}

impl From<f64> for ContextValue {
    fn from(f: f64) -> Self {
        ContextValue::Float(f)
    }
}

impl From<bool> for ContextValue {
    fn from(b: bool) -> Self {
        ContextValue::Bool(b)
    }
}

impl<T: Into<ContextValue>> From<Option<T>> for ContextValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ContextValue::Null, Into::into)
    }
}

impl<T: Into<ContextValue>> From<Vec<T>> for ContextValue {
    fn from(items: Vec<T>) -> Self {
        ContextValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<ContextValue>> FromIterator<(K, V)> for ContextValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = ContextValue::object();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for ContextValue
where
    Tz::Offset: fmt::Display,
{
    fn from(date: chrono::DateTime<Tz>) -> Self {
        ContextValue::String(date.to_rfc3339())
    }
}

impl From<serde_json::Value> for ContextValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ContextValue::Null,
            serde_json::Value::Bool(b) => ContextValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => ContextValue::Int(i),
                None => ContextValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => ContextValue::String(s),
            serde_json::Value::Array(items) => {
                ContextValue::Array(items.into_iter().map(ContextValue::from).collect())
            }
            serde_json::Value::Object(map) => ContextValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, ContextValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<ContextValue> for serde_json::Value {
    fn from(value: ContextValue) -> Self {
        serde_json::Value::from(&value)
    }
}

impl From<&ContextValue> for serde_json::Value {
    fn from(value: &ContextValue) -> Self {
        match value {
            ContextValue::Null => serde_json::Value::Null,
            ContextValue::Bool(b) => serde_json::Value::Bool(*b),
            ContextValue::Int(i) => serde_json::Value::Number((*i).into()),
            ContextValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ContextValue::String(s) => serde_json::Value::String(s.clone()),
            ContextValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            ContextValue::Object(pairs) => serde_json::Value::Object(
                pairs
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
