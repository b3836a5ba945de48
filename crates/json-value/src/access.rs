//! Keyed and indexed reads and writes over [`JsonValue`].
//!
//! Reads never fail: an absent key, an out-of-range index or a variant
//! mismatch all read as [`JsonValue::Null`]. Writes never fail either: writing
//! a key into a non-object (or an index into a non-array) replaces the whole
//! value with a fresh single-entry container.

use std::ops::Index;

use crate::value::{JsonMap, JsonValue};

static NULL: JsonValue = JsonValue::Null;

impl JsonValue {
    /// Reads `key` from an object. Null when absent or when `self` is not an
    /// object.
    pub fn get(&self, key: &str) -> &JsonValue {
        match self {
            JsonValue::Object(map) => map.get(key).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    /// Reads element `index` from an array. Null when out of bounds (including
    /// negative indices) or when `self` is not an array.
    pub fn at(&self, index: isize) -> &JsonValue {
        match self {
            JsonValue::Array(items) => usize::try_from(index)
                .ok()
                .and_then(|i| items.get(i))
                .unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    /// Binds `key` to `value`.
    ///
    /// An existing binding is overwritten. If `self` is not an object it is
    /// discarded and becomes `{key: value}`.
    ///
    /// ```
    /// use json_value::JsonValue;
    ///
    /// let mut v = JsonValue::Array(vec![JsonValue::Number(1.0)]);
    /// v.set("a", true);
    /// assert_eq!(v, JsonValue::object().with("a", true));
    /// ```
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) {
        let key = key.into();
        let value = value.into();
        match self {
            JsonValue::Object(map) => {
                map.insert(key, value);
            }
            _ => {
                let mut map = JsonMap::with_capacity(1);
                map.insert(key, value);
                *self = JsonValue::Object(map);
            }
        }
    }

    /// Consuming form of [`JsonValue::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Writes `value` at `index` with clamped-insert semantics.
    ///
    /// - `index < 0` inserts at the front;
    /// - `index >= len` appends;
    /// - otherwise the element at `index` is replaced.
    ///
    /// If `self` is not an array it is discarded and becomes `[value]`.
    pub fn set_at(&mut self, index: isize, value: impl Into<JsonValue>) {
        let value = value.into();
        match self {
            JsonValue::Array(items) => match usize::try_from(index) {
                Err(_) => items.insert(0, value),
                Ok(i) if i >= items.len() => items.push(value),
                Ok(i) => items[i] = value,
            },
            _ => *self = JsonValue::Array(vec![value]),
        }
    }

    /// Consuming form of [`JsonValue::set_at`].
    pub fn with_at(mut self, index: isize, value: impl Into<JsonValue>) -> Self {
        self.set_at(index, value);
        self
    }

    /// Same as `set_at(self.len(), value)`.
    pub fn append(&mut self, value: impl Into<JsonValue>) {
        let end = isize::try_from(self.len()).unwrap_or(isize::MAX);
        self.set_at(end, value);
    }

    /// Removes `key` from an object, returning its value. Other variants are
    /// left untouched.
    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        match self {
            JsonValue::Object(map) => map.shift_remove(key),
            _ => None,
        }
    }

    /// Element count of an array; 0 for every other variant.
    pub fn len(&self) -> usize {
        match self {
            JsonValue::Array(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Object keys in insertion order; empty for other variants.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            JsonValue::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Object values in insertion order; empty for other variants.
    pub fn values(&self) -> Vec<&JsonValue> {
        match self {
            JsonValue::Object(map) => map.values().collect(),
            _ => Vec::new(),
        }
    }
}

impl Index<&str> for JsonValue {
    type Output = JsonValue;

    fn index(&self, key: &str) -> &JsonValue {
        self.get(key)
    }
}

impl Index<usize> for JsonValue {
    type Output = JsonValue;

    fn index(&self, index: usize) -> &JsonValue {
        match self {
            JsonValue::Array(items) => items.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}
