//! [`JsonValue`], the recursive JSON sum type.

use indexmap::IndexMap;
use num_traits::NumCast;

/// Object payload. Keys are unique; insertion order is kept.
pub type JsonMap = IndexMap<String, JsonValue>;

/// Any JSON document.
///
/// Numbers are always double precision: integers beyond 2^53 collapse onto
/// their nearest `f64`. Equality is structural and variant-sensitive, so
/// `Number(1.0)` never equals `String("1")`. Object equality ignores key
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    String(String),
    Number(f64),
    Array(Vec<JsonValue>),
    Object(JsonMap),
}

impl JsonValue {
    /// Creates an empty object.
    pub fn object() -> Self {
        JsonValue::Object(JsonMap::new())
    }

    /// Creates an empty array.
    pub fn array() -> Self {
        JsonValue::Array(Vec::new())
    }

    /// Returns the variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::String(_) => "string",
            JsonValue::Number(_) => "number",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Converts a `Number` into any primitive numeric type.
    ///
    /// Fractions truncate toward zero. Returns `None` for other variants and
    /// for numbers the target cannot hold (NaN, out of range).
    ///
    /// ```
    /// use json_value::JsonValue;
    ///
    /// assert_eq!(JsonValue::Number(2.9).as_number::<i32>(), Some(2));
    /// assert_eq!(JsonValue::Number(-1.0).as_number::<u8>(), None);
    /// assert_eq!(JsonValue::Number(f64::NAN).as_number::<i64>(), None);
    /// assert_eq!(JsonValue::from("1").as_number::<i64>(), None);
    /// ```
    pub fn as_number<N: NumCast>(&self) -> Option<N> {
        match self {
            JsonValue::Number(n) => N::from(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        self.as_number()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number()
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.as_number()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_number()
    }

    pub fn as_usize(&self) -> Option<usize> {
        self.as_number()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_array(self) -> Option<Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_object(self) -> Option<JsonMap> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(n: $ty) -> Self {
                    JsonValue::Number(n as f64)
                }
            }
        )*
    };
}

from_number!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<Vec<JsonValue>> for JsonValue {
    fn from(items: Vec<JsonValue>) -> Self {
        JsonValue::Array(items)
    }
}

impl From<JsonMap> for JsonValue {
    fn from(map: JsonMap) -> Self {
        JsonValue::Object(map)
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(JsonValue::Null, Into::into)
    }
}

impl FromIterator<JsonValue> for JsonValue {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        JsonValue::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
