//! Conversion between [`JsonValue`] and the untyped [`serde_json::Value`]
//! tree produced and consumed by serde_json.
//!
//! The conversion towards serde_json is total. The conversion back is
//! partial: a node with no [`JsonValue`] counterpart fails at the top level,
//! but inside an array or object it is silently dropped.
//!
//! The only such node is a number with no finite double value. serde_json
//! produces one only with the `arbitrary-precision` feature enabled, where a
//! literal such as `1e400` survives parsing; by default the parse itself
//! rejects it.

use serde_json::{Map, Number, Value};

use crate::value::{JsonMap, JsonValue};

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Converts into the untyped tree.
///
/// Integral numbers within ±2^53 are handed over as integers so they print
/// without a fractional part. NaN and infinities have no JSON form and become
/// `null`.
pub fn to_untyped(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Number(n) => number_to_untyped(*n),
        JsonValue::Array(items) => Value::Array(items.iter().map(to_untyped).collect()),
        JsonValue::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_untyped(v)))
                .collect::<Map<String, Value>>(),
        ),
    }
}

fn number_to_untyped(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}

/// Converts from the untyped tree.
///
/// Booleans and numbers are told apart by the tree's own tag, never by value,
/// so `true` and `1` stay distinct. Returns `None` only when `value` itself is
/// unconvertible; unconvertible children are dropped.
pub fn from_untyped(value: &Value) -> Option<JsonValue> {
    match value {
        Value::Null => Some(JsonValue::Null),
        Value::Bool(b) => Some(JsonValue::Bool(*b)),
        Value::Number(n) => n.as_f64().map(JsonValue::Number),
        Value::String(s) => Some(JsonValue::String(s.clone())),
        Value::Array(items) => Some(JsonValue::Array(
            items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| {
                    let converted = from_untyped(item);
                    if converted.is_none() {
                        tracing::trace!(index = i, "dropping unconvertible array element");
                    }
                    converted
                })
                .collect(),
        )),
        Value::Object(map) => Some(JsonValue::Object(
            map.iter()
                .filter_map(|(k, v)| match from_untyped(v) {
                    Some(v) => Some((k.clone(), v)),
                    None => {
                        tracing::trace!(key = %k, "dropping unconvertible object entry");
                        None
                    }
                })
                .collect::<JsonMap>(),
        )),
    }
}

/// Owned variant of [`from_untyped`]; moves strings and containers instead
/// of cloning them.
fn from_untyped_owned(value: Value) -> Option<JsonValue> {
    match value {
        Value::String(s) => Some(JsonValue::String(s)),
        Value::Array(items) => Some(JsonValue::Array(
            items.into_iter().filter_map(from_untyped_owned).collect(),
        )),
        Value::Object(map) => Some(JsonValue::Object(
            map.into_iter()
                .filter_map(|(k, v)| from_untyped_owned(v).map(|v| (k, v)))
                .collect(),
        )),
        other => from_untyped(&other),
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        to_untyped(value)
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        to_untyped(&value)
    }
}

/// Error returned when the top-level untyped node has no [`JsonValue`] form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("untyped value has no JSON value representation")]
pub struct UnsupportedValue;

impl TryFrom<Value> for JsonValue {
    type Error = UnsupportedValue;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        from_untyped_owned(value).ok_or(UnsupportedValue)
    }
}

impl TryFrom<&Value> for JsonValue {
    type Error = UnsupportedValue;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        from_untyped(value).ok_or(UnsupportedValue)
    }
}
