//! Codecs for booleans, strings, numbers and base64 binary.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use json_value::JsonValue;

use crate::codec::{FromJson, ToJson};
use crate::error::DecodeError;

impl ToJson for bool {
    fn to_json(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

impl FromJson for bool {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
        json.as_bool().ok_or_else(|| DecodeError::incorrect(json))
    }
}

impl ToJson for str {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }
}

impl ToJson for String {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl FromJson for String {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
        json.as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::incorrect(json))
    }
}

// Every number travels as an f64. Decoding truncates toward zero and rejects
// values the target type cannot hold.
macro_rules! numeric_codec {
    ($($ty:ty),*) => {
        $(
            impl ToJson for $ty {
                fn to_json(&self) -> JsonValue {
                    JsonValue::from(*self)
                }
            }

            impl FromJson for $ty {
                fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
                    json.as_number::<$ty>().ok_or_else(|| DecodeError::incorrect(json))
                }
            }
        )*
    };
}

numeric_codec!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Binary payload carried as a standard (padded) base64 string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Base64(pub Vec<u8>);

impl From<Vec<u8>> for Base64 {
    fn from(bytes: Vec<u8>) -> Self {
        Base64(bytes)
    }
}

impl From<Base64> for Vec<u8> {
    fn from(b: Base64) -> Self {
        b.0
    }
}

impl ToJson for Base64 {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(STANDARD.encode(&self.0))
    }
}

impl FromJson for Base64 {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
        json.as_str()
            .and_then(|text| STANDARD.decode(text).ok())
            .map(Base64)
            .ok_or_else(|| DecodeError::incorrect(json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_and_string() {
        assert_eq!(true.to_json(), JsonValue::Bool(true));
        assert_eq!(bool::from_json(&JsonValue::Bool(false)), Ok(false));
        assert_eq!(
            bool::from_json(&JsonValue::Number(1.0)),
            Err(DecodeError::IncorrectValueType(JsonValue::Number(1.0)))
        );
        assert_eq!("x".to_json(), JsonValue::from("x"));
        assert_eq!(String::from_json(&JsonValue::from("y")), Ok("y".to_string()));
        assert!(String::from_json(&JsonValue::Null).is_err());
    }

    #[test]
    fn test_numbers() {
        assert_eq!(42u8.to_json(), JsonValue::Number(42.0));
        assert_eq!((-1.5f32).to_json(), JsonValue::Number(-1.5));
        assert_eq!(i32::from_json(&JsonValue::Number(7.9)), Ok(7));
        assert_eq!(f64::from_json(&JsonValue::Number(0.25)), Ok(0.25));
        assert_eq!(
            u8::from_json(&JsonValue::Number(300.0)),
            Err(DecodeError::IncorrectValueType(JsonValue::Number(300.0)))
        );
        assert!(i64::from_json(&JsonValue::from("1")).is_err());
        assert!(usize::from_json(&JsonValue::Number(-2.0)).is_err());
    }

    #[test]
    fn test_base64() {
        let bin = Base64(b"hello".to_vec());
        assert_eq!(bin.to_json(), JsonValue::from("aGVsbG8="));
        assert_eq!(Base64::from_json(&JsonValue::from("aGVsbG8=")), Ok(bin));
        assert_eq!(Base64::from_json(&JsonValue::from("")), Ok(Base64::default()));
        assert!(Base64::from_json(&JsonValue::from("not base64!")).is_err());
        assert!(Base64::from_json(&JsonValue::Number(1.0)).is_err());
    }
}
