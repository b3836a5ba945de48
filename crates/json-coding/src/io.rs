//! Typed read/write: JSON text in, `T` out, and back.

use std::io::Read;

use json_value::{JsonValue, PrintOptions};

use crate::codec::{FromJson, ToJson};
use crate::error::CodingError;

pub fn from_slice<T: FromJson>(bytes: &[u8]) -> Result<T, CodingError> {
    Ok(T::from_json(&JsonValue::read(bytes)?)?)
}

pub fn from_str<T: FromJson>(text: &str) -> Result<T, CodingError> {
    from_slice(text.as_bytes())
}

pub fn from_reader<T: FromJson, R: Read>(reader: R) -> Result<T, CodingError> {
    Ok(T::from_json(&JsonValue::read_from(reader)?)?)
}

/// Reads and decodes the document behind a local locator (see
/// [`JsonValue::read_url`]).
pub fn from_url<T: FromJson>(locator: &str) -> Result<T, CodingError> {
    Ok(T::from_json(&JsonValue::read_url(locator)?)?)
}

pub fn to_vec<T: ToJson + ?Sized>(item: &T, options: PrintOptions) -> Result<Vec<u8>, CodingError> {
    Ok(item.to_json().write(options)?)
}

pub fn to_string<T: ToJson + ?Sized>(item: &T, options: PrintOptions) -> Result<String, CodingError> {
    Ok(item.to_json().write_string(options)?)
}
