//! Typed encoders and decoders over [`JsonValue`].
//!
//! A type takes part in JSON transport by implementing [`ToJson`] and
//! [`FromJson`]. [`Encoder`] and [`Decoder`] wrap those capabilities (or any
//! plain function) as shareable values that compose: `zero_or_more`,
//! `one_or_more`, `or_nil`, `if_null`, `map`, and discriminator-tagged
//! polymorphism through a [`PolymorphicMap`].
//!
//! # Example
//!
//! ```
//! use json_coding::{Decoder, DecodeError, JsonValue};
//!
//! let ages = Decoder::<u32>::of().zero_or_more();
//! let json = JsonValue::Array(vec![JsonValue::Number(3.0), JsonValue::Number(41.0)]);
//! assert_eq!(ages.decode(&json), Ok(vec![3, 41]));
//!
//! let bad = JsonValue::Array(vec![JsonValue::Number(3.0), JsonValue::from("x")]);
//! assert_eq!(ages.decode(&bad), Err(DecodeError::IncorrectValueType(JsonValue::from("x"))));
//! ```

pub mod codec;
pub mod error;
pub mod geometry;
pub mod io;
pub mod polymorphic;
pub mod primitives;

pub use codec::{decode_with, Decoder, Encoder, FromJson, JsonDecodeExt, ToJson};
pub use error::{CodingError, DecodeError};
pub use geometry::{EdgeInsets, Point, Rect, Size, Vector};
pub use io::{from_reader, from_slice, from_str, from_url, to_string, to_vec};
pub use json_value::{JsonError, JsonMap, JsonValue, PrintOptions};
pub use polymorphic::{Discriminated, PolymorphicMap};
pub use primitives::Base64;
