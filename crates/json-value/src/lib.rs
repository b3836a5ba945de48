//! Immutable JSON value model.
//!
//! [`JsonValue`] is a closed, recursive sum type covering every JSON document.
//! It owns its children outright, so cloning yields an independent tree and a
//! mutation through `&mut self` is never observed by another owner.
//!
//! Byte-level parsing and serialization are delegated to `serde_json`; this
//! crate only converts between [`JsonValue`] and the untyped
//! [`serde_json::Value`] tree (see [`bridge`]).
//!
//! # Example
//!
//! ```
//! use json_value::{JsonValue, PrintOptions};
//!
//! let mut doc = JsonValue::Null;
//! doc.set("name", "Reed");
//! doc.set("arms", JsonValue::Array(vec![JsonValue::Number(3.5), JsonValue::Number(4.0)]));
//!
//! assert_eq!(doc["name"].as_str(), Some("Reed"));
//! assert_eq!(doc["arms"][1].as_f64(), Some(4.0));
//! assert!(doc["missing"].is_null());
//! assert_eq!(doc.print(PrintOptions::Compact), r#"{"name":"Reed","arms":[3.5,4]}"#);
//! ```

pub mod access;
pub mod bridge;
pub mod error;
pub mod io;
pub mod print;
pub mod value;

pub use bridge::{from_untyped, to_untyped};
pub use error::JsonError;
pub use print::PrintOptions;
pub use value::{JsonMap, JsonValue};
