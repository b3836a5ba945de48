//! Discriminator-tagged polymorphism.
//!
//! A [`PolymorphicMap`] is a closed table from tag string to the decoder of
//! the concrete type behind that tag. Encoding stamps the item's tag into its
//! object under the map's key; decoding reads the tag back and dispatches.
//!
//! The tag of a value comes from its [`Discriminated`] capability: every
//! concrete type names itself, so no runtime type lookup is involved.
//!
//! ```
//! use std::sync::Arc;
//! use json_coding::{Decoder, Discriminated, Encoder, JsonValue, PolymorphicMap};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! impl Discriminated for Shape {
//!     fn discriminator(&self) -> &str {
//!         match self {
//!             Shape::Circle(_) => "circle",
//!             Shape::Square(_) => "square",
//!         }
//!     }
//! }
//!
//! let side = |json: &JsonValue| json.get("size").as_f64();
//! let map = Arc::new(
//!     PolymorphicMap::new("type")
//!         .register("circle", Decoder::new(move |json| {
//!             side(json).map(Shape::Circle).ok_or_else(|| json_coding::DecodeError::IncorrectValueType(json.clone()))
//!         }))
//!         .register("square", Decoder::new(move |json| {
//!             side(json).map(Shape::Square).ok_or_else(|| json_coding::DecodeError::IncorrectValueType(json.clone()))
//!         })),
//! );
//! let encoder = Encoder::new(|shape: &Shape| match shape {
//!     Shape::Circle(r) | Shape::Square(r) => JsonValue::object().with("size", *r),
//! })
//! .polymorphically(Arc::clone(&map));
//! let decoder = Decoder::polymorphic(map);
//!
//! let json = encoder.encode(&Shape::Square(2.0));
//! assert_eq!(json, JsonValue::object().with("size", 2.0).with("type", "square"));
//! assert_eq!(decoder.decode(&json), Ok(Shape::Square(2.0)));
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use json_value::JsonValue;

use crate::codec::{Decoder, Encoder, FromJson};
use crate::error::DecodeError;

/// Names the concrete type of a value for polymorphic encoding.
pub trait Discriminated {
    fn discriminator(&self) -> &str;
}

impl<T: Discriminated + ?Sized> Discriminated for Box<T> {
    fn discriminator(&self) -> &str {
        (**self).discriminator()
    }
}

impl<T: Discriminated + ?Sized> Discriminated for Arc<T> {
    fn discriminator(&self) -> &str {
        (**self).discriminator()
    }
}

impl<T: Discriminated + ?Sized> Discriminated for &T {
    fn discriminator(&self) -> &str {
        (**self).discriminator()
    }
}

struct Registration<T> {
    encoder: Option<Encoder<T>>,
    decoder: Decoder<T>,
}

/// Tag → concrete-type table behind a discriminator key.
///
/// Built once, then shared (typically through an [`Arc`]) and only read.
pub struct PolymorphicMap<T> {
    key: String,
    types: IndexMap<String, Registration<T>>,
}

impl<T> std::fmt::Debug for PolymorphicMap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolymorphicMap")
            .field("key", &self.key)
            .field("tags", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: 'static> PolymorphicMap<T> {
    /// An empty table reading and writing tags under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            types: IndexMap::new(),
        }
    }

    /// Registers the decoder for values tagged `tag`. A later registration of
    /// the same tag replaces the earlier one.
    pub fn register(mut self, tag: impl Into<String>, decoder: Decoder<T>) -> Self {
        self.types.insert(
            tag.into(),
            Registration {
                encoder: None,
                decoder,
            },
        );
        self
    }

    /// Registers concrete type `U`, decoded with its own [`FromJson`] and
    /// widened into `T`.
    pub fn register_type<U>(self, tag: impl Into<String>) -> Self
    where
        U: FromJson + Into<T> + 'static,
    {
        self.register(tag, Decoder::<U>::of().map(Into::into))
    }

    /// Registers both directions for `tag`. The encoder takes precedence over
    /// the one passed to [`Encoder::polymorphically`] for items carrying
    /// this tag.
    pub fn register_with(
        mut self,
        tag: impl Into<String>,
        encoder: Encoder<T>,
        decoder: Decoder<T>,
    ) -> Self {
        self.types.insert(
            tag.into(),
            Registration {
                encoder: Some(encoder),
                decoder,
            },
        );
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.types.contains_key(tag)
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Encodes `item` and stamps its tag under the discriminator key,
    /// overwriting any entry already there.
    ///
    /// Items whose tag is not registered are encoded by `fallback` and
    /// returned untouched.
    pub fn encode(&self, item: &T, fallback: &Encoder<T>) -> JsonValue
    where
        T: Discriminated,
    {
        let tag = item.discriminator();
        let Some((tag, registration)) = self.types.get_key_value(tag) else {
            tracing::debug!(key = %self.key, tag, "unregistered tag, encoding without discriminator");
            return fallback.encode(item);
        };
        let mut json = registration.encoder.as_ref().unwrap_or(fallback).encode(item);
        json.set(self.key.as_str(), tag.as_str());
        json
    }

    /// Reads the tag under the discriminator key and decodes `json` with the
    /// decoder registered for it. The concrete decoder sees `json` unchanged,
    /// discriminator included.
    ///
    /// Fails with [`DecodeError::IncorrectValueType`] when `json` is not an
    /// object or the key is missing or not a string, and with
    /// [`DecodeError::UnrecognizedKey`] when the tag is not registered.
    pub fn decode(&self, json: &JsonValue) -> Result<T, DecodeError> {
        let tag = match json {
            JsonValue::Object(map) => map.get(&self.key).and_then(JsonValue::as_str),
            _ => None,
        }
        .ok_or_else(|| DecodeError::incorrect(json))?;
        let registration = self
            .types
            .get(tag)
            .ok_or_else(|| DecodeError::UnrecognizedKey(tag.to_string()))?;
        registration.decoder.decode(json)
    }
}

impl<T: Discriminated + 'static> Encoder<T> {
    /// Wraps this encoder so that registered items carry their tag.
    pub fn polymorphically(&self, map: Arc<PolymorphicMap<T>>) -> Encoder<T> {
        let fallback = self.clone();
        Encoder::new(move |item| map.encode(item, &fallback))
    }
}

impl<T: 'static> Decoder<T> {
    /// A decoder dispatching on the tag under `map`'s discriminator key.
    pub fn polymorphic(map: Arc<PolymorphicMap<T>>) -> Decoder<T> {
        Decoder::new(move |json| map.decode(json))
    }
}
