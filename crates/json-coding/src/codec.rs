//! [`Encoder`] / [`Decoder`] combinators and the [`ToJson`] / [`FromJson`]
//! capabilities they are built from.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use json_value::{JsonMap, JsonValue};

use crate::error::DecodeError;

/// Produces a [`JsonValue`] from `self`.
pub trait ToJson {
    fn to_json(&self) -> JsonValue;
}

/// Constructs `Self` from a [`JsonValue`].
pub trait FromJson: Sized {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError>;
}

/// Encoding function shared by every clone of an [`Encoder`].
pub type EncodeFn<T> = Arc<dyn Fn(&T) -> JsonValue + Send + Sync>;

/// Decoding function shared by every clone of a [`Decoder`].
pub type DecodeFn<T> = Arc<dyn Fn(&JsonValue) -> Result<T, DecodeError> + Send + Sync>;

/// A pure `T -> JsonValue` function.
///
/// Encoders hold no mutable state; cloning is cheap and clones may be used
/// from any thread.
pub struct Encoder<T> {
    encode: EncodeFn<T>,
}

impl<T> Clone for Encoder<T> {
    fn clone(&self) -> Self {
        Self {
            encode: Arc::clone(&self.encode),
        }
    }
}

impl<T> fmt::Debug for Encoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: 'static> Encoder<T> {
    pub fn new<F>(encode: F) -> Self
    where
        F: Fn(&T) -> JsonValue + Send + Sync + 'static,
    {
        Self {
            encode: Arc::new(encode),
        }
    }

    pub fn encode(&self, item: &T) -> JsonValue {
        (self.encode)(item)
    }

    /// Encodes a sequence as an array, element order preserved.
    pub fn zero_or_more(&self) -> Encoder<Vec<T>> {
        let inner = Arc::clone(&self.encode);
        Encoder::new(move |items: &Vec<T>| {
            JsonValue::Array(items.iter().map(|item| inner(item)).collect())
        })
    }

    /// Encodes `None` as `null` and `Some(item)` with this encoder.
    pub fn or_nil(&self) -> Encoder<Option<T>> {
        let inner = Arc::clone(&self.encode);
        Encoder::new(move |item: &Option<T>| match item {
            Some(item) => inner(item),
            None => JsonValue::Null,
        })
    }

    /// Encodes through a string lookup table; values missing from the table
    /// encode as `null`.
    pub fn keyed<K, I>(table: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
        T: PartialEq + Send + Sync,
    {
        let table: Vec<(String, T)> = table.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Encoder::new(move |item: &T| {
            table
                .iter()
                .find(|(_, candidate)| candidate == item)
                .map_or(JsonValue::Null, |(key, _)| JsonValue::String(key.clone()))
        })
    }
}

impl<T: ToJson + 'static> Encoder<T> {
    /// The encoder backed by `T`'s own [`ToJson`] capability.
    pub fn of() -> Self {
        Encoder::new(T::to_json)
    }
}

impl<T: ToJson + 'static> Default for Encoder<T> {
    fn default() -> Self {
        Self::of()
    }
}

/// A `JsonValue -> T` function that may fail with a [`DecodeError`].
///
/// Decoders hold no mutable state; cloning is cheap and clones may be used
/// from any thread. A failed decode builds nothing visible to the caller.
pub struct Decoder<T> {
    decode: DecodeFn<T>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: 'static> Decoder<T> {
    pub fn new<F>(decode: F) -> Self
    where
        F: Fn(&JsonValue) -> Result<T, DecodeError> + Send + Sync + 'static,
    {
        Self {
            decode: Arc::new(decode),
        }
    }

    pub fn decode(&self, json: &JsonValue) -> Result<T, DecodeError> {
        (self.decode)(json)
    }

    /// Transforms a successful result. On failure `transform` is not called
    /// and the error passes through unchanged.
    pub fn map<U, F>(&self, transform: F) -> Decoder<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let inner = Arc::clone(&self.decode);
        Decoder::new(move |json| inner(json).map(&transform))
    }

    /// Decodes every element of an array, in order. Fails on a non-array and
    /// on the first element that fails; an empty array gives an empty `Vec`.
    pub fn zero_or_more(&self) -> Decoder<Vec<T>> {
        let inner = Arc::clone(&self.decode);
        Decoder::new(move |json| match json {
            JsonValue::Array(items) => items.iter().map(|item| inner(item)).collect(),
            other => Err(DecodeError::incorrect(other)),
        })
    }

    /// Like [`Decoder::zero_or_more`], but an empty array is also rejected.
    pub fn one_or_more(&self) -> Decoder<Vec<T>> {
        let inner = Arc::clone(&self.decode);
        Decoder::new(move |json| match json {
            JsonValue::Array(items) if !items.is_empty() => {
                items.iter().map(|item| inner(item)).collect()
            }
            other => Err(DecodeError::incorrect(other)),
        })
    }

    /// Decodes `null` as `None` without consulting this decoder; anything else
    /// goes through it.
    pub fn or_nil(&self) -> Decoder<Option<T>> {
        let inner = Arc::clone(&self.decode);
        Decoder::new(move |json| match json {
            JsonValue::Null => Ok(None),
            other => inner(other).map(Some),
        })
    }

    /// Decodes `null` as `default`; anything else goes through this decoder.
    pub fn if_null(&self, default: T) -> Decoder<T>
    where
        T: Clone + Send + Sync,
    {
        let inner = Arc::clone(&self.decode);
        Decoder::new(move |json| match json {
            JsonValue::Null => Ok(default.clone()),
            other => inner(other),
        })
    }

    /// Decodes a string through a lookup table.
    ///
    /// Non-strings fail with [`DecodeError::IncorrectValueType`]; strings
    /// missing from the table fail with [`DecodeError::UnrecognizedKey`].
    pub fn keyed<K, I>(table: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
        T: Clone + Send + Sync,
    {
        let table: HashMap<String, T> = table.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Decoder::new(move |json| {
            let key = json.as_str().ok_or_else(|| DecodeError::incorrect(json))?;
            table
                .get(key)
                .cloned()
                .ok_or_else(|| DecodeError::UnrecognizedKey(key.to_string()))
        })
    }
}

impl<T: FromJson + 'static> Decoder<T> {
    /// The decoder backed by `T`'s own [`FromJson`] capability.
    pub fn of() -> Self {
        Decoder::new(T::from_json)
    }
}

impl<T: FromJson + 'static> Default for Decoder<T> {
    fn default() -> Self {
        Self::of()
    }
}

/// Runs `decoder` on `json`.
pub fn decode_with<T: 'static>(json: &JsonValue, decoder: &Decoder<T>) -> Result<T, DecodeError> {
    decoder.decode(json)
}

/// Decoding entry points as methods on [`JsonValue`].
pub trait JsonDecodeExt {
    fn decode<T: FromJson>(&self) -> Result<T, DecodeError>;

    fn decode_with<T: 'static>(&self, decoder: &Decoder<T>) -> Result<T, DecodeError>;
}

impl JsonDecodeExt for JsonValue {
    fn decode<T: FromJson>(&self) -> Result<T, DecodeError> {
        T::from_json(self)
    }

    fn decode_with<T: 'static>(&self, decoder: &Decoder<T>) -> Result<T, DecodeError> {
        decoder.decode(self)
    }
}

impl ToJson for JsonValue {
    fn to_json(&self) -> JsonValue {
        self.clone()
    }
}

impl FromJson for JsonValue {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
        Ok(json.clone())
    }
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> JsonValue {
        self.as_slice().to_json()
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
        match json {
            JsonValue::Array(items) => items.iter().map(T::from_json).collect(),
            other => Err(DecodeError::incorrect(other)),
        }
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> JsonValue {
        self.as_ref().map_or(JsonValue::Null, ToJson::to_json)
    }
}

impl<T: FromJson> FromJson for Option<T> {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
        match json {
            JsonValue::Null => Ok(None),
            other => T::from_json(other).map(Some),
        }
    }
}

impl<T: ToJson + ?Sized> ToJson for Box<T> {
    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }
}

impl<T: FromJson> FromJson for Box<T> {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
        T::from_json(json).map(Box::new)
    }
}

impl<T: ToJson + ?Sized> ToJson for Arc<T> {
    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }
}

impl<T: ToJson> ToJson for BTreeMap<String, T> {
    fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
    }
}

impl<T: FromJson> FromJson for BTreeMap<String, T> {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
        decode_entries(json)
    }
}

impl<T: ToJson> ToJson for HashMap<String, T> {
    fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
    }
}

impl<T: FromJson> FromJson for HashMap<String, T> {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
        decode_entries(json)
    }
}

fn decode_entries<T, C>(json: &JsonValue) -> Result<C, DecodeError>
where
    T: FromJson,
    C: FromIterator<(String, T)>,
{
    let map: &JsonMap = json.as_object().ok_or_else(|| DecodeError::incorrect(json))?;
    map.iter()
        .map(|(k, v)| T::from_json(v).map(|v| (k.clone(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn n(v: f64) -> JsonValue {
        JsonValue::Number(v)
    }

    fn arr(items: Vec<JsonValue>) -> JsonValue {
        JsonValue::Array(items)
    }

    #[test]
    fn test_map_transforms_success() {
        let len = Decoder::<String>::of().map(|s| s.len());
        assert_eq!(len.decode(&JsonValue::from("abcd")), Ok(4));
    }

    #[test]
    fn test_map_skips_transform_on_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let dec = Decoder::<String>::of().map(move |s| {
            seen.fetch_add(1, Ordering::SeqCst);
            s
        });
        assert_eq!(dec.decode(&n(1.0)), Err(DecodeError::IncorrectValueType(n(1.0))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_zero_or_more_encode_preserves_order() {
        let enc = Encoder::<i64>::of().zero_or_more();
        assert_eq!(enc.encode(&vec![3, 1, 2]), arr(vec![n(3.0), n(1.0), n(2.0)]));
        assert_eq!(enc.encode(&vec![]), arr(vec![]));
    }

    #[test]
    fn test_zero_or_more_decode() {
        let dec = Decoder::<i64>::of().zero_or_more();
        assert_eq!(dec.decode(&arr(vec![])), Ok(vec![]));
        assert_eq!(dec.decode(&arr(vec![n(1.0), n(2.0)])), Ok(vec![1, 2]));
        assert_eq!(
            dec.decode(&JsonValue::object()),
            Err(DecodeError::IncorrectValueType(JsonValue::object()))
        );
    }

    #[test]
    fn test_zero_or_more_propagates_first_failure() {
        let dec = Decoder::<bool>::of().zero_or_more();
        let input = arr(vec![JsonValue::Bool(true), n(1.0), JsonValue::from("x")]);
        assert_eq!(dec.decode(&input), Err(DecodeError::IncorrectValueType(n(1.0))));
    }

    #[test]
    fn test_one_or_more_rejects_empty() {
        let dec = Decoder::<i64>::of().one_or_more();
        assert_eq!(dec.decode(&arr(vec![])), Err(DecodeError::IncorrectValueType(arr(vec![]))));
        assert_eq!(dec.decode(&arr(vec![n(5.0)])), Ok(vec![5]));
        assert!(dec.decode(&JsonValue::Null).is_err());
    }

    #[test]
    fn test_or_nil_decode_never_calls_inner_on_null() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let inner = Decoder::new(move |json| {
            seen.fetch_add(1, Ordering::SeqCst);
            i64::from_json(json)
        });
        let dec = inner.or_nil();
        assert_eq!(dec.decode(&JsonValue::Null), Ok(None));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(dec.decode(&n(1.0)), Ok(Some(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            dec.decode(&JsonValue::from("1")),
            Err(DecodeError::IncorrectValueType(JsonValue::from("1")))
        );
    }

    #[test]
    fn test_or_nil_encode() {
        let enc = Encoder::<String>::of().or_nil();
        assert_eq!(enc.encode(&None), JsonValue::Null);
        assert_eq!(enc.encode(&Some("a".to_string())), JsonValue::from("a"));
    }

    #[test]
    fn test_if_null_substitutes_default() {
        let dec = Decoder::<i64>::of().if_null(7);
        assert_eq!(dec.decode(&JsonValue::Null), Ok(7));
        assert_eq!(dec.decode(&n(2.0)), Ok(2));
        assert_eq!(
            dec.decode(&JsonValue::Bool(true)),
            Err(DecodeError::IncorrectValueType(JsonValue::Bool(true)))
        );
    }

    #[test]
    fn test_if_null_does_not_intercept_missing_element() {
        let dec = Decoder::<i64>::of().if_null(0).zero_or_more();
        assert_eq!(dec.decode(&arr(vec![JsonValue::Null, n(3.0)])), Ok(vec![0, 3]));
        assert!(dec.decode(&JsonValue::Null).is_err());
    }

    #[test]
    fn test_keyed_lookup() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        enum Align {
            Left,
            Right,
        }
        let table = [("left", Align::Left), ("right", Align::Right)];
        let dec = Decoder::keyed(table);
        let enc = Encoder::keyed(table);

        assert_eq!(dec.decode(&JsonValue::from("right")), Ok(Align::Right));
        assert_eq!(
            dec.decode(&JsonValue::from("center")),
            Err(DecodeError::UnrecognizedKey("center".to_string()))
        );
        assert_eq!(dec.decode(&n(0.0)), Err(DecodeError::IncorrectValueType(n(0.0))));
        assert_eq!(enc.encode(&Align::Left), JsonValue::from("left"));
    }

    #[test]
    fn test_capability_impls_follow_combinator_semantics() {
        let json = arr(vec![JsonValue::Null, n(2.0)]);
        assert_eq!(Vec::<Option<u8>>::from_json(&json), Ok(vec![None, Some(2)]));
        assert_eq!(vec![None, Some(2u8)].to_json(), json);
        assert_eq!(json.decode::<JsonValue>(), Ok(json.clone()));
        assert!(JsonValue::from("x").decode::<Vec<u8>>().is_err());
    }

    #[test]
    fn test_string_maps() {
        let json = JsonValue::object().with("a", 1).with("b", 2);
        let decoded: BTreeMap<String, u32> = json.decode().expect("decodes");
        assert_eq!(decoded.get("b"), Some(&2));
        assert_eq!(decoded.to_json(), json);

        let bad = JsonValue::object().with("a", "x");
        assert_eq!(
            bad.decode::<HashMap<String, u32>>(),
            Err(DecodeError::IncorrectValueType(JsonValue::from("x")))
        );
    }

    #[test]
    fn test_codecs_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Encoder<Vec<String>>>();
        assert_send_sync::<Decoder<Option<f64>>>();

        let dec = Decoder::<u16>::of().zero_or_more();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let dec = dec.clone();
                std::thread::spawn(move || dec.decode(&arr(vec![n(f64::from(i))])))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().expect("thread"), Ok(vec![i as u16]));
        }
    }
}
