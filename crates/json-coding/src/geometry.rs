//! Fixed-field geometry records and the [`json_record!`] macro that gives
//! them their codecs.

use json_value::JsonValue;

use crate::codec::{FromJson, ToJson};
use crate::error::DecodeError;

/// Implements [`ToJson`] and [`FromJson`] for a struct whose fields each map
/// to one object key.
///
/// Every field type must itself implement both capabilities. A missing key
/// reads as `null`, so it fails unless the field type accepts `null`
/// (an `Option`, for instance).
///
/// ```
/// use json_coding::{json_record, FromJson, JsonValue, ToJson};
///
/// #[derive(Debug, PartialEq)]
/// struct Span {
///     start: u32,
///     end: Option<u32>,
/// }
///
/// json_record!(Span { start => "s", end => "e" });
///
/// let span = Span { start: 4, end: None };
/// let json = span.to_json();
/// assert_eq!(json, JsonValue::object().with("s", 4).with("e", JsonValue::Null));
/// assert_eq!(Span::from_json(&JsonValue::object().with("s", 4)), Ok(span));
/// ```
#[macro_export]
macro_rules! json_record {
    ($ty:ident { $($field:ident => $key:literal),+ $(,)? }) => {
        impl $crate::ToJson for $ty {
            fn to_json(&self) -> $crate::JsonValue {
                let mut json = $crate::JsonValue::object();
                $( json.set($key, $crate::ToJson::to_json(&self.$field)); )+
                json
            }
        }

        impl $crate::FromJson for $ty {
            fn from_json(
                json: &$crate::JsonValue,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                Ok(Self {
                    $( $field: $crate::FromJson::from_json(json.get($key))?, )+
                })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Origin plus size, written flat as `{x, y, w, h}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

json_record!(Point { x => "x", y => "y" });
json_record!(Size { width => "w", height => "h" });
json_record!(Vector { dx => "dx", dy => "dy" });
json_record!(EdgeInsets { top => "t", left => "l", right => "r", bottom => "b" });

impl ToJson for Rect {
    fn to_json(&self) -> JsonValue {
        let mut json = self.origin.to_json();
        json.set("w", self.size.width);
        json.set("h", self.size.height);
        json
    }
}

impl FromJson for Rect {
    fn from_json(json: &JsonValue) -> Result<Self, DecodeError> {
        Ok(Rect {
            origin: Point::from_json(json)?,
            size: Size::from_json(json)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_keys() {
        let p = Point { x: 1.0, y: -2.5 };
        assert_eq!(p.to_json(), JsonValue::object().with("x", 1.0).with("y", -2.5));
        assert_eq!(Point::from_json(&p.to_json()), Ok(p));
    }

    #[test]
    fn test_short_keys() {
        let size = Size { width: 3.0, height: 4.0 }.to_json();
        assert_eq!(size.keys(), vec!["w", "h"]);
        let insets = EdgeInsets { top: 1.0, left: 2.0, right: 3.0, bottom: 4.0 }.to_json();
        assert_eq!(insets.keys(), vec!["t", "l", "r", "b"]);
        assert_eq!(Vector { dx: 0.5, dy: 0.0 }.to_json()["dx"], JsonValue::Number(0.5));
    }

    #[test]
    fn test_rect_is_flat() {
        let rect = Rect {
            origin: Point { x: 1.0, y: 2.0 },
            size: Size { width: 30.0, height: 40.0 },
        };
        let json = rect.to_json();
        assert_eq!(json.keys(), vec!["x", "y", "w", "h"]);
        assert_eq!(Rect::from_json(&json), Ok(rect));
    }

    #[test]
    fn test_missing_field_fails_with_null() {
        let json = JsonValue::object().with("x", 1.0);
        assert_eq!(Point::from_json(&json), Err(DecodeError::IncorrectValueType(JsonValue::Null)));
        assert_eq!(
            Rect::from_json(&JsonValue::from("r")),
            Err(DecodeError::IncorrectValueType(JsonValue::Null))
        );
    }
}
