//! Text rendering of [`JsonValue`].

use std::fmt;

use crate::bridge::to_untyped;
use crate::value::JsonValue;

/// Output layout for containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintOptions {
    /// No insignificant whitespace.
    #[default]
    Compact,
    /// Indented, one member per line, as laid out by serde_json.
    Pretty,
}

impl JsonValue {
    /// Renders the value as text.
    ///
    /// Scalars print as bare literals: strings are not quoted or escaped and
    /// numbers use Rust's default `f64` formatting. Arrays and objects are
    /// written by serde_json in the requested layout.
    pub fn print(&self, options: PrintOptions) -> String {
        match self {
            JsonValue::Null => "null".to_string(),
            JsonValue::Bool(b) => b.to_string(),
            JsonValue::Number(n) => n.to_string(),
            JsonValue::String(s) => s.clone(),
            JsonValue::Array(_) | JsonValue::Object(_) => {
                let untyped = to_untyped(self);
                let text = match options {
                    PrintOptions::Compact => serde_json::to_string(&untyped),
                    PrintOptions::Pretty => serde_json::to_string_pretty(&untyped),
                };
                // Serializing a `serde_json::Value` into a String cannot fail.
                text.unwrap_or_default()
            }
        }
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print(PrintOptions::Compact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_scalars() {
        assert_eq!(JsonValue::Null.print(PrintOptions::Compact), "null");
        assert_eq!(JsonValue::Bool(false).print(PrintOptions::Pretty), "false");
        assert_eq!(JsonValue::Number(1.5).print(PrintOptions::Compact), "1.5");
        assert_eq!(JsonValue::Number(3.0).print(PrintOptions::Compact), "3");
        assert_eq!(JsonValue::from("a \"b\"").print(PrintOptions::Compact), "a \"b\"");
    }

    #[test]
    fn test_print_containers_compact() {
        let v = JsonValue::object()
            .with("s", "a \"b\"")
            .with("xs", JsonValue::Array(vec![JsonValue::Number(1.0), JsonValue::Null]));
        assert_eq!(v.print(PrintOptions::Compact), r#"{"s":"a \"b\"","xs":[1,null]}"#);
        assert_eq!(v.to_string(), v.print(PrintOptions::Compact));
    }

    #[test]
    fn test_print_containers_pretty_reparses() {
        let v = JsonValue::object().with("a", JsonValue::Array(vec![JsonValue::Bool(true)]));
        let pretty = v.print(PrintOptions::Pretty);
        assert!(pretty.contains('\n'));
        assert_eq!(JsonValue::read_str(&pretty).expect("reparse"), v);
    }

    #[test]
    fn test_default_is_compact() {
        assert_eq!(PrintOptions::default(), PrintOptions::Compact);
    }
}
