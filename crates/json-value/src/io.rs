//! Reading and writing JSON text.
//!
//! Tokenizing is left to serde_json; these helpers only move bytes in and out
//! and run the result through the [`bridge`](crate::bridge).

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use url::Url;

use crate::error::JsonError;
use crate::print::PrintOptions;
use crate::value::JsonValue;

impl JsonValue {
    /// Parses a complete JSON document from a byte buffer.
    pub fn read(bytes: &[u8]) -> Result<JsonValue, JsonError> {
        let untyped: Value = serde_json::from_slice(bytes)?;
        Ok(JsonValue::try_from(untyped)?)
    }

    pub fn read_str(text: &str) -> Result<JsonValue, JsonError> {
        JsonValue::read(text.as_bytes())
    }

    /// Parses a complete JSON document from a byte stream.
    pub fn read_from<R: Read>(reader: R) -> Result<JsonValue, JsonError> {
        let untyped: Value = serde_json::from_reader(reader)?;
        Ok(JsonValue::try_from(untyped)?)
    }

    /// Parses the document behind a local resource locator.
    ///
    /// `locator` is either a `file:` URL or a plain filesystem path. Remote
    /// schemes, and locators that cannot be opened, fail with
    /// [`JsonError::InvalidUrl`]. The file is closed before this returns,
    /// whatever the outcome.
    pub fn read_url(locator: &str) -> Result<JsonValue, JsonError> {
        let invalid = || JsonError::InvalidUrl(locator.to_string());
        let path = local_path(locator).ok_or_else(invalid)?;
        let file = File::open(&path).map_err(|err| {
            tracing::debug!(locator, error = %err, "cannot open JSON source");
            invalid()
        })?;
        tracing::debug!(path = %path.display(), "reading JSON document");
        JsonValue::read_from(BufReader::new(file))
    }

    /// Parses the document stored at `path`.
    pub fn read_file(path: impl AsRef<Path>) -> Result<JsonValue, JsonError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|_| JsonError::InvalidUrl(path.display().to_string()))?;
        JsonValue::read_from(BufReader::new(file))
    }

    /// Serializes to JSON text. Unlike [`JsonValue::print`], scalars are
    /// written as valid JSON (strings are quoted).
    pub fn write(&self, options: PrintOptions) -> Result<Vec<u8>, JsonError> {
        let mut out = Vec::new();
        self.write_to(&mut out, options)?;
        Ok(out)
    }

    /// Same as [`JsonValue::write`], returned as a `String`.
    pub fn write_string(&self, options: PrintOptions) -> Result<String, JsonError> {
        let untyped = Value::from(self);
        let text = match options {
            PrintOptions::Compact => serde_json::to_string(&untyped)?,
            PrintOptions::Pretty => serde_json::to_string_pretty(&untyped)?,
        };
        Ok(text)
    }

    pub fn write_to<W: Write>(&self, writer: W, options: PrintOptions) -> Result<(), JsonError> {
        let untyped = Value::from(self);
        match options {
            PrintOptions::Compact => serde_json::to_writer(writer, &untyped)?,
            PrintOptions::Pretty => serde_json::to_writer_pretty(writer, &untyped)?,
        }
        tracing::debug!(kind = self.kind(), "wrote JSON document");
        Ok(())
    }

    /// Writes the document followed by a newline, then flushes `writer`.
    pub fn write_line_to<W: Write>(&self, mut writer: W, options: PrintOptions) -> Result<(), JsonError> {
        self.write_to(&mut writer, options)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

fn local_path(locator: &str) -> Option<PathBuf> {
    match Url::parse(locator) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().ok(),
        Ok(url) => {
            tracing::debug!(scheme = url.scheme(), "refusing non-local locator");
            None
        }
        Err(_) => Some(PathBuf::from(locator)),
    }
}
