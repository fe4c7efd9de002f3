//! # serde_omitjson
//!
//! A Serde-compatible JSON encoder in which a type can report that it is in
//! its own zero state, so that `omitempty` fields holding it disappear from
//! the output.
//!
//! ## Why?
//!
//! "Empty" is easy for the encoder to recognise for `""`, `0` or an empty
//! list. It is impossible for types whose unset state is something else: a
//! timestamp encodes "unset" as `0001-01-01T00:00:00Z`, a nil id as a string
//! of zeros. Only the type knows. Whether an empty value should vanish is a
//! different question, and only the struct holding the field can answer it.
//!
//! This crate keeps the two concerns apart:
//!
//! - the **type** serializes its zero representation through
//!   [`empty::serialize_zero`] (or returns [`Marshaled::zero`] from a
//!   [`Marshaler`]);
//! - the **struct** marks a field with `#[serde(with = "omitempty")]` (or
//!   [`OmitEmpty`]).
//!
//! A field is dropped only when both are true. Everywhere else (top-level
//! values, sequence elements, map entries, fields without the policy, other
//! serde formats) the zero representation is written as usual.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_omitjson::{omitempty, to_string, Timestamp};
//!
//! #[derive(Serialize)]
//! #[allow(non_snake_case)]
//! struct Record {
//!     #[serde(with = "omitempty")]
//!     A: Timestamp,
//!     B: String,
//! }
//!
//! let record = Record { A: Timestamp::unset(), B: "x".to_string() };
//! assert_eq!(to_string(&record).unwrap(), r#"{"B":"x"}"#);
//!
//! // Not a struct field: the zero representation is written.
//! assert_eq!(to_string(&Timestamp::unset()).unwrap(), r#""0001-01-01T00:00:00Z""#);
//! ```
//!
//! ## Modules
//!
//! - [`empty`]: the zero-state signal for hand-written `Serialize` impls
//! - [`marshal`]: the [`Marshaler`] trait with an explicit zero flag
//! - [`omitempty`]: the per-field omission policy
//! - [`time`]: [`Timestamp`], a zero-aware UTC instant
//! - [`rules`]: the complete encoding rules
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No shared mutable state; the signal and policy markers are constants
//! - Proper error propagation with `Result` types

pub mod empty;
pub mod error;
mod field;
pub mod macros;
pub mod map;
pub mod marshal;
pub mod omitempty;
pub mod options;
pub mod rules;
pub mod ser;
pub mod time;
pub mod value;

pub use empty::EMPTY;
pub use error::{Error, Result};
pub use map::Map;
pub use marshal::{Marshaled, Marshaler};
pub use omitempty::OmitEmpty;
pub use options::JsonOptions;
pub use ser::{Serializer, ValueSerializer};
pub use time::{Timestamp, ZERO_TIME};
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use serde_omitjson::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if a `Serialize` impl fails, a float is not finite, or a
/// map key cannot be used as an object key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, JsonOptions::default())
}

/// Serialize any `T: Serialize` to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, JsonOptions::pretty())
}

/// Serialize any `T: Serialize` to a JSON string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_omitjson::{to_string_with_options, JsonOptions};
///
/// let json = to_string_with_options(&vec![1, 2], JsonOptions::pretty().with_indent(1)).unwrap();
/// assert_eq!(json, "[\n 1,\n 2\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: JsonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` to compact JSON bytes.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_string(value).map(String::into_bytes)
}

/// Serialize any `T: Serialize` to pretty-printed JSON bytes.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_pretty<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_string_pretty(value).map(String::into_bytes)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Struct fields follow the same omission rules as the text encoder.
///
/// # Examples
///
/// ```rust
/// use serde_omitjson::{omitempty, to_value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Filter {
///     #[serde(with = "omitempty")]
///     tag: Option<String>,
/// }
///
/// let value = to_value(&Filter { tag: None }).unwrap();
/// assert_eq!(value.as_object().map(|o| o.len()), Some(0));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` as compact JSON into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_omitjson::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &["a", "b"]).unwrap();
/// assert_eq!(buffer, br#"["a","b"]"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, JsonOptions::default())
}

/// Serialize any `T: Serialize` as JSON into a writer with custom options.
///
/// Nothing is written if serialization fails.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: JsonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let json = to_string_with_options(value, options)?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Serialize, Serializer as _};

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    fn user() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        }
    }

    #[test]
    fn test_serialize_point() {
        assert_eq!(to_string(&Point { x: 1, y: -2 }).unwrap(), r#"{"x":1,"y":-2}"#);
    }

    #[test]
    fn test_matches_serde_json() {
        let ours = to_string(&user()).unwrap();
        let theirs = serde_json::to_string(&user()).unwrap();
        assert_eq!(ours, theirs);

        let ours = to_string_pretty(&user()).unwrap();
        let theirs = serde_json::to_string_pretty(&user()).unwrap();
        assert_eq!(ours, theirs);
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(value.get("x"), Some(&Value::Number(Number::Int(1))));
        assert_eq!(value.get("y"), Some(&Value::Number(Number::Int(2))));
    }

    #[test]
    fn test_to_vec_and_writer_agree() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &user()).unwrap();
        assert_eq!(buffer, to_vec(&user()).unwrap());
        assert_eq!(
            to_vec_pretty(&user()).unwrap(),
            to_string_pretty(&user()).unwrap().into_bytes()
        );
    }

    #[test]
    fn test_writer_failure_is_io_error() {
        struct Full;

        impl io::Write for Full {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = to_writer(Full, &1).unwrap_err();
        assert!(matches!(err, Error::Io(msg) if msg.contains("disk full")));
    }

    #[test]
    fn test_value_serializer_is_reusable() {
        let value = ValueSerializer.serialize_str("s").unwrap();
        assert_eq!(value, Value::from("s"));
    }
}
