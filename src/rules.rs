//! Encoding rules
//!
//! This module documents how values are written by this library. It contains
//! no code.
//!
//! # Values
//!
//! | Rust / serde data model | JSON |
//! |-------------------------|------|
//! | `bool` | `true` / `false` |
//! | integers, including `i128`/`u128` and [`Number::Big`](crate::Number::Big) | decimal digits |
//! | finite `f32` / `f64` | shortest round-trip form in serde_json's notation (`1.0`, `1e+16`, `0.00001`) |
//! | `NaN`, `inf`, `-inf` | error: [`Error::UnsupportedValue`](crate::Error::UnsupportedValue) |
//! | `char`, `str` | quoted string |
//! | bytes | array of numbers |
//! | `None`, `()`, unit struct | `null` |
//! | `Some(v)`, newtype struct | `v` |
//! | sequence, tuple, tuple struct | array |
//! | map, struct | object, members in serialization order |
//! | unit variant | `"Variant"` |
//! | newtype / tuple / struct variant | `{"Variant": payload}` |
//!
//! ## Strings
//!
//! `"` and `\` are escaped with a backslash. Control characters use `\b`,
//! `\f`, `\n`, `\r`, `\t` where one exists and `\u00XX` otherwise. With
//! [`JsonOptions::escape_html`](crate::JsonOptions::escape_html) set, `<`,
//! `>`, `&`, U+2028 and U+2029 are written as `\u003c`, `\u003e`, `\u0026`,
//! `\u2028` and `\u2029`.
//!
//! ## Map keys
//!
//! Keys that serialize as strings, chars, integers or bools become object
//! keys. Integer and bool keys are written as their decimal or literal text
//! inside quotes. Any other key is an error:
//! [`Error::KeyMustBeString`](crate::Error::KeyMustBeString).
//!
//! # Layout
//!
//! Compact output has no whitespace at all. Pretty output puts every array
//! element and object member on its own line, indented by
//! [`JsonOptions::indent`](crate::JsonOptions::indent) spaces per level, with
//! `": "` after each key. Empty arrays and objects stay `[]` and `{}`. The
//! result is byte-identical to `serde_json::to_string` and
//! `serde_json::to_string_pretty` for data that uses neither the zero-state
//! signal nor the omission policy.
//!
//! # Empty values
//!
//! A struct field value is **empty** when any of the following holds:
//!
//! - it is `false`, a numeric zero, `""`, `None`, `()`, a unit struct, an
//!   empty sequence, an empty map or empty bytes (intrinsic emptiness);
//! - its type serialized it through
//!   [`empty::serialize_zero`](crate::empty::serialize_zero), directly or via
//!   [`Marshaled::zero`](crate::Marshaled::zero) (signalled emptiness).
//!
//! Structs, tuple structs and enum variants are never intrinsically empty,
//! whatever they contain. A `char` is never empty either, `'\0'` included:
//! it is written as a one-character string, not a number.
//!
//! Newtype structs are empty exactly when their payload is. `Some(v)` is
//! empty only when `v` signalled its zero state, so `Some(false)`, `Some(0)`
//! and `Some("")` are written while `None` is dropped.
//!
//! # Omission
//!
//! A struct field is left out of its object when it carries the
//! [`omitempty`](crate::omitempty) policy **and** its value is empty. In every
//! other case the value is written, including the zero representation of a
//! signalling type.
//!
//! The decision is local to one field:
//!
//! - only the field value itself is inspected; an empty value inside a
//!   nested struct is decided by that struct's own fields;
//! - sequence elements and map values are never omitted, so an array of
//!   unset timestamps keeps its length;
//! - the policy of an outer field does not apply to the fields of the value
//!   it holds.
//!
//! Errors are never affected by the policy. A failing `Serialize` impl or
//! [`Marshaler`](crate::Marshaler) aborts the whole encoding, and nothing is
//! written to the output writer.
//!
//! # Other serializers
//!
//! The zero-state signal and the omission policy are serde newtype structs
//! with reserved names. Serializers that do not know these names (serde_json,
//! TOML, bincode, ...) encode the wrapped value as if neither existed.
//!
//! # Limitations
//!
//! Fields of a `#[serde(flatten)]` struct are serialized through serde's map
//! interface and are therefore not subject to the policy.
