//! The zero-state signal.
//!
//! A type whose notion of "unset" is not something the encoder can see on its
//! own (a timestamp whose unset form is `0001-01-01T00:00:00Z`, an id whose
//! nil form is a string of zeros) reports it by serializing its zero
//! representation through [`serialize_zero`]. The encoder still receives the
//! complete representation. The signal only adds the fact that this is the
//! type's zero state.
//!
//! What happens next depends on where the value is being encoded:
//!
//! | Context | Effect |
//! |---------|--------|
//! | struct field with [`omitempty`](crate::omitempty) | field is dropped |
//! | struct field without the policy | zero representation is emitted |
//! | top level, sequence element, map key or value | zero representation is emitted |
//! | any serializer other than this crate's | zero representation is emitted |
//!
//! The signal is carried as a serde newtype struct named [`EMPTY`]. Serializers
//! that do not know the name treat it like any other newtype struct and encode
//! the wrapped value, so types can adopt the signal without breaking other
//! formats.
//!
//! ## Examples
//!
//! ```rust
//! use serde::{Serialize, Serializer};
//! use serde_omitjson::{empty, omitempty, to_string};
//!
//! struct Revision(u32);
//!
//! impl Serialize for Revision {
//!     fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
//!         if self.0 == 0 {
//!             empty::serialize_zero("r0", serializer)
//!         } else {
//!             serializer.collect_str(&format_args!("r{}", self.0))
//!         }
//!     }
//! }
//!
//! #[derive(Serialize)]
//! struct Document {
//!     #[serde(with = "omitempty")]
//!     revision: Revision,
//!     title: String,
//! }
//!
//! let doc = Document { revision: Revision(0), title: "draft".to_string() };
//! assert_eq!(to_string(&doc).unwrap(), r#"{"title":"draft"}"#);
//! assert_eq!(to_string(&Revision(0)).unwrap(), r#""r0""#);
//! ```

use serde::{Serialize, Serializer};

/// Newtype-struct name that marks a value as its type's zero state.
///
/// `$` cannot appear in a Rust identifier, so no derived `Serialize` impl
/// produces this name by accident.
pub const EMPTY: &str = "$serde_omitjson::private::Empty";

/// Serializes `zero` as the representation of a value in its zero state.
///
/// `zero` must be the full encoding of the zero state: it is what gets
/// written whenever the field is not omitted.
///
/// # Errors
///
/// Returns whatever error `serializer` reports while encoding `zero`.
pub fn serialize_zero<T, S>(zero: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ?Sized + Serialize,
    S: Serializer,
{
    serializer.serialize_newtype_struct(EMPTY, zero)
}

#[inline]
pub(crate) fn is_empty_signal(name: &'static str) -> bool {
    name == EMPTY
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Zero;

    impl Serialize for Zero {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize_zero(&0u8, serializer)
        }
    }

    #[test]
    fn test_foreign_serializer_sees_plain_value() {
        assert_eq!(serde_json::to_string(&Zero).unwrap(), "0");
        assert_eq!(serde_json::to_string(&vec![Zero, Zero]).unwrap(), "[0,0]");
    }

    #[test]
    fn test_signal_name_does_not_match_type_names() {
        assert!(is_empty_signal(EMPTY));
        assert!(!is_empty_signal("Empty"));
        assert!(!is_empty_signal("serde_omitjson::private::Empty"));
    }
}
