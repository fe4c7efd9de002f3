//! The per-field "omit if empty" policy.
//!
//! The policy belongs to the struct that declares the field, not to the
//! field's type. Enable it with the serde `with` attribute:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_omitjson::{omitempty, to_string};
//!
//! #[derive(Serialize)]
//! struct Query {
//!     #[serde(with = "omitempty")]
//!     filter: String,
//!     #[serde(with = "omitempty")]
//!     limit: u32,
//!     page: u32,
//! }
//!
//! let query = Query { filter: String::new(), limit: 0, page: 0 };
//! assert_eq!(to_string(&query).unwrap(), r#"{"page":0}"#);
//! ```
//!
//! or by wrapping the field type in [`OmitEmpty`].
//!
//! A field under the policy is dropped when its value is empty, which is
//! either:
//!
//! - *signalled*: the value serialized itself through
//!   [`empty::serialize_zero`](crate::empty::serialize_zero), or
//! - *intrinsic*: `false`, numeric zero, `""`, `None`, unit, or an empty
//!   sequence, map or byte string.
//!
//! Structs and enum variants are never intrinsically empty. Plain newtype
//! structs are looked through. `Some(_)` is looked through for the signal
//! only: `Some(unset_timestamp)` is dropped, `Some(0)` is written.
//!
//! Anywhere other than a struct field the policy marker is ignored.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Deref, DerefMut};

/// Newtype-struct name that carries the field omission policy.
pub const OMIT_EMPTY: &str = "$serde_omitjson::private::OmitEmpty";

/// Serializes a field with the omission policy enabled.
///
/// # Errors
///
/// Returns whatever error `serializer` reports while encoding `value`.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ?Sized + Serialize,
    S: Serializer,
{
    serializer.serialize_newtype_struct(OMIT_EMPTY, value)
}

/// Deserializes the field as `T`; the policy only affects encoding.
///
/// # Errors
///
/// Returns whatever error `T::deserialize` reports.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer)
}

#[inline]
pub(crate) fn is_omit_empty(name: &'static str) -> bool {
    name == OMIT_EMPTY
}

/// Wrapper that enables the omission policy for the field holding it.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_omitjson::{to_string, OmitEmpty};
///
/// #[derive(Serialize)]
/// struct Labels {
///     tags: OmitEmpty<Vec<String>>,
///     owner: OmitEmpty<Option<String>>,
/// }
///
/// let labels = Labels {
///     tags: OmitEmpty(vec![]),
///     owner: OmitEmpty(Some("ops".to_string())),
/// };
/// assert_eq!(to_string(&labels).unwrap(), r#"{"owner":"ops"}"#);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OmitEmpty<T>(pub T);

impl<T> OmitEmpty<T> {
    /// Unwraps the field value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for OmitEmpty<T> {
    fn from(value: T) -> Self {
        OmitEmpty(value)
    }
}

impl<T> Deref for OmitEmpty<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for OmitEmpty<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: Serialize> Serialize for OmitEmpty<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(&self.0, serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OmitEmpty<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(OmitEmpty)
    }
}
