//! Custom encoders with an explicit zero-state result.
//!
//! Implementing `Serialize` by hand and calling
//! [`empty::serialize_zero`](crate::empty::serialize_zero) works, but the
//! zero state is easy to forget on one branch. A [`Marshaler`] instead returns
//! a [`Marshaled`], which always holds the encoded value and says explicitly
//! whether that value is the type's zero state.
//!
//! ```rust
//! use serde::{Serialize, Serializer};
//! use serde_omitjson::{marshal, omitempty, to_string, Marshaled, Marshaler, Result};
//!
//! struct Version { major: u16, minor: u16 }
//!
//! impl Marshaler for Version {
//!     fn marshal_json(&self) -> Result<Marshaled> {
//!         let text = format!("{}.{}", self.major, self.minor);
//!         if self.major == 0 && self.minor == 0 {
//!             Ok(Marshaled::zero(text))
//!         } else {
//!             Ok(Marshaled::new(text))
//!         }
//!     }
//! }
//!
//! impl Serialize for Version {
//!     fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
//!         marshal::serialize(self, serializer)
//!     }
//! }
//!
//! #[derive(Serialize)]
//! struct Package {
//!     name: &'static str,
//!     #[serde(with = "omitempty")]
//!     version: Version,
//! }
//!
//! let pkg = Package { name: "core", version: Version { major: 0, minor: 0 } };
//! assert_eq!(to_string(&pkg).unwrap(), r#"{"name":"core"}"#);
//!
//! let pkg = Package { name: "core", version: Version { major: 1, minor: 2 } };
//! assert_eq!(to_string(&pkg).unwrap(), r#"{"name":"core","version":"1.2"}"#);
//! ```

use crate::{empty, Error, Result, Value};
use serde::{ser, Serialize, Serializer};

/// A type that produces its own JSON representation.
pub trait Marshaler {
    /// Encodes `self`.
    ///
    /// # Errors
    ///
    /// An `Err` aborts encoding of whatever contains the value, whatever
    /// omission policy the enclosing field has.
    fn marshal_json(&self) -> Result<Marshaled>;
}

/// The result of [`Marshaler::marshal_json`].
#[derive(Clone, Debug, PartialEq)]
pub struct Marshaled {
    value: Value,
    zero: bool,
}

impl Marshaled {
    /// An ordinary encoded value.
    pub fn new(value: impl Into<Value>) -> Self {
        Marshaled {
            value: value.into(),
            zero: false,
        }
    }

    /// The encoded zero state of the type.
    ///
    /// `value` is still written wherever the field is not omitted, so it must
    /// be the complete representation of the zero state.
    pub fn zero(value: impl Into<Value>) -> Self {
        Marshaled {
            value: value.into(),
            zero: true,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.zero
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl Serialize for Marshaled {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.zero {
            empty::serialize_zero(&self.value, serializer)
        } else {
            self.value.serialize(serializer)
        }
    }
}

/// Serializes a [`Marshaler`] through any serde serializer.
///
/// Usable as the body of a `Serialize` impl or with
/// `#[serde(serialize_with = "serde_omitjson::marshal::serialize")]`.
///
/// # Errors
///
/// A failure from `marshal_json` is reported through `S::Error::custom`
/// carrying the original reason.
pub fn serialize<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: ?Sized + Marshaler,
    S: Serializer,
{
    let marshaled = value.marshal_json().map_err(|e| match e {
        Error::Custom(reason) => <S::Error as ser::Error>::custom(reason),
        other => <S::Error as ser::Error>::custom(other),
    })?;
    marshaled.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Marshaler for Broken {
        fn marshal_json(&self) -> Result<Marshaled> {
            Err(Error::custom("sensor offline"))
        }
    }

    #[test]
    fn test_accessors() {
        let m = Marshaled::zero("");
        assert!(m.is_zero());
        assert_eq!(m.value(), &Value::from(""));
        assert!(!Marshaled::new(1).is_zero());
        assert_eq!(Marshaled::new(1).into_value(), Value::from(1));
    }

    #[test]
    fn test_failure_reaches_foreign_serializer() {
        #[derive(Serialize)]
        struct Reading {
            #[serde(serialize_with = "crate::marshal::serialize")]
            value: Broken,
        }

        let err = serde_json::to_string(&Reading { value: Broken }).unwrap_err();
        assert!(err.to_string().contains("sensor offline"));
    }

    #[test]
    fn test_zero_is_plain_value_for_serde_json() {
        let json = serde_json::to_string(&Marshaled::zero(vec![Value::Null])).unwrap();
        assert_eq!(json, "[null]");
    }
}
