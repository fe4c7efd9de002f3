//! Error types for JSON serialization.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: Writing the encoded output failed
//! - **Key Errors**: A map key could not be represented as a JSON string
//! - **Unsupported Values**: A value has no JSON representation (`NaN`, `Infinity`)
//! - **Custom Errors**: Failures reported by a type's own `Serialize` or
//!   [`Marshaler`](crate::Marshaler) implementation
//!
//! The zero-state signal is not an error and never appears here: it travels
//! through the success path of `Serialize` and is resolved by the struct
//! serializer that sees it.
//!
//! ## Examples
//!
//! ```rust
//! use serde_omitjson::{to_string, Error};
//!
//! let result = to_string(&f64::NAN);
//! assert!(matches!(result, Err(Error::UnsupportedValue(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during JSON serialization.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Map key that cannot be turned into a JSON object key
    #[error("Map key must be a string, found {0}")]
    KeyMustBeString(String),

    /// Value with no JSON representation
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an error for a map key that is not a string, integer, char or bool.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_omitjson::Error;
    ///
    /// let err = Error::key_must_be_string("array");
    /// assert!(err.to_string().contains("found array"));
    /// ```
    pub fn key_must_be_string(found: &str) -> Self {
        Error::KeyMustBeString(found.to_string())
    }

    /// Creates an error for a value JSON cannot represent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_omitjson::Error;
    ///
    /// let err = Error::unsupported_value("NaN");
    /// assert_eq!(err.to_string(), "Unsupported value: NaN");
    /// ```
    pub fn unsupported_value(msg: &str) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_omitjson::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
