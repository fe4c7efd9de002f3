//! A timestamp that knows its own unset state.
//!
//! Unset timestamps are encoded as [`ZERO_TIME`], the earliest representable
//! instant, rather than `null`, so consumers that expect a string always get
//! one. Under [`omitempty`](crate::omitempty) an unset timestamp is dropped
//! entirely.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_omitjson::{omitempty, to_string, Timestamp};
//!
//! #[derive(Serialize)]
//! struct Job {
//!     id: u32,
//!     #[serde(with = "omitempty")]
//!     finished_at: Timestamp,
//!     started_at: Timestamp,
//! }
//!
//! let job = Job { id: 1, finished_at: Timestamp::unset(), started_at: Timestamp::unset() };
//! assert_eq!(
//!     to_string(&job).unwrap(),
//!     r#"{"id":1,"started_at":"0001-01-01T00:00:00Z"}"#
//! );
//! ```

use crate::{marshal, Marshaled, Marshaler, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Encoding of an unset [`Timestamp`].
pub const ZERO_TIME: &str = "0001-01-01T00:00:00Z";

/// [`ZERO_TIME`] as seconds since the Unix epoch.
const ZERO_UNIX_SECONDS: i64 = -62_135_596_800;

fn is_zero_instant(dt: &DateTime<Utc>) -> bool {
    dt.timestamp() == ZERO_UNIX_SECONDS && dt.timestamp_subsec_nanos() == 0
}

/// A UTC instant that may be unset.
///
/// The instant [`ZERO_TIME`] itself is the unset state: converting it into a
/// `Timestamp` yields [`Timestamp::unset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    #[must_use]
    pub const fn unset() -> Self {
        Timestamp(None)
    }

    #[must_use]
    pub fn now() -> Self {
        Timestamp(Some(Utc::now()))
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    #[must_use]
    pub const fn get(&self) -> Option<DateTime<Utc>> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        if is_zero_instant(&value) {
            Timestamp(None)
        } else {
            Timestamp(Some(value))
        }
    }
}

impl From<Option<DateTime<Utc>>> for Timestamp {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Timestamp(None), Timestamp::from)
    }
}

impl Marshaler for Timestamp {
    fn marshal_json(&self) -> Result<Marshaled> {
        Ok(match self.0 {
            Some(dt) => Marshaled::new(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => Marshaled::zero(ZERO_TIME),
        })
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        marshal::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text == ZERO_TIME {
            return Ok(Timestamp::unset());
        }
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| Timestamp::from(dt.with_timezone(&Utc)))
            .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", text, e)))
    }
}
