//! # Status Check Records
//!
//! A status check is a flat heartbeat record reported by a client. The service
//! assigns the identifier and timestamp; callers only supply a name.
//!
//! Records are persisted as `{id, client_name, timestamp}` documents where the
//! timestamp is an RFC 3339 string. The same shape is used on the wire.
//!
//! Reading is more lenient than writing: a stored timestamp may also be an
//! ISO-8601 string without an offset (taken as UTC) or a BSON date.

use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// A stored document could not be turned back into a [`StatusCheck`].
#[derive(Debug, Error)]
#[error("malformed status check document: {0}")]
pub struct MalformedRecord(#[from] bson::de::Error);

/// A single status check record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    /// Random UUID v4, assigned at creation
    pub id: String,
    /// Name supplied by the caller
    pub client_name: String,
    /// Creation time on the service clock, in UTC
    #[serde(with = "timestamp")]
    pub timestamp: OffsetDateTime,
}

/// Request payload for creating a status check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheck {
    /// Builds a new record for `client_name` with a fresh id and the current
    /// UTC time.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// Rebuilds a record from its persisted document.
    ///
    /// The store's own `_id` and any unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedRecord`] if `id`, `client_name` or `timestamp` is
    /// missing or has the wrong type.
    pub fn from_document(document: Document) -> Result<Self, MalformedRecord> {
        Ok(bson::from_document(document)?)
    }

    /// Serializes the record into its persisted document layout.
    pub fn to_document(&self) -> Result<Document, bson::ser::Error> {
        bson::to_document(self)
    }
}

impl From<StatusCheckCreate> for StatusCheck {
    fn from(input: StatusCheckCreate) -> Self {
        Self::new(input.client_name)
    }
}

/// RFC 3339 on output; RFC 3339, offset-less ISO-8601 or BSON date on input.
mod timestamp {
    use mongodb::bson::Bson;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::{
        OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
        macros::format_description,
    };

    pub fn serialize<S: Serializer>(
        value: &OffsetDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<OffsetDateTime, D::Error> {
        match Bson::deserialize(deserializer)? {
            Bson::String(text) => parse(&text).map_err(D::Error::custom),
            Bson::DateTime(date) => {
                OffsetDateTime::from_unix_timestamp_nanos(
                    i128::from(date.timestamp_millis()) * 1_000_000,
                )
                .map_err(D::Error::custom)
            }
            other => Err(D::Error::custom(format!(
                "expected an ISO-8601 string or a date, found {:?}",
                other.element_type()
            ))),
        }
    }

    fn parse(text: &str) -> Result<OffsetDateTime, time::error::Parse> {
        OffsetDateTime::parse(text, &Rfc3339).or_else(|_| {
            PrimitiveDateTime::parse(
                text,
                format_description!(
                    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
                ),
            )
            .map(PrimitiveDateTime::assume_utc)
        })
    }
}
