// coursehub/src/id.rs

//! Defines `RecordId`, the store-agnostic identifier shared by courses and enrollments.
//!
//! Identifiers are UUIDs. Text that does not parse as one is rejected with
//! `InvalidRecordId`, which callers surface as a format error rather than a
//! "not found".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a valid record identifier")]
pub struct InvalidRecordId {
    pub input: String,
}

impl RecordId {
    /// Generates a fresh identifier. Used by stores that assign ids themselves.
    pub fn generate() -> Self {
        RecordId(Uuid::new_v4())
    }

    pub fn parse(input: &str) -> Result<Self, InvalidRecordId> {
        Uuid::parse_str(input.trim())
            .map(RecordId)
            .map_err(|_| InvalidRecordId {
                input: input.to_string(),
            })
    }

    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// The value a store uses as its primary key.
    pub fn to_storage_key(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        RecordId(value)
    }
}

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
