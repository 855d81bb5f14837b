//! Strongly-typed identifiers for registry entities
//!
//! Entity identifiers are surrogate keys assigned by the registry. They are
//! distinct from the national identity number, which is a natural key owned
//! by the person and validated in `domain_person`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const PERSON_PREFIX: &str = "PER";

/// Registry identifier of a person
///
/// Serialized as the bare UUID and displayed as `PER-<uuid>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", PERSON_PREFIX, self.0)
    }
}

impl FromStr for PersonId {
    type Err = uuid::Error;

    /// Accepts the displayed form or a bare UUID
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid_str = s
            .strip_prefix(PERSON_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}
