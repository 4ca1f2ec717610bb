//! Domain types for crew record keeping with strong typing.
//!
//! Newtypes here keep raw database integers and unvalidated strings from
//! leaking into the service layer.

pub mod error;
pub mod status;

pub use error::RecordError;
pub use status::{CrewStatus, StageInfo};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::limits::MAX_PASSPORT_LEN;

/// Unique identifier for a crew member record.
///
/// # Examples
///
/// ```rust
/// use maricheck::domain::CrewId;
///
/// let id = CrewId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CrewId(i32);

impl CrewId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for CrewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CrewId> for i32 {
    fn from(id: CrewId) -> Self {
        id.0
    }
}

impl From<i32> for CrewId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl Serialize for CrewId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for CrewId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i32::deserialize(deserializer)?;
        Ok(Self::new(id))
    }
}

/// A normalized passport number.
///
/// Normalization trims surrounding whitespace and uppercases the input. The
/// result must be 1 to 32 characters of ASCII letters, digits or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Passport(String);

impl Passport {
    /// Normalizes `raw`, returning `None` when the result is not a well-formed
    /// passport number.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_uppercase();

        if normalized.is_empty() || normalized.len() > MAX_PASSPORT_LEN {
            return None;
        }

        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return None;
        }

        Some(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Passport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Passport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
