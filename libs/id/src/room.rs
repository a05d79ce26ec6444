//! Room identifiers.

use std::borrow::Borrow;

use crate::IdError;

/// A classroom identifier such as `A-101` or `LAB.2`.
///
/// Unlike [`crate::RequestId`] this is a label chosen by whoever maintains the
/// room catalog. Parsing trims surrounding whitespace and then requires
/// 1..=[`RoomId::MAX_LEN`] characters drawn from ASCII alphanumerics and
/// `-`, `_`, `.`. The IDs `.` and `..` are reserved, so every valid ID is a
/// single URL path segment that needs no escaping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(String);

impl RoomId {
    /// Maximum length of a room ID, in characters.
    pub const MAX_LEN: usize = 64;

    /// Parses and validates a room ID.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IdError::Empty);
        }

        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(IdError::TooLong {
                max: Self::MAX_LEN,
                actual: len,
            });
        }

        if let Some((position, ch)) = trimmed.chars().enumerate().find(|(_, c)| !is_allowed(*c)) {
            return Err(IdError::InvalidCharacter { ch, position });
        }

        if matches!(trimmed, "." | "..") {
            return Err(IdError::Reserved(trimmed.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID, returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for RoomId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoomId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl AsRef<str> for RoomId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for RoomId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RoomId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
