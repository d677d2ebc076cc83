//! Identifier and timestamp types.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Number of hex characters in a [`RecordId`].
pub const RECORD_ID_LEN: usize = 24;

/// Per-process counter mixed into generated ids.
static ID_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Returns `true` iff `candidate` has the shape of a record identifier:
/// exactly 24 ASCII hex digits.
///
/// This is a structural check only. It says nothing about whether a record
/// with that id exists.
pub fn is_valid_id(candidate: &str) -> bool {
    candidate.len() == RECORD_ID_LEN && candidate.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Identifier of a stored record.
///
/// Twelve bytes rendered as 24 lowercase hex characters: a 4-byte big-endian
/// Unix timestamp (seconds), 5 random bytes and a 3-byte counter. Ids created
/// in later seconds sort after earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        let secs = chrono::Utc::now().timestamp().clamp(0, i64::from(u32::MAX)) as u32;
        let entropy: [u8; 5] = rand::random();
        let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00FF_FFFF;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&entropy);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);

        let hex = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Self(hex)
    }

    /// Parse an identifier, normalizing hex digits to lowercase.
    ///
    /// Returns `None` if `candidate` fails [`is_valid_id`].
    pub fn parse(candidate: &str) -> Option<Self> {
        is_valid_id(candidate).then(|| Self(candidate.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when a string does not have the shape of a [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record id '{0}', expected {RECORD_ID_LEN} hex characters")]
pub struct InvalidRecordId(pub String);

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidRecordId(s.to_string()))
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_pass_shape_check() {
        let id = RecordId::generate();
        assert_eq!(id.as_str().len(), RECORD_ID_LEN);
        assert!(is_valid_id(id.as_str()));
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn shape_check_rejects_wrong_length_and_non_hex() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("invalid-id"));
        assert!(!is_valid_id("65a1f0c2e4b0a1b2c3d4e5f")); // 23 chars
        assert!(!is_valid_id("65a1f0c2e4b0a1b2c3d4e5f6a")); // 25 chars
        assert!(!is_valid_id("65a1f0c2e4b0a1b2c3d4e5fz"));
    }

    #[test]
    fn shape_check_accepts_mixed_case_hex() {
        assert!(is_valid_id("65A1F0C2E4B0A1B2C3D4E5F6"));
        assert!(is_valid_id("65a1f0c2e4b0a1b2c3d4e5f6"));
    }

    #[test]
    fn parse_normalizes_to_lowercase() {
        let id = RecordId::parse("65A1F0C2E4B0A1B2C3D4E5F6").unwrap();
        assert_eq!(id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn deserialize_rejects_bad_shape() {
        let err = serde_json::from_str::<RecordId>("\"not-an-id\"").unwrap_err();
        assert!(err.to_string().contains("invalid record id"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RecordId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"65a1f0c2e4b0a1b2c3d4e5f6\""
        );
    }
}
