//! Strong type definitions for Quizbank.
//!
//! Identifiers are newtypes so they cannot be confused with other byte strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdError;

/// Length of a [`QuestionId`] in bytes.
pub const QUESTION_ID_LEN: usize = 16;

/// A 16-byte question identifier.
///
/// Drawn at random when a question is constructed and never reassigned.
/// It is the only key the store uses for lookup and deletion.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct QuestionId(pub [u8; QUESTION_ID_LEN]);

impl QuestionId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(rand::random())
    }

    /// Create a QuestionId from raw bytes.
    pub const fn from_bytes(bytes: [u8; QUESTION_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; QUESTION_ID_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, IdError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != QUESTION_ID_LEN {
            return Err(IdError::Length {
                expected: QUESTION_ID_LEN,
                got: bytes.len(),
            });
        }
        let mut arr = [0u8; QUESTION_ID_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", &self.to_hex()[..8])
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for QuestionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.to_hex()
    }
}

impl TryFrom<String> for QuestionId {
    type Error = IdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<[u8; QUESTION_ID_LEN]> for QuestionId {
    fn from(bytes: [u8; QUESTION_ID_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_hex_roundtrip() {
        let id = QuestionId::from_bytes([0x42; QUESTION_ID_LEN]);
        let recovered = QuestionId::from_hex(&id.to_hex()).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn test_question_id_display_is_full_hex() {
        let id = QuestionId::from_bytes([0xab; QUESTION_ID_LEN]);
        assert_eq!(id.to_string(), "ab".repeat(QUESTION_ID_LEN));
    }

    #[test]
    fn test_question_id_debug() {
        let id = QuestionId::from_bytes([0xcd; QUESTION_ID_LEN]);
        assert_eq!(format!("{:?}", id), "QuestionId(cdcdcdcd)");
    }

    #[test]
    fn test_question_id_wrong_length() {
        let result = QuestionId::from_hex("abcd");
        assert_eq!(
            result,
            Err(IdError::Length {
                expected: QUESTION_ID_LEN,
                got: 2
            })
        );
    }

    #[test]
    fn test_question_id_not_hex() {
        assert!(matches!(
            "zz".repeat(QUESTION_ID_LEN).parse::<QuestionId>(),
            Err(IdError::Hex(_))
        ));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(QuestionId::generate(), QuestionId::generate());
    }

    #[test]
    fn test_question_id_serializes_as_hex_string() {
        let id = QuestionId::from_bytes([0x01; QUESTION_ID_LEN]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(QUESTION_ID_LEN)));

        let back: QuestionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
