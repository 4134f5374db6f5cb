pub mod file;
mod history;
mod movement;
mod reference;
mod request;
mod status;
mod verify;

pub use file::StagedFile;
pub use history::{HistoryItem, Verdict};
pub use movement::{Movement, UnknownMovement};
pub use reference::{Reference, ReferenceSet};
pub use request::{IdRequest, MutationAck, SetMovementRequest};
pub use status::StatusSnapshot;
pub use verify::{VerifyOrigin, VerifyOutcome, VerifyPayload};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend row id of a reference or history record.
///
/// Serialized as a JSON integer. Deserialization also accepts numeric
/// strings, which some older rows carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_id(deserializer).map(RecordId)
    }
}

/// Helper to deserialize id as either integer or numeric string
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or numeric string")
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::custom(format!("id {} out of range", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<i64, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_from_integer() {
        let id: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(id, RecordId(42));
    }

    #[test]
    fn test_record_id_from_numeric_string() {
        let id: RecordId = serde_json::from_str(r#""17""#).unwrap();
        assert_eq!(id, RecordId(17));
    }

    #[test]
    fn test_record_id_rejects_text() {
        assert!(serde_json::from_str::<RecordId>(r#""abc""#).is_err());
    }

    #[test]
    fn test_record_id_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&RecordId(5)).unwrap(), "5");
        assert_eq!(RecordId(5).to_string(), "5");
    }
}
