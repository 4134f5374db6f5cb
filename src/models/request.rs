//! Request and acknowledgement bodies for the control endpoints.

use serde::{Deserialize, Serialize};

use super::{Movement, RecordId};

/// Body of `POST /set_movement`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetMovementRequest {
    pub movement: Movement,
}

/// Body of the id-addressed delete endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdRequest {
    pub id: RecordId,
}

/// `{success, count?, error?}` acknowledgement of a mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}
