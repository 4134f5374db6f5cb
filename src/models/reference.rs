//! Reference images stored by the backend.

use serde::{Deserialize, Serialize};

use super::{Movement, RecordId};

/// A stored, server-annotated image of a correct pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub id: RecordId,
    /// Annotated (skeleton-drawn) image, relative to the uploads root
    pub filepath_annotated: String,
    /// Original upload, relative to the uploads root
    #[serde(default)]
    pub filepath_orig: Option<String>,
    #[serde(default, rename = "movement_type")]
    pub movement: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// The reference list of exactly one movement.
///
/// Replaced wholesale on every load; never merged with another movement's list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSet {
    pub movement: Movement,
    pub items: Vec<Reference>,
}

impl ReferenceSet {
    pub fn new(movement: Movement, items: Vec<Reference>) -> Self {
        Self { movement, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Reference> {
        self.items.iter().find(|r| r.id == id)
    }
}
