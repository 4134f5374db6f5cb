//! AppMessage enum for async communication within the controller.

use crate::error::GatewayError;
use crate::models::{HistoryItem, Movement, RecordId, Reference, StatusSnapshot, VerifyOutcome};
use crate::state::AttemptId;

/// History mutation that finished, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMutation {
    DeleteItem(RecordId),
    ClearAll,
}

/// Results of spawned backend calls and poller ticks, applied by `App`.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// `set_movement` finished; informational only
    MovementAcknowledged {
        movement: Movement,
        result: Result<(), GatewayError>,
    },
    /// Reference list for `movement` loaded
    ReferencesLoaded {
        movement: Movement,
        result: Result<Vec<Reference>, GatewayError>,
    },
    ReferenceDeleted {
        id: RecordId,
        result: Result<(), GatewayError>,
    },
    /// Batch upload finished; `Ok` carries the stored count
    ReferencesUploaded {
        movement: Movement,
        result: Result<u64, GatewayError>,
    },
    HistoryLoaded(Result<Vec<HistoryItem>, GatewayError>),
    HistoryMutated {
        mutation: HistoryMutation,
        result: Result<(), GatewayError>,
    },
    VerifyFinished {
        attempt: AttemptId,
        result: Result<VerifyOutcome, GatewayError>,
    },
    /// A live status tick delivered a snapshot
    StatusUpdated(StatusSnapshot),
}

impl AppMessage {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            AppMessage::MovementAcknowledged { .. } => "movement_acknowledged",
            AppMessage::ReferencesLoaded { .. } => "references_loaded",
            AppMessage::ReferenceDeleted { .. } => "reference_deleted",
            AppMessage::ReferencesUploaded { .. } => "references_uploaded",
            AppMessage::HistoryLoaded(_) => "history_loaded",
            AppMessage::HistoryMutated { .. } => "history_mutated",
            AppMessage::VerifyFinished { .. } => "verify_finished",
            AppMessage::StatusUpdated(_) => "status_updated",
        }
    }
}
