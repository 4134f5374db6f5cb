//! Reference collection for the current movement.
//!
//! The server is authoritative: every successful mutation is followed by a
//! full reload, never an optimistic local edit.

use tracing::{debug, info, warn};

use super::dispatch::Dispatcher;
use super::messages::AppMessage;
use crate::error::{FlowError, GatewayError};
use crate::gateway::BackendGateway;
use crate::models::{Movement, RecordId, Reference, ReferenceSet, StagedFile};
use crate::state::RefUploadStatus;
use crate::traits::{ConfirmPrompt, Confirmer};

#[derive(Debug, Default)]
pub struct ReferenceSync {
    current: Option<ReferenceSet>,
    upload_status: Option<RefUploadStatus>,
}

impl ReferenceSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ReferenceSet> {
        self.current.as_ref()
    }

    pub fn upload_status(&self) -> Option<&RefUploadStatus> {
        self.upload_status.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload_status
            .as_ref()
            .is_some_and(RefUploadStatus::is_in_flight)
    }

    /// Drop the displayed list, e.g. when the movement changes.
    pub fn discard(&mut self) {
        self.current = None;
    }

    /// Fetch every reference of `movement`.
    pub fn load(&self, gateway: &BackendGateway, dispatcher: &mut Dispatcher, movement: Movement) {
        let gateway = gateway.clone();
        dispatcher.spawn(async move {
            AppMessage::ReferencesLoaded {
                movement,
                result: gateway.get_references(movement).await,
            }
        });
    }

    /// Upload a batch of images for `movement`. An empty batch does nothing.
    pub fn upload(
        &mut self,
        gateway: &BackendGateway,
        dispatcher: &mut Dispatcher,
        movement: Movement,
        files: Vec<StagedFile>,
    ) -> bool {
        if files.is_empty() {
            return false;
        }
        self.upload_status = Some(RefUploadStatus::InFlight);
        let gateway = gateway.clone();
        dispatcher.spawn(async move {
            AppMessage::ReferencesUploaded {
                movement,
                result: gateway.upload_references(movement, &files).await,
            }
        });
        true
    }

    /// Delete a reference after the user confirms.
    pub fn delete(
        &self,
        gateway: &BackendGateway,
        dispatcher: &mut Dispatcher,
        confirmer: &dyn Confirmer,
        id: RecordId,
    ) -> Result<(), FlowError> {
        if !confirmer.confirm(ConfirmPrompt::DeleteReference) {
            debug!(id = %id, "Reference delete declined");
            return Err(FlowError::UserAborted);
        }
        let gateway = gateway.clone();
        dispatcher.spawn(async move {
            AppMessage::ReferenceDeleted {
                id,
                result: gateway.delete_reference(id).await,
            }
        });
        Ok(())
    }

    /// Replace the list with a loaded one if it belongs to `current`.
    ///
    /// Returns whether the list was replaced. Failures keep the old list.
    pub fn apply_loaded(
        &mut self,
        current: Movement,
        movement: Movement,
        result: Result<Vec<Reference>, GatewayError>,
    ) -> bool {
        if movement != current {
            debug!(
                loaded = %movement,
                current = %current,
                "Discarding references for a movement no longer selected"
            );
            return false;
        }
        match result {
            Ok(items) => {
                debug!(movement = %movement, count = items.len(), "References loaded");
                self.current = Some(ReferenceSet::new(movement, items));
                true
            }
            Err(e) => {
                warn!(movement = %movement, error = %e, kind = %e.kind(), "Failed to load references");
                false
            }
        }
    }

    /// Returns whether the list must be reloaded.
    pub fn apply_deleted(&mut self, id: RecordId, result: Result<(), GatewayError>) -> bool {
        match result {
            Ok(()) => {
                info!(id = %id, "Reference deleted");
                true
            }
            Err(e) => {
                warn!(id = %id, error = %e, kind = %e.kind(), "Reference delete failed");
                false
            }
        }
    }

    /// Update the status line. Returns whether the list must be reloaded.
    pub fn apply_uploaded(&mut self, movement: Movement, result: Result<u64, GatewayError>) -> bool {
        match result {
            Ok(count) => {
                info!(movement = %movement, count, "References uploaded");
                self.upload_status = Some(RefUploadStatus::Saved(count));
                true
            }
            Err(GatewayError::Application { message, .. }) => {
                warn!(movement = %movement, error = %message, "Reference upload rejected");
                self.upload_status = Some(RefUploadStatus::Rejected(Some(message)));
                false
            }
            Err(e) => {
                warn!(movement = %movement, error = %e, "Reference upload failed");
                self.upload_status = Some(RefUploadStatus::Failed);
                false
            }
        }
    }
}
