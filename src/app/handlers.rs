//! Message handling for the App.

use tracing::{debug, warn};

use super::{App, AppMessage};

impl App {
    /// Apply the result of a backend call or poll tick.
    pub fn handle_message(&mut self, msg: AppMessage) {
        debug!(message = msg.name(), "Handling message");
        match msg {
            AppMessage::MovementAcknowledged { movement, result } => {
                // Local selection stays authoritative
                if let Err(e) = result {
                    warn!(movement = %movement, error = %e, "Backend did not take movement change");
                }
            }
            AppMessage::ReferencesLoaded { movement, result } => {
                let current = self.session.movement;
                self.references.apply_loaded(current, movement, result);
            }
            AppMessage::ReferenceDeleted { id, result } => {
                if self.references.apply_deleted(id, result) {
                    self.reload_references();
                }
            }
            AppMessage::ReferencesUploaded { movement, result } => {
                if self.references.apply_uploaded(movement, result) {
                    self.reload_references();
                }
            }
            AppMessage::HistoryLoaded(result) => {
                self.history.apply_loaded(result);
            }
            AppMessage::HistoryMutated { mutation, result } => {
                self.history.apply_mutated(mutation, result);
                self.reload_history();
            }
            AppMessage::VerifyFinished { attempt, result } => {
                self.apply_verify(attempt, result);
            }
            AppMessage::StatusUpdated(snapshot) => {
                if self.live.apply(snapshot) {
                    debug!("Live verification reported, reloading history");
                    self.reload_history();
                }
            }
        }
    }
}
