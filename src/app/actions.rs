//! Session and collection actions for the App.
//!
//! Every action is a synchronous local mutation plus, at most, dispatched
//! backend calls. Destructive actions ask the confirmer first.

use tracing::{debug, info};

use crate::error::FlowError;
use crate::models::{Movement, RecordId, StagedFile};
use crate::state::Mode;

use super::{App, AppMessage};

impl App {
    /// Select `movement`: the displayed references are discarded and
    /// reloaded, and the backend is told (fire-and-forget).
    pub fn set_movement(&mut self, movement: Movement) {
        info!(movement = %movement, "Movement selected");
        self.session = self.session.with_movement(movement);
        self.references.discard();
        self.reload_references();

        let gateway = self.gateway.clone();
        self.dispatcher.spawn(async move {
            AppMessage::MovementAcknowledged {
                movement,
                result: gateway.set_movement(movement).await,
            }
        });
    }

    /// Switch the active view region. Only the poller's effect is gated.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.session.mode != mode {
            info!(mode = %mode, "Mode changed");
        }
        self.session = self.session.with_mode(mode);
        self.mode_tx.send_replace(mode);
    }

    pub fn reload_references(&mut self) {
        self.references
            .load(&self.gateway, &mut self.dispatcher, self.session.movement);
    }

    pub fn reload_history(&mut self) {
        self.history.load(&self.gateway, &mut self.dispatcher);
    }

    /// Upload reference images for the current movement.
    ///
    /// Returns `false` for an empty batch or while another batch is
    /// uploading; neither sends anything.
    pub fn upload_references(&mut self, files: Vec<StagedFile>) -> bool {
        if self.references.is_uploading() {
            debug!("Reference upload already in flight, batch ignored");
            return false;
        }
        let movement = self.session.movement;
        let started = self
            .references
            .upload(&self.gateway, &mut self.dispatcher, movement, files);
        if !started {
            debug!("Empty reference batch ignored");
        }
        started
    }

    /// Delete a reference after confirmation.
    pub fn delete_reference(&mut self, id: RecordId) -> Result<(), FlowError> {
        self.references.delete(
            &self.gateway,
            &mut self.dispatcher,
            self.confirmer.as_ref(),
            id,
        )
    }

    /// Delete one history record. No confirmation.
    pub fn delete_history_item(&mut self, id: RecordId) {
        self.history
            .delete_item(&self.gateway, &mut self.dispatcher, id);
    }

    /// Clear all history after confirmation.
    pub fn clear_history(&mut self) -> Result<(), FlowError> {
        self.history
            .clear_all(&self.gateway, &mut self.dispatcher, self.confirmer.as_ref())
    }
}
