//! Verification history collection.
//!
//! Loads are never coalesced: each one overwrites the list with its own full
//! snapshot, last write wins.

use tracing::{debug, warn};

use super::dispatch::Dispatcher;
use super::messages::{AppMessage, HistoryMutation};
use crate::error::{FlowError, GatewayError};
use crate::gateway::BackendGateway;
use crate::models::{HistoryItem, RecordId};
use crate::traits::{ConfirmPrompt, Confirmer};

#[derive(Debug, Default)]
pub struct HistorySync {
    items: Vec<HistoryItem>,
    loads_applied: u64,
}

impl HistorySync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn get(&self, id: RecordId) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of successful loads applied this session.
    pub fn loads_applied(&self) -> u64 {
        self.loads_applied
    }

    pub fn load(&self, gateway: &BackendGateway, dispatcher: &mut Dispatcher) {
        let gateway = gateway.clone();
        dispatcher.spawn(async move { AppMessage::HistoryLoaded(gateway.history().await) });
    }

    /// Delete one record. No confirmation is asked.
    pub fn delete_item(&self, gateway: &BackendGateway, dispatcher: &mut Dispatcher, id: RecordId) {
        let gateway = gateway.clone();
        dispatcher.spawn(async move {
            AppMessage::HistoryMutated {
                mutation: HistoryMutation::DeleteItem(id),
                result: gateway.delete_history_item(id).await,
            }
        });
    }

    /// Delete every record after the user confirms.
    pub fn clear_all(
        &self,
        gateway: &BackendGateway,
        dispatcher: &mut Dispatcher,
        confirmer: &dyn Confirmer,
    ) -> Result<(), FlowError> {
        if !confirmer.confirm(ConfirmPrompt::ClearHistory) {
            debug!("Clear history declined");
            return Err(FlowError::UserAborted);
        }
        let gateway = gateway.clone();
        dispatcher.spawn(async move {
            AppMessage::HistoryMutated {
                mutation: HistoryMutation::ClearAll,
                result: gateway.clear_history().await,
            }
        });
        Ok(())
    }

    /// Replace the list. A failed load keeps the previous one.
    pub fn apply_loaded(&mut self, result: Result<Vec<HistoryItem>, GatewayError>) {
        match result {
            Ok(items) => {
                debug!(count = items.len(), "History loaded");
                self.items = items;
                self.loads_applied += 1;
            }
            Err(e) => warn!(error = %e, kind = %e.kind(), "Failed to load history"),
        }
    }

    /// Log a finished mutation. History is reloaded whatever the outcome.
    pub fn apply_mutated(&mut self, mutation: HistoryMutation, result: Result<(), GatewayError>) {
        match result {
            Ok(()) => debug!(?mutation, "History mutation done"),
            Err(e) => warn!(?mutation, error = %e, "History mutation failed"),
        }
    }
}
