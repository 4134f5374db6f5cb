//! Client controller.
//!
//! [`App`] is the only owner of mutable client state. User actions mutate it
//! directly or dispatch backend calls; call results come back as
//! [`AppMessage`]s and are applied by [`App::handle_message`]. The surface
//! reads a [`ViewModel`] built by the presentation reconciler.
//!
//! - [`Dispatcher`] - spawned backend calls
//! - [`StatusPoller`] - live status polling task
//! - [`ReferenceSync`] / [`HistorySync`] - the two server-owned collections

mod actions;
mod dispatch;
mod handlers;
mod history_sync;
mod messages;
mod poller;
mod reference_sync;
mod upload_flow;

pub use dispatch::Dispatcher;
pub use history_sync::HistorySync;
pub use messages::{AppMessage, HistoryMutation};
pub use poller::{PollerHandle, StatusPoller, TickOutcome};
pub use reference_sync::ReferenceSync;

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

use crate::error::FlowError;
use crate::gateway::BackendGateway;
use crate::models::{RecordId, ReferenceSet, StatusSnapshot};
use crate::startup::ClientConfig;
use crate::state::{LiveStatus, Mode, SessionState, UploadFlow};
use crate::traits::Confirmer;
use crate::view_state::{reconcile, ModalRequest, SurfaceCaps, ViewInputs, ViewModel};

/// Alert raised when a verification fails.
pub const VERIFY_FAILED_ALERT: &str = "Verification failed.";

/// Pose verification client controller.
pub struct App {
    config: ClientConfig,
    gateway: BackendGateway,
    confirmer: Arc<dyn Confirmer>,
    session: SessionState,
    /// Publishes the mode to the status poller
    mode_tx: watch::Sender<Mode>,
    upload: UploadFlow,
    live: LiveStatus,
    references: ReferenceSync,
    history: HistorySync,
    modal: Option<ModalRequest>,
    alerts: VecDeque<String>,
    dispatcher: Dispatcher,
    message_rx: mpsc::UnboundedReceiver<AppMessage>,
    poller: Option<PollerHandle>,
}

impl App {
    pub fn new(
        config: ClientConfig,
        gateway: BackendGateway,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        let session = SessionState::new(config.initial_movement, config.initial_mode);
        let (mode_tx, _) = watch::channel(session.mode);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            config,
            gateway,
            confirmer,
            session,
            mode_tx,
            upload: UploadFlow::new(),
            live: LiveStatus::new(),
            references: ReferenceSync::new(),
            history: HistorySync::new(),
            modal: None,
            alerts: VecDeque::new(),
            dispatcher: Dispatcher::new(message_tx),
            message_rx,
            poller: None,
        }
    }

    /// Load history and references, then start the status poller.
    pub fn start(&mut self) {
        self.load_initial();
        self.start_poller();
    }

    /// Initial loads of history and the current movement's references.
    pub fn load_initial(&mut self) {
        self.reload_history();
        self.reload_references();
    }

    /// Spawn the session-long status poller. Does nothing if already running.
    pub fn start_poller(&mut self) {
        if self.poller.is_some() {
            return;
        }
        let poller = self.status_poller();
        self.poller = Some(poller.spawn(self.config.poll_interval()));
    }

    /// Run a single poll tick inline; the snapshot is applied on `settle`.
    pub async fn poll_once(&mut self) -> TickOutcome {
        self.status_poller().tick().await
    }

    fn status_poller(&self) -> StatusPoller {
        StatusPoller::new(
            self.gateway.clone(),
            self.mode_tx.subscribe(),
            self.dispatcher.sender(),
        )
    }

    /// Handle to the running poller, if started.
    pub fn poller(&self) -> Option<&PollerHandle> {
        self.poller.as_ref()
    }

    /// Apply queued messages and wait for in-flight calls until quiet.
    pub async fn settle(&mut self) {
        loop {
            while let Ok(message) = self.message_rx.try_recv() {
                self.handle_message(message);
            }
            if !self.dispatcher.join_next().await {
                match self.message_rx.try_recv() {
                    Ok(message) => self.handle_message(message),
                    Err(_) => break,
                }
            }
        }
    }

    /// Wait for the next message or finished call and apply it.
    pub async fn process_next(&mut self) {
        tokio::select! {
            Some(message) = self.message_rx.recv() => self.handle_message(message),
            true = self.dispatcher.join_next() => {}
            else => {}
        }
    }

    /// Stop the poller and abort in-flight calls.
    pub async fn shutdown(mut self) {
        if let Some(poller) = self.poller.take() {
            poller.shutdown().await;
        }
        self.dispatcher.abort_all();
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn upload(&self) -> &UploadFlow {
        &self.upload
    }

    pub fn references(&self) -> Option<&ReferenceSet> {
        self.references.current()
    }

    pub fn history(&self) -> &HistorySync {
        &self.history
    }

    pub fn live_status(&self) -> Option<&StatusSnapshot> {
        self.live.snapshot()
    }

    pub fn modal(&self) -> Option<ModalRequest> {
        self.modal
    }

    /// Number of backend calls still running.
    pub fn in_flight(&self) -> usize {
        self.dispatcher.in_flight()
    }

    /// Pop the oldest pending alert.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alerts.pop_front()
    }

    pub fn open_reference_modal(&mut self, id: RecordId) -> Result<(), FlowError> {
        if self.references.current().and_then(|set| set.get(id)).is_none() {
            return Err(FlowError::UnknownRecord(id.to_string()));
        }
        self.modal = Some(ModalRequest::Reference(id));
        Ok(())
    }

    pub fn open_history_modal(&mut self, id: RecordId) -> Result<(), FlowError> {
        if self.history.get(id).is_none() {
            return Err(FlowError::UnknownRecord(id.to_string()));
        }
        self.modal = Some(ModalRequest::History(id));
        Ok(())
    }

    /// Open the compare modal for the result in the image panel.
    pub fn open_result_modal(&mut self) -> Result<(), FlowError> {
        if self.upload.result().is_none() {
            return Err(FlowError::InvalidTransition {
                from: self.upload.stage().name(),
                action: "open the result",
            });
        }
        self.modal = Some(ModalRequest::Result);
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Reconcile current state into a view for a surface with `caps`.
    pub fn view(&self, caps: SurfaceCaps) -> ViewModel {
        reconcile(&ViewInputs {
            session: self.session,
            upload: &self.upload,
            status: self.live.snapshot(),
            references: self.references.current(),
            history: self.history.items(),
            ref_upload: self.references.upload_status(),
            modal: self.modal,
            uploads_root: &self.config.uploads_root,
            caps,
        })
    }
}
