//! Live status polling.
//!
//! A single task runs for the whole session on a fixed 500 ms interval.
//! Before each read it checks the mode published by the controller: in
//! static mode the tick is skipped, not cancelled. Failed ticks are dropped
//! with no retry, and a read that outlives the interval is abandoned when the
//! next tick fires, so a slow backend never stalls the loop or its shutdown.

use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use super::messages::AppMessage;
use crate::gateway::BackendGateway;
use crate::state::Mode;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not in live mode; no network call was made
    Skipped,
    /// A snapshot was sent to the controller
    Delivered,
    /// The call failed or the controller is gone
    Dropped,
}

pub struct StatusPoller {
    gateway: BackendGateway,
    mode_rx: watch::Receiver<Mode>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl StatusPoller {
    pub fn new(
        gateway: BackendGateway,
        mode_rx: watch::Receiver<Mode>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            gateway,
            mode_rx,
            message_tx,
        }
    }

    /// Run one poll.
    pub async fn tick(&mut self) -> TickOutcome {
        let mode = *self.mode_rx.borrow();
        if !mode.is_live() {
            trace!(mode = %mode, "Status tick skipped");
            return TickOutcome::Skipped;
        }

        match self.gateway.status().await {
            Ok(snapshot) => {
                if self
                    .message_tx
                    .send(AppMessage::StatusUpdated(snapshot))
                    .is_err()
                {
                    debug!("Message channel closed, dropping status");
                    return TickOutcome::Dropped;
                }
                TickOutcome::Delivered
            }
            Err(e) => {
                debug!(error = %e, "Status tick dropped");
                TickOutcome::Dropped
            }
        }
    }

    /// Spawn the polling loop.
    pub fn spawn(mut self, interval: Duration) -> PollerHandle {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let join = tokio::spawn(async move {
            tracing::info!("Status poller started (interval: {}ms)", interval.as_millis());

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            'poll: loop {
                tokio::select! {
                    changed = cancel_rx.changed() => {
                        if stop_requested(changed, &cancel_rx) {
                            break;
                        }
                        continue;
                    }
                    _ = ticker.tick() => {}
                }

                // A read still running when the next tick is due is dropped
                // and a fresh one started in its place.
                loop {
                    tokio::select! {
                        changed = cancel_rx.changed() => {
                            if stop_requested(changed, &cancel_rx) {
                                break 'poll;
                            }
                        }
                        outcome = self.tick() => {
                            if outcome == TickOutcome::Dropped && self.message_tx.is_closed() {
                                break 'poll;
                            }
                            break;
                        }
                        _ = ticker.tick() => {
                            debug!("Status tick overran the interval, dropped");
                        }
                    }
                }
            }

            tracing::debug!("Status poller stopped");
        });

        PollerHandle { join, cancel_tx }
    }
}

fn stop_requested(
    changed: Result<(), watch::error::RecvError>,
    cancel_rx: &watch::Receiver<bool>,
) -> bool {
    changed.is_err() || *cancel_rx.borrow()
}

/// Handle to the running poller.
pub struct PollerHandle {
    join: JoinHandle<()>,
    cancel_tx: watch::Sender<bool>,
}

impl PollerHandle {
    /// Ask the loop to stop. An in-flight read is abandoned.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Cancel and wait for the loop to exit.
    pub async fn shutdown(self) {
        self.cancel();
        if let Err(e) = self.join.await {
            tracing::warn!(error = %e, "Status poller task failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use serde_json::json;
    use std::sync::Arc;

    fn poller(
        mode: Mode,
    ) -> (
        StatusPoller,
        MockHttpClient,
        watch::Sender<Mode>,
        mpsc::UnboundedReceiver<AppMessage>,
    ) {
        let mock = MockHttpClient::new();
        let gateway = BackendGateway::new("http://backend.test", Arc::new(mock.clone()));
        let (mode_tx, mode_rx) = watch::channel(mode);
        let (tx, rx) = mpsc::unbounded_channel();
        (StatusPoller::new(gateway, mode_rx, tx), mock, mode_tx, rx)
    }

    #[tokio::test]
    async fn test_static_tick_makes_no_call() {
        let (mut poller, mock, _mode_tx, mut rx) = poller(Mode::Static);

        assert_eq!(poller.tick().await, TickOutcome::Skipped);
        assert!(mock.get_requests().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_live_tick_delivers_snapshot() {
        let (mut poller, mock, _mode_tx, mut rx) = poller(Mode::Live);
        mock.set_response(
            "http://backend.test/status",
            MockResponse::json(json!({"progress": 10, "status": "Holding", "verified": false})),
        );

        assert_eq!(poller.tick().await, TickOutcome::Delivered);
        assert!(matches!(
            rx.try_recv(),
            Ok(AppMessage::StatusUpdated(s)) if s.status == "Holding"
        ));
    }

    #[tokio::test]
    async fn test_failed_tick_is_dropped() {
        let (mut poller, _mock, _mode_tx, mut rx) = poller(Mode::Live);

        assert_eq!(poller.tick().await, TickOutcome::Dropped);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_mode_change_is_seen_by_next_tick() {
        let (mut poller, mock, mode_tx, _rx) = poller(Mode::Live);
        mock.set_default_response(MockResponse::json(json!({})));

        assert_eq!(poller.tick().await, TickOutcome::Delivered);
        mode_tx.send(Mode::Static).unwrap();
        assert_eq!(poller.tick().await, TickOutcome::Skipped);
        mode_tx.send(Mode::Live).unwrap();
        assert_eq!(poller.tick().await, TickOutcome::Delivered);
        assert_eq!(mock.count_requests("GET", "/status"), 2);
    }

    #[tokio::test]
    async fn test_cancel_stops_loop() {
        let (poller, mock, _mode_tx, _rx) = poller(Mode::Static);
        let handle = poller.spawn(Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(!handle.is_finished());
        handle.shutdown().await;
        assert!(mock.get_requests().is_empty());
    }
}
