//! Spawns backend calls and routes their results back as messages.

use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use super::messages::AppMessage;

/// Owner of every in-flight backend call.
///
/// Each call is a future resolving to exactly one [`AppMessage`], which is
/// sent on the controller's channel when it completes.
pub struct Dispatcher {
    tasks: JoinSet<()>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl Dispatcher {
    pub fn new(message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            tasks: JoinSet::new(),
            message_tx,
        }
    }

    /// Sender for tasks that outlive a single call (the status poller).
    pub fn sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    pub fn spawn<F>(&mut self, call: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let tx = self.message_tx.clone();
        self.tasks.spawn(async move {
            let message = call.await;
            if tx.send(message).is_err() {
                tracing::debug!("Message channel closed, dropping result");
            }
        });
    }

    /// Number of calls still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for the next call to finish. Returns `false` when none are running.
    pub async fn join_next(&mut self) -> bool {
        match self.tasks.join_next().await {
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Backend call task failed");
                true
            }
            Some(Ok(())) => true,
            None => false,
        }
    }

    /// Abort every running call.
    pub fn abort_all(&mut self) {
        self.tasks.abort_all();
    }
}
