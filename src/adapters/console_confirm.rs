//! Confirmer for the line-oriented console.
//!
//! The console reads its own input asynchronously, so it asks the question
//! itself and arms this confirmer with the answer before invoking the
//! destructive action. An unarmed confirmer declines.

use std::sync::Mutex;

use crate::traits::{ConfirmPrompt, Confirmer};

#[derive(Debug, Default)]
pub struct ConsoleConfirmer {
    answer: Mutex<Option<bool>>,
}

impl ConsoleConfirmer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a `[y/N]` reply: only "y" or "yes" accept.
    pub fn parse_reply(reply: &str) -> bool {
        matches!(reply.trim().to_lowercase().as_str(), "y" | "yes")
    }

    /// Arm the answer for the next prompt.
    pub fn answer_next(&self, accepted: bool) {
        *self.answer.lock().unwrap_or_else(|e| e.into_inner()) = Some(accepted);
    }
}

impl Confirmer for ConsoleConfirmer {
    fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        let answer = self
            .answer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
            .unwrap_or(false);
        tracing::debug!(prompt = prompt.message(), answer, "Confirmation answered");
        answer
    }
}
