//! Scripted confirmer for testing.
//!
//! Answers confirmation prompts from a fixed script and records every prompt,
//! so tests can assert both the answer path and that the gate was consulted.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::traits::{ConfirmPrompt, Confirmer};

/// Confirmer returning scripted answers.
///
/// Once the script runs out, the fallback answer is used.
///
/// # Example
///
/// ```ignore
/// use poseverify::adapters::mock::ScriptedConfirmer;
///
/// let confirmer = ScriptedConfirmer::declining();
/// assert!(!confirmer.confirm(ConfirmPrompt::ClearHistory));
/// assert_eq!(confirmer.prompts(), vec![ConfirmPrompt::ClearHistory]);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedConfirmer {
    answers: Arc<Mutex<VecDeque<bool>>>,
    fallback: bool,
    prompts: Arc<Mutex<Vec<ConfirmPrompt>>>,
}

impl ScriptedConfirmer {
    /// Confirmer that accepts everything.
    pub fn accepting() -> Self {
        Self::with_fallback(true)
    }

    /// Confirmer that declines everything.
    pub fn declining() -> Self {
        Self::with_fallback(false)
    }

    fn with_fallback(fallback: bool) -> Self {
        Self {
            answers: Arc::new(Mutex::new(VecDeque::new())),
            fallback,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue the next answers, consumed before the fallback.
    pub fn push_answers(&self, answers: &[bool]) {
        self.answers.lock().unwrap().extend(answers.iter().copied());
    }

    /// Every prompt asked so far.
    pub fn prompts(&self) -> Vec<ConfirmPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: ConfirmPrompt) -> bool {
        self.prompts.lock().unwrap().push(prompt);
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.fallback)
    }
}
