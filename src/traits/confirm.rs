//! Confirmation gate for destructive actions.
//!
//! Deleting a reference and clearing history must be confirmed by the user
//! before any request is issued. The gate is synchronous: the answer is known
//! before the controller decides whether to dispatch anything.

/// Question asked before a destructive operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPrompt {
    /// Delete one reference image
    DeleteReference,
    /// Remove every history record
    ClearHistory,
}

impl ConfirmPrompt {
    /// Text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            ConfirmPrompt::DeleteReference => {
                "Are you sure you want to delete this reference?"
            }
            ConfirmPrompt::ClearHistory => "Clear all history?",
        }
    }
}

/// Trait for asking the user to confirm an action.
///
/// Returns `true` only when the user explicitly accepts.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: ConfirmPrompt) -> bool;
}
