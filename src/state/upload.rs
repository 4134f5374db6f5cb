//! Upload → preview → verify → result state machine.
//!
//! ```text
//! Empty ──select──▶ Previewing ──verify──▶ Verifying ──ok──▶ Resulted
//!   │                   ▲                     │                 │
//!   │                   └───────fail──────────┘                 │
//!   └──────instant──────────────────────────▶ Verifying         │
//! any ──reset──▶ Empty ◀────────────────────────────────────────┘
//! ```
//!
//! Each verification carries an [`AttemptId`]. A completion or failure whose
//! attempt no longer matches the flow (it was reset meanwhile) is ignored.

use uuid::Uuid;

use crate::error::FlowError;
use crate::models::{Movement, StagedFile, VerifyOrigin, VerifyOutcome};

/// Identity of one verification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(Uuid);

impl AttemptId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

/// A rendered verification result.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyResult {
    pub origin: VerifyOrigin,
    /// Movement the image was verified against
    pub movement: Movement,
    pub outcome: VerifyOutcome,
    /// Local time the result arrived, for the compare modal
    pub received_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadStage {
    Empty,
    Previewing {
        file: StagedFile,
    },
    Verifying {
        attempt: AttemptId,
        origin: VerifyOrigin,
        movement: Movement,
        /// Stage restored if the verification fails
        resume: Box<UploadStage>,
    },
    Resulted {
        result: VerifyResult,
    },
}

impl UploadStage {
    pub fn name(&self) -> &'static str {
        match self {
            UploadStage::Empty => "empty",
            UploadStage::Previewing { .. } => "previewing",
            UploadStage::Verifying { .. } => "verifying",
            UploadStage::Resulted { .. } => "resulted",
        }
    }
}

/// `{selected file, preview shown, in flight}` view of the flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadSession {
    pub selected_file: Option<String>,
    pub preview_shown: bool,
    pub in_flight: bool,
}

/// Owner of the current [`UploadStage`].
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFlow {
    stage: UploadStage,
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadFlow {
    pub fn new() -> Self {
        Self {
            stage: UploadStage::Empty,
        }
    }

    pub fn stage(&self) -> &UploadStage {
        &self.stage
    }

    /// Staged file, also while its verification is in flight.
    pub fn staged_file(&self) -> Option<&StagedFile> {
        staged_in(&self.stage)
    }

    pub fn result(&self) -> Option<&VerifyResult> {
        match &self.stage {
            UploadStage::Resulted { result } => Some(result),
            _ => None,
        }
    }

    /// Origin of the verification in flight, if any.
    pub fn in_flight(&self) -> Option<VerifyOrigin> {
        match &self.stage {
            UploadStage::Verifying { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    pub fn session(&self) -> UploadSession {
        let file = self.staged_file();
        UploadSession {
            selected_file: file.map(|f| f.file_name.clone()),
            preview_shown: matches!(self.stage, UploadStage::Previewing { .. })
                || (file.is_some() && self.in_flight().is_some()),
            in_flight: self.in_flight().is_some(),
        }
    }

    /// Stage a file for preview. Only valid from `Empty`.
    pub fn select(&mut self, file: StagedFile) -> Result<(), FlowError> {
        match self.stage {
            UploadStage::Empty => {
                self.stage = UploadStage::Previewing { file };
                Ok(())
            }
            UploadStage::Verifying { .. } => Err(FlowError::Busy),
            _ => Err(self.invalid("select a file")),
        }
    }

    /// Start verifying the staged file; returns the attempt and a copy of the file.
    pub fn begin_verify(
        &mut self,
        movement: Movement,
    ) -> Result<(AttemptId, StagedFile), FlowError> {
        let file = match &self.stage {
            UploadStage::Previewing { file } => file.clone(),
            UploadStage::Verifying { .. } => return Err(FlowError::Busy),
            _ => return Err(self.invalid("verify")),
        };
        let attempt = AttemptId::new();
        let resume = std::mem::replace(&mut self.stage, UploadStage::Empty);
        self.stage = UploadStage::Verifying {
            attempt,
            origin: VerifyOrigin::Upload,
            movement,
            resume: Box::new(resume),
        };
        Ok((attempt, file))
    }

    /// Start an instant verification from any stage but `Verifying`.
    pub fn begin_instant(&mut self, movement: Movement) -> Result<AttemptId, FlowError> {
        if self.in_flight().is_some() {
            return Err(FlowError::Busy);
        }
        let attempt = AttemptId::new();
        let resume = std::mem::replace(&mut self.stage, UploadStage::Empty);
        self.stage = UploadStage::Verifying {
            attempt,
            origin: VerifyOrigin::Instant,
            movement,
            resume: Box::new(resume),
        };
        Ok(attempt)
    }

    /// Apply a successful response. Returns `None` if the attempt is stale.
    pub fn complete(
        &mut self,
        attempt: AttemptId,
        outcome: VerifyOutcome,
        received_at: String,
    ) -> Option<&VerifyResult> {
        let (origin, movement) = match &self.stage {
            UploadStage::Verifying {
                attempt: current,
                origin,
                movement,
                ..
            } if *current == attempt => (*origin, *movement),
            _ => return None,
        };
        self.stage = UploadStage::Resulted {
            result: VerifyResult {
                origin,
                movement,
                outcome,
                received_at,
            },
        };
        self.result()
    }

    /// Apply a failure: the stage before the attempt is restored.
    /// Returns `false` if the attempt is stale.
    pub fn fail(&mut self, attempt: AttemptId) -> bool {
        let is_current = matches!(
            &self.stage,
            UploadStage::Verifying { attempt: current, .. } if *current == attempt
        );
        if !is_current {
            return false;
        }
        if let UploadStage::Verifying { resume, .. } =
            std::mem::replace(&mut self.stage, UploadStage::Empty)
        {
            self.stage = *resume;
        }
        true
    }

    /// Back to `Empty` from any stage, discarding the staged file.
    pub fn reset(&mut self) {
        self.stage = UploadStage::Empty;
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            from: self.stage.name(),
            action,
        }
    }
}

fn staged_in(stage: &UploadStage) -> Option<&StagedFile> {
    match stage {
        UploadStage::Previewing { file } => Some(file),
        UploadStage::Verifying { resume, .. } => staged_in(resume),
        _ => None,
    }
}
