//! Upload/verify actions for the App.

use tracing::{debug, info, warn};

use crate::error::{FlowError, GatewayError};
use crate::models::{StagedFile, VerifyOrigin, VerifyOutcome};
use crate::state::{AttemptId, Mode};
use crate::view_state::{result_headline, score_label, ModalRequest};

use super::{App, AppMessage, VERIFY_FAILED_ALERT};

impl App {
    /// Stage a file for preview. No network call.
    pub fn select_file(&mut self, file: StagedFile) -> Result<(), FlowError> {
        debug!(file = %file.file_name, size = file.size(), "File staged");
        self.upload.select(file)
    }

    /// Verify the staged file against the current movement.
    pub fn verify(&mut self) -> Result<(), FlowError> {
        let movement = self.session.movement;
        let (attempt, file) = self.upload.begin_verify(movement)?;
        info!(movement = %movement, file = %file.file_name, "Verifying uploaded image");

        let gateway = self.gateway.clone();
        self.dispatcher.spawn(async move {
            AppMessage::VerifyFinished {
                attempt,
                result: gateway.verify_image(&file, movement).await,
            }
        });
        Ok(())
    }

    /// Verify the backend's current camera frame, skipping preview.
    pub fn instant_verify(&mut self) -> Result<(), FlowError> {
        let attempt = self.upload.begin_instant(self.session.movement)?;
        info!(movement = %self.session.movement, "Instant verification");

        let gateway = self.gateway.clone();
        self.dispatcher.spawn(async move {
            AppMessage::VerifyFinished {
                attempt,
                result: gateway.verify_instant().await,
            }
        });
        Ok(())
    }

    /// Back to an empty upload panel, hiding preview and result.
    pub fn reset(&mut self) {
        self.upload.reset();
        if self.modal == Some(ModalRequest::Result) {
            self.modal = None;
        }
    }

    pub(super) fn apply_verify(
        &mut self,
        attempt: AttemptId,
        result: Result<VerifyOutcome, GatewayError>,
    ) {
        match result {
            Ok(outcome) => {
                let origin = self.upload.in_flight();
                let received_at = chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string();
                match self.upload.complete(attempt, outcome, received_at) {
                    Some(result) => {
                        info!(
                            movement = %result.movement,
                            matched = result.outcome.matched,
                            score = result.outcome.score,
                            label = result_headline(result.origin, result.outcome.matched),
                            caption = score_label(Some(result.outcome.score)),
                            "Verification result"
                        );
                        if origin == Some(VerifyOrigin::Instant) {
                            self.set_mode(Mode::Static);
                        }
                    }
                    None => debug!("Stale verification result not shown"),
                }
                // The backend recorded the attempt either way
                self.reload_history();
            }
            Err(e) => {
                if self.upload.fail(attempt) {
                    warn!(error = %e, kind = %e.kind(), "Verification failed");
                    self.alerts.push_back(VERIFY_FAILED_ALERT.to_string());
                } else {
                    debug!(error = %e, "Stale verification failure ignored");
                }
            }
        }
    }
}
