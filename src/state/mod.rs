//! Client state containers.
//!
//! - `SessionState`: current movement and mode (Copy snapshot)
//! - `UploadFlow`: the upload/verify state machine
//! - `LiveStatus`: last status snapshot from the poller
//! - `RefUploadStatus`: reference batch upload status line

pub mod live;
pub mod references;
pub mod session;
pub mod upload;

pub use live::LiveStatus;
pub use references::RefUploadStatus;
pub use session::{Mode, SessionState};
pub use upload::{AttemptId, UploadFlow, UploadSession, UploadStage, VerifyResult};
