//! View state: what the surface should show, derived from controller state.
//!
//! ```text
//!   App (owns state)
//!        |  ViewInputs (borrows)
//!        v
//!   reconcile()  -- pure
//!        |
//!        v
//!   ViewModel (owned, display-ready)
//! ```
//!
//! ## Components
//!
//! - [`reconcile`]: the presentation reconciler
//! - [`ScoreTier`]: score captions and analysis text
//! - [`ModalView`]: single-image and compare modals
//! - [`ViewModel`] and its panels

mod modal;
mod panels;
mod reconciler;
mod score;

pub use modal::{
    resolve_asset, CompareModal, ModalRequest, ModalView, SingleModal, SurfaceCaps,
    PLACEHOLDER_IMAGE,
};
pub use panels::{
    HistoryRow, ImagePanel, LivePanel, ReferencePanel, ReferenceTile, ResultPanel, StatusLine,
    Tone, Trigger, ViewModel,
};
pub use reconciler::{reconcile, result_headline, ViewInputs};
pub use score::{match_score_text, score_label, ScoreTier};
