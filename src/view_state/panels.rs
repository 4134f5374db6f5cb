//! View regions produced by the reconciler.
//!
//! Everything here is owned, display-ready data: literal labels, resolved
//! image paths and tones. Surfaces only lay it out.

use super::modal::ModalView;
use super::score::ScoreTier;
use crate::models::{Movement, RecordId, Verdict};
use crate::state::Mode;

/// Colour intent of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Danger,
}

/// A button's label and whether it can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

/// Live detection panel, visible in live mode.
#[derive(Debug, Clone, PartialEq)]
pub struct LivePanel {
    /// Progress bar width, 0-100
    pub progress: f64,
    pub status: StatusLine,
    /// Detected movement badge
    pub detected: String,
    /// Per-movement score, two decimals
    pub scores: Vec<(Movement, String)>,
    /// Per-movement reference count, "{n} Refs"
    pub ref_counts: Vec<(Movement, String)>,
    /// Caption for the current movement's score
    pub caption: &'static str,
}

/// Verification result shown in the image panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    /// "VERIFIED (Correct)", "INCORRECT POSE", "INSTANT VERIFIED" or "INCORRECT"
    pub headline: &'static str,
    pub tone: Tone,
    pub processed_image: String,
    /// `None` renders as "No Match Found"
    pub reference_image: Option<String>,
    pub tier: ScoreTier,
    pub score_text: String,
    /// Backend remark delivered with the result
    pub note: Option<String>,
}

/// Uploaded-image panel, visible in static mode.
#[derive(Debug, Clone, PartialEq)]
pub enum ImagePanel {
    DropZone,
    Preview { file_name: String, size: String },
    Result(ResultPanel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTile {
    pub id: RecordId,
    pub image: String,
}

/// Reference manager, visible in both modes.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePanel {
    pub movement: Movement,
    /// `None` until the current movement's list has loaded
    pub count: Option<usize>,
    pub tiles: Vec<ReferenceTile>,
    pub upload_status: Option<StatusLine>,
    pub upload: Trigger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: RecordId,
    pub timestamp: String,
    /// "{movement} - {result}"
    pub title: String,
    pub verdict: Verdict,
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub movement: Movement,
    pub mode: Mode,
    pub live: Option<LivePanel>,
    pub image: Option<ImagePanel>,
    pub references: ReferencePanel,
    pub history: Vec<HistoryRow>,
    pub verify_button: Trigger,
    pub instant_button: Trigger,
    pub modal: Option<ModalView>,
}
