//! Image modal content: single reference view or result/reference compare.

use super::score::{match_score_text, ScoreTier};
use crate::models::{Movement, RecordId};

/// Shown in place of a missing reference image.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x200?text=No+Match";

/// Which modal the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalRequest {
    Reference(RecordId),
    History(RecordId),
    /// The result currently shown in the image panel
    Result,
}

/// What the presenting surface can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceCaps {
    /// Whether the dual-image compare modal exists
    pub compare_modal: bool,
}

impl Default for SurfaceCaps {
    fn default() -> Self {
        Self {
            compare_modal: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleModal {
    pub image: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareModal {
    pub processed_image: String,
    pub reference_image: String,
    /// "97.0% Match Score"
    pub score_text: String,
    /// "{movement} - {result}"
    pub title: String,
    pub timestamp: String,
    pub tier: ScoreTier,
    pub analysis: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalView {
    Single(SingleModal),
    Compare(CompareModal),
}

/// Data a compare modal is built from, independent of where it came from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CompareSource<'a> {
    pub image_path: &'a str,
    pub ref_path: Option<&'a str>,
    pub movement: &'a str,
    pub result: &'a str,
    pub timestamp: &'a str,
    pub score: Option<f64>,
}

/// Resolve an image path for display.
///
/// Absolute URLs and root-relative paths are kept; anything else is a file
/// name under the uploads root.
pub fn resolve_asset(path: &str, uploads_root: &str) -> String {
    if path.starts_with("http") || path.starts_with('/') {
        path.to_string()
    } else {
        format!("{}/{}", uploads_root.trim_end_matches('/'), path)
    }
}

pub(crate) fn reference_modal(
    image_path: &str,
    movement: Movement,
    uploads_root: &str,
) -> ModalView {
    ModalView::Single(SingleModal {
        image: resolve_asset(image_path, uploads_root),
        caption: format!("Reference for {}", movement),
    })
}

/// Compare modal, or the single-image fallback when the surface lacks one.
pub(crate) fn compare_modal(
    source: &CompareSource<'_>,
    uploads_root: &str,
    caps: SurfaceCaps,
) -> ModalView {
    let processed_image = resolve_asset(source.image_path, uploads_root);
    if !caps.compare_modal {
        return ModalView::Single(SingleModal {
            image: processed_image,
            caption: format!("Reference for {}", source.movement),
        });
    }

    let tier = ScoreTier::from_score(source.score);
    ModalView::Compare(CompareModal {
        processed_image,
        reference_image: source
            .ref_path
            .map(|p| resolve_asset(p, uploads_root))
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        score_text: match_score_text(source.score),
        title: format!("{} - {}", source.movement, source.result),
        timestamp: source.timestamp.to_string(),
        tier,
        analysis: tier.analysis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "/static/uploads";

    fn source(ref_path: Option<&'static str>, score: Option<f64>) -> CompareSource<'static> {
        CompareSource {
            image_path: "result_1.jpg",
            ref_path,
            movement: "Pukulan Dasar",
            result: "Correct",
            timestamp: "2024-05-01 10:00:00",
            score,
        }
    }

    #[test]
    fn test_resolve_asset() {
        assert_eq!(resolve_asset("a.jpg", ROOT), "/static/uploads/a.jpg");
        assert_eq!(resolve_asset("a.jpg", "/static/uploads/"), "/static/uploads/a.jpg");
        assert_eq!(resolve_asset("/u/a.jpg", ROOT), "/u/a.jpg");
        assert_eq!(
            resolve_asset("https://cdn.example/a.jpg", ROOT),
            "https://cdn.example/a.jpg"
        );
    }

    #[test]
    fn test_reference_modal_caption() {
        let view = reference_modal("annotated_ref_1.jpg", Movement::SikapSiap, ROOT);
        assert_eq!(
            view,
            ModalView::Single(SingleModal {
                image: "/static/uploads/annotated_ref_1.jpg".to_string(),
                caption: "Reference for Sikap Siap".to_string(),
            })
        );
    }

    #[test]
    fn test_compare_modal_content() {
        let view = compare_modal(
            &source(Some("annotated_ref_1.jpg"), Some(0.91)),
            ROOT,
            SurfaceCaps::default(),
        );
        let ModalView::Compare(modal) = view else {
            panic!("expected compare modal");
        };
        assert_eq!(modal.processed_image, "/static/uploads/result_1.jpg");
        assert_eq!(modal.reference_image, "/static/uploads/annotated_ref_1.jpg");
        assert_eq!(modal.score_text, "91.0% Match Score");
        assert_eq!(modal.title, "Pukulan Dasar - Correct");
        assert_eq!(modal.tier, ScoreTier::GoodSimilarity);
        assert!(modal.analysis.starts_with("Kemiripan Baik"));
    }

    #[test]
    fn test_missing_reference_uses_placeholder() {
        let view = compare_modal(&source(None, None), ROOT, SurfaceCaps::default());
        let ModalView::Compare(modal) = view else {
            panic!("expected compare modal");
        };
        assert_eq!(modal.reference_image, PLACEHOLDER_IMAGE);
        assert_eq!(modal.score_text, "N/A% Match Score");
        assert_eq!(modal.tier, ScoreTier::NoMatch);
    }

    #[test]
    fn test_missing_compare_surface_falls_back_to_single() {
        let view = compare_modal(
            &source(Some("r.jpg"), Some(0.99)),
            ROOT,
            SurfaceCaps {
                compare_modal: false,
            },
        );
        assert_eq!(
            view,
            ModalView::Single(SingleModal {
                image: "/static/uploads/result_1.jpg".to_string(),
                caption: "Reference for Pukulan Dasar".to_string(),
            })
        );
    }
}
