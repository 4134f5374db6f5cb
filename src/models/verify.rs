//! Scored comparison returned by the verify endpoints.

use serde::{Deserialize, Serialize};

/// Raw body of `/verify_image` and `/verify_instant`.
///
/// The backend uses the same shape for results and for failures, so every
/// field is optional here and [`VerifyPayload::into_outcome`] decides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyPayload {
    #[serde(rename = "match", default)]
    pub matched: Option<bool>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub best_ref: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A well-formed comparison result.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyOutcome {
    pub matched: bool,
    pub score: f64,
    /// Processed (annotated) image of the submitted pose
    pub image_url: String,
    /// Best-matching reference, absent when nothing matched
    pub best_ref: Option<String>,
    /// Backend remark delivered alongside a result (e.g. no pose detected)
    pub note: Option<String>,
}

impl VerifyPayload {
    /// Convert into an outcome, or the message explaining why it is not one.
    ///
    /// A result needs at least the match flag and the processed image; an
    /// `error` without an image is an application failure.
    pub fn into_outcome(self) -> Result<VerifyOutcome, String> {
        match (self.matched, self.image_url) {
            (Some(matched), Some(image_url)) if !image_url.is_empty() => Ok(VerifyOutcome {
                matched,
                score: self.score.unwrap_or(0.0),
                image_url,
                best_ref: self.best_ref.filter(|r| !r.is_empty()),
                note: self.error,
            }),
            _ => Err(self
                .error
                .unwrap_or_else(|| "response is missing match or image_url".to_string())),
        }
    }
}

/// Which trigger started a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOrigin {
    /// Staged upload verified via `/verify_image`
    Upload,
    /// Live camera frame verified via `/verify_instant`
    Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_result() {
        let payload: VerifyPayload = serde_json::from_str(
            r#"{"match": true, "score": 0.97, "image_url": "/u/a.jpg", "best_ref": "/u/b.jpg"}"#,
        )
        .unwrap();

        let outcome = payload.into_outcome().unwrap();
        assert!(outcome.matched);
        assert_eq!(outcome.score, 0.97);
        assert_eq!(outcome.image_url, "/u/a.jpg");
        assert_eq!(outcome.best_ref.as_deref(), Some("/u/b.jpg"));
        assert!(outcome.note.is_none());
    }

    #[test]
    fn test_null_best_ref() {
        let payload: VerifyPayload = serde_json::from_str(
            r#"{"match": false, "score": 0.3, "image_url": "/u/a.jpg", "best_ref": null}"#,
        )
        .unwrap();
        assert!(payload.into_outcome().unwrap().best_ref.is_none());
    }

    #[test]
    fn test_no_pose_result_keeps_note() {
        let payload: VerifyPayload = serde_json::from_str(
            r#"{"match": false, "score": 0.0, "error": "No person or pose detected in image", "image_url": "/static/uploads/no_pose_1.jpg"}"#,
        )
        .unwrap();

        let outcome = payload.into_outcome().unwrap();
        assert!(!outcome.matched);
        assert_eq!(
            outcome.note.as_deref(),
            Some("No person or pose detected in image")
        );
    }

    #[test]
    fn test_error_without_image_is_failure() {
        let payload: VerifyPayload =
            serde_json::from_str(r#"{"match": false, "score": 0.0, "error": "No person detected"}"#)
                .unwrap();
        assert_eq!(payload.into_outcome(), Err("No person detected".to_string()));
    }

    #[test]
    fn test_empty_body_is_failure() {
        let err = VerifyPayload::default().into_outcome().unwrap_err();
        assert!(err.contains("missing"));
    }
}
