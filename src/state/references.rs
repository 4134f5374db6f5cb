//! Reference upload status line.

/// Progress of the latest reference batch upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefUploadStatus {
    InFlight,
    /// Backend stored this many references
    Saved(u64),
    /// Backend answered `success: false`; carries its error text if any
    Rejected(Option<String>),
    /// No usable response
    Failed,
}

impl RefUploadStatus {
    pub fn text(&self) -> String {
        match self {
            RefUploadStatus::InFlight => "Uploading & Processing...".to_string(),
            RefUploadStatus::Saved(count) => format!("Saved {} refs!", count),
            RefUploadStatus::Rejected(error) => {
                format!("Error: {}", error.as_deref().unwrap_or("Failed"))
            }
            RefUploadStatus::Failed => "Upload failed.".to_string(),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, RefUploadStatus::InFlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(RefUploadStatus::InFlight.text(), "Uploading & Processing...");
        assert_eq!(RefUploadStatus::Saved(3).text(), "Saved 3 refs!");
        assert_eq!(
            RefUploadStatus::Rejected(Some("No files uploaded".into())).text(),
            "Error: No files uploaded"
        );
        assert_eq!(RefUploadStatus::Rejected(None).text(), "Error: Failed");
        assert_eq!(RefUploadStatus::Failed.text(), "Upload failed.");
    }
}
