//! Image files staged on the client before upload.

use bytes::Bytes;
use std::path::Path;

/// An image selected by the user, held in memory until it is submitted.
///
/// Staging never touches the network; the bytes are only sent when the
/// user confirms verification or a reference upload.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    /// File name sent in the multipart part (e.g. "stance.jpg")
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl StagedFile {
    /// Stage in-memory bytes; the content type is guessed from the name.
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            data: data.into(),
        }
    }

    /// Read a file from disk and stage it.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, data))
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Format file size for display (e.g., "1.2 KB", "3.4 MB")
    pub fn format_size(&self) -> String {
        let bytes = self.data.len() as u64;
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
