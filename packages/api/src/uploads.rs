//! # Upload persistence
//!
//! Documents and photos arrive as byte payloads inside server-function
//! bodies. This module re-checks them server-side (the client's validation
//! is advisory only), writes them under the uploads directory, and returns
//! the server-relative URL (`/uploads/<area>/<name>`) that gets stored on
//! the record. The web server serves that directory.

use std::path::{Path, PathBuf};

use domain::services::{
    is_allowed_document_type, is_allowed_image_type, DocumentUpload, MAX_DOCUMENT_BYTES,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{0}")]
    Rejected(String),
    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Root directory for stored uploads, from `UPLOADS_DIR` (default
/// `uploads` relative to the server's working directory).
pub fn uploads_dir() -> PathBuf {
    std::env::var("UPLOADS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("uploads"))
}

fn check_size(upload: &DocumentUpload) -> Result<(), UploadError> {
    if upload.is_empty() {
        return Err(UploadError::Rejected("Uploaded file is empty".into()));
    }
    if upload.len() > MAX_DOCUMENT_BYTES {
        return Err(UploadError::Rejected(format!(
            "Uploaded file exceeds the {} MB limit",
            MAX_DOCUMENT_BYTES / (1024 * 1024)
        )));
    }
    Ok(())
}

/// File extension derived from the declared content type, never from the
/// client-supplied filename.
fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "application/pdf" => Some("pdf"),
        _ => None,
    }
}

async fn write_upload(area: &str, upload: &DocumentUpload) -> Result<String, UploadError> {
    let ext = extension_for(&upload.content_type)
        .ok_or_else(|| UploadError::Rejected("Unsupported file type".into()))?;

    let name = format!("{}.{ext}", uuid::Uuid::new_v4());
    let dir = uploads_dir().join(area);
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(dir.join(&name), &upload.bytes).await?;

    tracing::debug!(area, name, bytes = upload.len(), "stored upload");
    Ok(format!("/uploads/{area}/{name}"))
}

/// Store an application document (JPEG, PNG or PDF) and return its URL.
pub async fn store_document(area: &str, upload: &DocumentUpload) -> Result<String, UploadError> {
    if !is_allowed_document_type(&upload.content_type) {
        return Err(UploadError::Rejected(
            "File must be a JPEG, PNG or PDF".into(),
        ));
    }
    check_size(upload)?;
    write_upload(area, upload).await
}

/// Store a photo (JPEG or PNG only) and return its URL.
pub async fn store_image(area: &str, upload: &DocumentUpload) -> Result<String, UploadError> {
    if !is_allowed_image_type(&upload.content_type) {
        return Err(UploadError::Rejected("File must be a JPEG or PNG".into()));
    }
    check_size(upload)?;
    write_upload(area, upload).await
}

/// Resolve a URL path under `/uploads/` back to a file on disk, refusing
/// anything that would escape the uploads directory.
pub fn resolve_upload_path(rest: &str) -> Option<PathBuf> {
    if rest
        .split('/')
        .any(|part| part.is_empty() || part == "." || part == ".." || part.contains('\\'))
    {
        return None;
    }
    Some(uploads_dir().join(Path::new(rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: &str, len: usize) -> DocumentUpload {
        DocumentUpload {
            key: "aadhaar".to_string(),
            filename: "scan.pdf".to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0u8; len],
        }
    }

    #[tokio::test]
    async fn rejects_disallowed_type_before_touching_disk() {
        let err = store_document("test", &upload("application/zip", 10)).await;
        assert!(matches!(err, Err(UploadError::Rejected(_))));
    }

    #[tokio::test]
    async fn rejects_oversized_upload() {
        let err = store_document("test", &upload("application/pdf", MAX_DOCUMENT_BYTES + 1)).await;
        assert!(matches!(err, Err(UploadError::Rejected(_))));
    }

    #[tokio::test]
    async fn images_refuse_pdfs() {
        let err = store_image("test", &upload("application/pdf", 10)).await;
        assert!(matches!(err, Err(UploadError::Rejected(_))));
    }

    #[test]
    fn upload_paths_cannot_escape_the_directory() {
        assert!(resolve_upload_path("notices/a.pdf").is_some());
        assert!(resolve_upload_path("../etc/passwd").is_none());
        assert!(resolve_upload_path("notices/../../etc").is_none());
        assert!(resolve_upload_path("notices//x").is_none());
    }

    #[test]
    fn extensions_follow_the_declared_type() {
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("application/pdf"), Some("pdf"));
        assert_eq!(extension_for("text/html"), None);
    }
}
