//! File selection helpers for upload inputs.
//!
//! A picked file is held in memory as a [`SelectedFile`] until the form
//! submits, when it is turned into the `DocumentUpload` payload the server
//! functions accept. The MIME type is derived from the filename extension —
//! browsers report inconsistent types for the same file, and the server
//! re-checks the declared type against its allowlist anyway.

use dioxus::prelude::*;
use domain::services::DocumentUpload;
use domain::validate::FileMeta;

/// A file picked in the browser, fully read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Metadata for `domain::validate`.
    pub fn meta(&self) -> FileMeta {
        FileMeta {
            content_type: self.content_type.clone(),
            len: self.len(),
        }
    }

    /// Package the file for a server-function payload under a document key.
    pub fn to_upload(&self, key: &str) -> DocumentUpload {
        DocumentUpload {
            key: key.to_string(),
            filename: self.name.clone(),
            content_type: self.content_type.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

/// MIME type for a filename, by extension.
pub fn mime_for(name: &str) -> &'static str {
    match name.rsplit('.').next().map(|ext| ext.to_lowercase()) {
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Read the first file of a file-input change event into memory. Returns
/// `None` when the selection was cleared or the file could not be read.
pub async fn read_first_file(evt: &FormEvent) -> Option<SelectedFile> {
    let file = evt.files().into_iter().next()?;
    let name = file.name();
    let bytes = match file.read_bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            tracing::error!("failed to read selected file {name}: {e}");
            return None;
        }
    };
    Some(SelectedFile {
        content_type: mime_for(&name).to_string(),
        name,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_follows_the_extension_case_insensitively() {
        assert_eq!(mime_for("scan.pdf"), "application/pdf");
        assert_eq!(mime_for("photo.JPG"), "image/jpeg");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("card.png"), "image/png");
        assert_eq!(mime_for("archive.zip"), "application/octet-stream");
        assert_eq!(mime_for("no-extension"), "application/octet-stream");
    }

    #[test]
    fn selected_file_packages_into_an_upload() {
        let file = SelectedFile {
            name: "aadhaar.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        let upload = file.to_upload("aadhaar");
        assert_eq!(upload.key, "aadhaar");
        assert_eq!(upload.filename, "aadhaar.png");
        assert_eq!(upload.content_type, "image/png");
        assert_eq!(upload.len(), 3);
        assert_eq!(file.meta().len, 3);
    }
}
