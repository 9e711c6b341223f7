use axum::body::Bytes;

use crate::shared::constants::ALLOWED_IMAGE_EXTENSIONS;

/// A file received in the `images[]` multipart field
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// File name as sent by the client (unsanitized)
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            data: data.into(),
        }
    }
}

/// Check whether a file name carries an allowed image extension.
///
/// The extension is whatever follows the last `.`, compared case-insensitively.
pub fn is_extension_allowed(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(is_extension_allowed("bench.png"));
        assert!(is_extension_allowed("bench.JPG"));
        assert!(is_extension_allowed("wall.Jpeg"));
        assert!(is_extension_allowed("anim.gif"));
        assert!(is_extension_allowed("archive.tar.png"));
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(!is_extension_allowed("notes.txt"));
        assert!(!is_extension_allowed("photo.webp"));
        assert!(!is_extension_allowed("png"));
        assert!(!is_extension_allowed("photo.png.exe"));
        assert!(!is_extension_allowed("photo."));
        assert!(!is_extension_allowed(""));
    }
}
