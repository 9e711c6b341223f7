use base64::prelude::*;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{is_extension_allowed, UploadedFile};
use crate::shared::validation::sanitize_filename;

/// Service for storing report images on the local filesystem
pub struct FileService {
    upload_dir: PathBuf,
}

impl FileService {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_upload_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| {
                AppError::Internal(format!(
                    "Failed to create upload directory {}: {}",
                    self.upload_dir.display(),
                    e
                ))
            })
    }

    fn stored_path(&self, file_name: &str) -> PathBuf {
        self.upload_dir.join(file_name)
    }

    /// Save every uploaded image with an allowed extension.
    ///
    /// Files with any other extension, or whose sanitized name is unusable, are
    /// skipped. A file with the same sanitized name as an earlier one replaces it.
    ///
    /// # Returns
    /// The paths of the written files, in upload order
    pub async fn store_uploads(&self, files: &[UploadedFile]) -> Result<Vec<String>> {
        let mut paths = Vec::with_capacity(files.len());

        for file in files {
            if !is_extension_allowed(&file.file_name) {
                debug!("Skipping upload with disallowed extension: {}", file.file_name);
                continue;
            }

            let safe_name = sanitize_filename(&file.file_name);
            if safe_name.is_empty() || !is_extension_allowed(&safe_name) {
                debug!("Skipping upload with unusable name: {}", file.file_name);
                continue;
            }

            let path = self.stored_path(&safe_name);
            tokio::fs::write(&path, &file.data).await.map_err(|e| {
                AppError::Internal(format!("Failed to write {}: {}", path.display(), e))
            })?;

            info!(
                "Stored uploaded image: {} ({} bytes, {})",
                path.display(),
                file.data.len(),
                file.content_type.as_deref().unwrap_or("unknown type")
            );
            paths.push(path.to_string_lossy().into_owned());
        }

        Ok(paths)
    }

    /// Decode and save an inline `data:<mime>;base64,<payload>` image.
    ///
    /// Best effort: any problem is logged and yields `None`.
    pub async fn store_inline_image(&self, data_uri: &str) -> Option<String> {
        let data_uri = data_uri.trim();
        if data_uri.is_empty() {
            return None;
        }

        let Some((_, payload)) = data_uri.split_once(',') else {
            warn!("Inline image is missing its data URI prefix");
            return None;
        };

        // Wrapped payloads from non-browser clients carry line breaks
        let payload: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        let bytes = match BASE64_STANDARD.decode(&payload) {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => {
                warn!("Inline image payload is empty");
                return None;
            }
            Err(e) => {
                warn!("Failed to decode inline image: {}", e);
                return None;
            }
        };

        let path = self.stored_path(&camera_file_name());
        if let Err(e) = tokio::fs::write(&path, &bytes).await {
            warn!("Failed to save inline image {}: {}", path.display(), e);
            return None;
        }

        info!(
            "Stored inline image: {} ({} bytes)",
            path.display(),
            bytes.len()
        );
        Some(path.to_string_lossy().into_owned())
    }
}

/// `camera_photo_<unix seconds>_<8 hex>.jpg`; the suffix keeps two photos taken
/// in the same second apart.
fn camera_file_name() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("camera_photo_{}_{}.jpg", Utc::now().timestamp(), &suffix[..8])
}
