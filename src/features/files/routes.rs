use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;

/// URL prefix under which stored images are served
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Create routes for the files feature
///
/// Serves previously stored images straight from the upload directory
pub fn routes(upload_dir: &Path) -> Router {
    Router::new().nest_service(UPLOADS_URL_PREFIX, ServeDir::new(upload_dir))
}

/// Public URL of a stored image, built from its file name.
///
/// Stored paths carry the upload directory, which may be absolute or differ
/// from the URL prefix.
pub fn upload_url(stored_path: &str) -> Option<String> {
    let file_name = Path::new(stored_path).file_name()?.to_str()?;
    Some(format!("{}/{}", UPLOADS_URL_PREFIX, file_name))
}
