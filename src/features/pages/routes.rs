use axum::{response::Redirect, routing::get, Router};
use std::path::Path;
use tower_http::services::ServeFile;

use crate::shared::constants::REPORT_FORM_PATH;

/// File in the static directory served as the report form
pub const REPORT_FORM_FILE: &str = "index.html";

/// Create routes for the public pages
///
/// `/` sends visitors to the report form, which is a static file
pub fn routes(static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(REPORT_FORM_PATH) }))
        .route_service(
            REPORT_FORM_PATH,
            ServeFile::new(static_dir.join(REPORT_FORM_FILE)),
        )
}
