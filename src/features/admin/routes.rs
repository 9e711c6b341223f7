use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::reports::ReportQueryService;

/// Create admin routes (no access control is applied)
pub fn routes(query_service: Arc<ReportQueryService>) -> Router {
    Router::new()
        .route("/admin", get(handlers::admin_page))
        .with_state(query_service)
}
