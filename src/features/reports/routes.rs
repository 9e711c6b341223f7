use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::{ReportQueryService, ReportService};

/// Create routes for the reports feature
///
/// `max_body_size` bounds the whole multipart submission, photos included
pub fn routes(
    report_service: Arc<ReportService>,
    query_service: Arc<ReportQueryService>,
    max_body_size: usize,
) -> Router {
    let state = ReportState {
        report_service,
        query_service,
    };

    Router::new()
        .route(
            "/report-vandalized-projects/submit",
            post(handlers::submit_report).layer(DefaultBodyLimit::max(max_body_size)),
        )
        .route(
            "/report-vandalized-projects/get_reports",
            get(handlers::get_recent_reports),
        )
        .route("/api/reports", get(handlers::list_reports))
        .with_state(state)
}
