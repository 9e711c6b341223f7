use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::core::error::{AppError, Result};
use crate::features::reports::ReportQueryService;
use crate::shared::templates::render_admin_page;

/// Server-rendered listing of every report with its photos
pub async fn admin_page(State(service): State<Arc<ReportQueryService>>) -> Result<Html<String>> {
    let reports = service.list_all().await?;
    let html = render_admin_page(&reports).map_err(|e| AppError::Template(e.to_string()))?;
    Ok(Html(html))
}
