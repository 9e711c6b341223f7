use std::sync::Arc;

use axum::{extract::State, Json};
use axum::extract::multipart::Field;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppMultipart;
use crate::features::files::dtos::UploadedFile;
use crate::features::reports::dtos::{ReportResponseDto, SubmitReportDto, SubmitReportForm};
use crate::features::reports::services::{ReportQueryService, ReportService};
use crate::shared::constants::{
    FIELD_CAMERA_IMAGE, FIELD_DESCRIPTION, FIELD_IMAGES, FIELD_LOCATION, FIELD_PROJECT_NAME,
    RECENT_REPORTS_LIMIT,
};
use crate::shared::types::{ErrorResponse, MessageResponse};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub query_service: Arc<ReportQueryService>,
}

async fn read_text(field: Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read {} field: {}", name, e)))
}

/// Submit a vandalized project report
///
/// Accepts multipart/form-data with:
/// - `Project Name`, `Location`, `Description`: required, non-empty
/// - `images[]`: any number of png/jpg/jpeg/gif files (others are ignored)
/// - `camera_image`: optional base64 data URI
#[utoipa::path(
    post,
    path = "/report-vandalized-projects/submit",
    tag = "reports",
    request_body(
        content = SubmitReportForm,
        content_type = "multipart/form-data",
        description = "Report fields with optional photos",
    ),
    responses(
        (status = 200, description = "Report stored", body = MessageResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn submit_report(
    State(state): State<ReportState>,
    AppMultipart(mut multipart): AppMultipart,
) -> Result<Json<MessageResponse>> {
    let mut submission = SubmitReportDto::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            FIELD_PROJECT_NAME => submission.project_name = read_text(field, &field_name).await?,
            FIELD_LOCATION => submission.location = read_text(field, &field_name).await?,
            FIELD_DESCRIPTION => submission.description = read_text(field, &field_name).await?,
            FIELD_CAMERA_IMAGE => {
                submission.camera_image = Some(read_text(field, &field_name).await?)
            }
            FIELD_IMAGES => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(|s| s.to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                submission.images.push(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    state.report_service.submit(submission).await?;

    Ok(Json(MessageResponse::new("Data submitted successfully")))
}

/// List the most recent reports
///
/// At most ten reports, newest first; `created_at` is `YYYY-MM-DD HH:MM:SS`.
#[utoipa::path(
    get,
    path = "/report-vandalized-projects/get_reports",
    tag = "reports",
    responses(
        (status = 200, description = "Recent reports", body = Vec<ReportResponseDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_recent_reports(
    State(state): State<ReportState>,
) -> Result<Json<Vec<ReportResponseDto>>> {
    let reports = state
        .query_service
        .list_recent(RECENT_REPORTS_LIMIT)
        .await?;
    Ok(Json(reports))
}

/// List all reports
///
/// Newest first; `created_at` is ISO-8601.
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "reports",
    responses(
        (status = 200, description = "All reports", body = Vec<ReportResponseDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_reports(
    State(state): State<ReportState>,
) -> Result<Json<Vec<ReportResponseDto>>> {
    let reports = state.query_service.list_all().await?;
    Ok(Json(reports))
}
