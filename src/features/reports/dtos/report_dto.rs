use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::files::dtos::UploadedFile;
use crate::features::reports::models::{CreateReport, ReportWithImages};

/// How `created_at` is rendered in listing responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `YYYY-MM-DD HH:MM:SS`, used by the recent-reports listing
    Display,
    /// ISO-8601 (`YYYY-MM-DDTHH:MM:SS[.ffffff]`), used by the API listing
    Iso8601,
}

impl TimestampFormat {
    pub fn format(self, timestamp: NaiveDateTime) -> String {
        match self {
            TimestampFormat::Display => timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::Iso8601 => timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }
}

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: i32,
    #[schema(example = "Park Bench")]
    pub project_name: String,
    #[schema(example = "5th Ave")]
    pub location: String,
    #[schema(example = "Graffiti")]
    pub description: String,
    /// Creation time, formatted per endpoint
    #[schema(example = "2024-05-01 12:30:45")]
    pub created_at: String,
    /// Stored image paths, in upload order
    pub images: Vec<String>,
}

impl ReportResponseDto {
    pub fn from_row(row: ReportWithImages, format: TimestampFormat) -> Self {
        let images = row.images();
        Self {
            id: row.id,
            project_name: row.project_name,
            location: row.location,
            description: row.description,
            created_at: format.format(row.created_at),
            images,
        }
    }
}

/// A report submission as read from the multipart form
#[derive(Debug, Clone, Default, Validate)]
pub struct SubmitReportDto {
    #[validate(length(min = 1, message = "Project Name is required"))]
    pub project_name: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Files from the `images[]` field
    pub images: Vec<UploadedFile>,
    /// Optional `camera_image` data URI
    pub camera_image: Option<String>,
}

impl SubmitReportDto {
    pub fn to_create_report(&self) -> CreateReport {
        CreateReport {
            project_name: self.project_name.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }
}

/// Submit report form DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler reads axum's Multipart stream directly.
#[derive(Debug, Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct SubmitReportForm {
    #[serde(rename = "Project Name")]
    #[schema(example = "Park Bench")]
    pub project_name: String,
    #[serde(rename = "Location")]
    #[schema(example = "5th Ave")]
    pub location: String,
    #[serde(rename = "Description")]
    #[schema(example = "Graffiti")]
    pub description: String,
    /// Photo (png, jpg, jpeg, gif); repeat the field for more, other files are ignored
    #[serde(rename = "images[]")]
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub images: Option<String>,
    /// Camera photo as a data URI (`data:image/jpeg;base64,...`)
    pub camera_image: Option<String>,
}
