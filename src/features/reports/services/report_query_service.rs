use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{ReportResponseDto, TimestampFormat};
use crate::features::reports::models::ReportWithImages;

/// Reports joined with their images, newest first.
///
/// Image paths are aggregated into one comma-separated column in insertion
/// order; stored file names never contain a comma.
const REPORTS_WITH_IMAGES_SQL: &str = r#"
    SELECT
        r.id,
        r.project_name,
        r.location,
        r.description,
        r.created_at,
        STRING_AGG(ri.image_path, ',' ORDER BY ri.id) AS image_paths
    FROM reports r
    LEFT JOIN report_images ri ON ri.report_id = r.id
    GROUP BY r.id
    ORDER BY r.created_at DESC, r.id DESC
"#;

/// Service for reading reports back out
pub struct ReportQueryService {
    pool: PgPool,
}

impl ReportQueryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Most recent reports, capped at `limit`, with display-formatted timestamps
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<ReportResponseDto>> {
        let sql = format!("{} LIMIT $1", REPORTS_WITH_IMAGES_SQL);
        let rows = sqlx::query_as::<_, ReportWithImages>(&sql)
            .bind(limit.max(0))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list recent reports: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(Self::to_dtos(rows, TimestampFormat::Display))
    }

    /// Every report, with ISO-8601 timestamps
    pub async fn list_all(&self) -> Result<Vec<ReportResponseDto>> {
        let rows = sqlx::query_as::<_, ReportWithImages>(REPORTS_WITH_IMAGES_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(Self::to_dtos(rows, TimestampFormat::Iso8601))
    }

    fn to_dtos(rows: Vec<ReportWithImages>, format: TimestampFormat) -> Vec<ReportResponseDto> {
        rows.into_iter()
            .map(|row| ReportResponseDto::from_row(row, format))
            .collect()
    }
}
