use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::files::FileService;
use crate::features::reports::dtos::SubmitReportDto;
use crate::features::reports::models::CreateReport;

/// Message returned when any required form field is missing or empty
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Service for report submissions
pub struct ReportService {
    pool: PgPool,
    file_service: Arc<FileService>,
}

impl ReportService {
    pub fn new(pool: PgPool, file_service: Arc<FileService>) -> Self {
        Self { pool, file_service }
    }

    /// Validate a submission, store its images and persist it.
    ///
    /// Nothing is written when a required field is missing. Images rejected
    /// by the file service are dropped silently; a broken inline image does not
    /// fail the submission.
    ///
    /// # Returns
    /// The id of the new report
    pub async fn submit(&self, submission: SubmitReportDto) -> Result<i32> {
        submission.validate().map_err(|e| {
            debug!("Rejected report submission: {}", e);
            AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())
        })?;

        let mut image_paths = self.file_service.store_uploads(&submission.images).await?;

        if let Some(data_uri) = submission.camera_image.as_deref() {
            if let Some(path) = self.file_service.store_inline_image(data_uri).await {
                image_paths.push(path);
            }
        }

        self.create(&submission.to_create_report(), &image_paths)
            .await
    }

    /// Insert a report and one image row per path in a single transaction
    pub async fn create(&self, data: &CreateReport, image_paths: &[String]) -> Result<i32> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin report transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let report_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO reports (project_name, location, description)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&data.project_name)
        .bind(&data.location)
        .bind(&data.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Database(e)
        })?;

        for path in image_paths {
            sqlx::query(
                r#"
                INSERT INTO report_images (report_id, image_path)
                VALUES ($1, $2)
                "#,
            )
            .bind(report_id)
            .bind(path)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to attach image to report {}: {:?}", report_id, e);
                AppError::Database(e)
            })?;
        }

        tx.commit().await?;

        info!(
            "Created report: {} ({}) with {} image(s)",
            report_id,
            data.project_name,
            image_paths.len()
        );

        Ok(report_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::files::dtos::UploadedFile;
    use crate::features::reports::services::ReportQueryService;
    use crate::shared::test_helpers::unreachable_pool;
    use fake::faker::address::en::StreetName;
    use fake::faker::lorem::en::{Sentence, Word};
    use fake::Fake;
    use tempfile::TempDir;

    fn service(pool: PgPool) -> (TempDir, ReportService) {
        let dir = TempDir::new().unwrap();
        let file_service = Arc::new(FileService::new(dir.path()));
        (dir, ReportService::new(pool, file_service))
    }

    fn fake_submission() -> SubmitReportDto {
        SubmitReportDto {
            project_name: Word().fake(),
            location: StreetName().fake(),
            description: Sentence(3..8).fake(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_missing_fields_writes_nothing() {
        let (dir, service) = service(unreachable_pool());
        let submission = SubmitReportDto {
            location: String::new(),
            images: vec![UploadedFile::new("bench.png", vec![1u8, 2, 3])],
            ..fake_submission()
        };

        let result = service.submit(submission).await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, MISSING_FIELDS_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_submit_database_unavailable() {
        let (_dir, service) = service(unreachable_pool());

        let result = service.submit(fake_submission()).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_submit_persists_report_and_images(pool: PgPool) {
        let (dir, service) = service(pool.clone());
        let submission = SubmitReportDto {
            images: vec![
                UploadedFile::new("bench.png", vec![1u8, 2, 3]),
                UploadedFile::new("notes.txt", vec![4u8]),
            ],
            ..fake_submission()
        };
        let expected_name = submission.project_name.clone();

        let report_id = service.submit(submission).await.unwrap();

        let query = ReportQueryService::new(pool);
        let reports = query.list_all().await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, report_id);
        assert_eq!(reports[0].project_name, expected_name);
        assert_eq!(
            reports[0].images,
            vec![dir.path().join("bench.png").to_string_lossy().into_owned()]
        );
    }

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_create_round_trips_image_counts(pool: PgPool) {
        let (_dir, service) = service(pool.clone());
        let image_counts = [0usize, 1, 3, 0, 2];

        for count in image_counts {
            let paths: Vec<String> = (0..count)
                .map(|i| format!("uploads/{}_{}.png", Word().fake::<String>(), i))
                .collect();
            service
                .create(&fake_submission().to_create_report(), &paths)
                .await
                .unwrap();
        }

        let reports = ReportQueryService::new(pool).list_all().await.unwrap();
        assert_eq!(reports.len(), image_counts.len());

        // Newest first, so counts come back reversed
        let listed: Vec<usize> = reports.iter().map(|r| r.images.len()).collect();
        let mut expected = image_counts.to_vec();
        expected.reverse();
        assert_eq!(listed, expected);
    }

    #[sqlx::test]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_create_rolls_back_on_image_failure(pool: PgPool) {
        let (_dir, service) = service(pool.clone());
        // image_path is VARCHAR(255)
        let paths = vec!["uploads/ok.png".to_string(), "x".repeat(300)];

        let result = service
            .create(&fake_submission().to_create_report(), &paths)
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
        let reports = ReportQueryService::new(pool).list_all().await.unwrap();
        assert!(reports.is_empty());
    }
}
