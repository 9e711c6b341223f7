//! Server-rendered pages.
//!
//! ```ignore
//! use crate::shared::templates::render_admin_page;
//!
//! let html = render_admin_page(&reports)?;
//! ```

pub mod engine;

pub use engine::{render_template, TemplateError};

use minijinja::context;
use serde::Serialize;

use crate::features::files::upload_url;
use crate::features::reports::dtos::ReportResponseDto;

const ADMIN_PAGE_TITLE: &str = "Vandalized Project Reports";

/// A report as shown on the admin page, with browser-facing image links
#[derive(Serialize)]
struct AdminReportView<'a> {
    id: i32,
    project_name: &'a str,
    location: &'a str,
    description: &'a str,
    created_at: &'a str,
    image_urls: Vec<String>,
}

impl<'a> From<&'a ReportResponseDto> for AdminReportView<'a> {
    fn from(report: &'a ReportResponseDto) -> Self {
        Self {
            id: report.id,
            project_name: &report.project_name,
            location: &report.location,
            description: &report.description,
            created_at: &report.created_at,
            image_urls: report
                .images
                .iter()
                .filter_map(|path| upload_url(path))
                .collect(),
        }
    }
}

/// Render the admin listing page for the given reports
pub fn render_admin_page(reports: &[ReportResponseDto]) -> Result<String, TemplateError> {
    let reports: Vec<AdminReportView<'_>> = reports.iter().map(AdminReportView::from).collect();

    render_template(
        "admin.html",
        context! {
            title => ADMIN_PAGE_TITLE,
            reports => reports,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: i32, project_name: &str, images: &[&str]) -> ReportResponseDto {
        ReportResponseDto {
            id,
            project_name: project_name.to_string(),
            location: "5th Ave".to_string(),
            description: "Graffiti".to_string(),
            created_at: "2024-05-01T12:30:45".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_admin_page_lists_reports_and_images() {
        let html = render_admin_page(&[
            report(2, "Park Bench", &["uploads/bench.png", "uploads/bench2.jpg"]),
            report(1, "Bus Stop", &[]),
        ])
        .unwrap();

        assert!(html.contains("2 report(s)"));
        assert!(html.contains("Park Bench"));
        assert!(html.contains("Bus Stop"));
        assert!(html.contains("bench.png"));
        assert!(html.contains("bench2.jpg"));
        assert_eq!(html.matches("<img ").count(), 2);
        assert!(html.contains("id=\"report-1\""));
    }

    #[test]
    fn test_admin_page_links_images_under_uploads_prefix() {
        let html = render_admin_page(&[report(
            4,
            "Mural",
            &["/srv/reportme/uploads/wall.png", "data/img/camera.jpg"],
        )])
        .unwrap();

        // minijinja may escape `/` inside attributes
        let html = html.replace("&#x2f;", "/");
        assert!(html.contains(r#"src="/uploads/wall.png""#));
        assert!(html.contains(r#"href="/uploads/camera.jpg""#));
        assert!(!html.contains("/srv/"));
        assert!(!html.contains("data/img"));
    }

    #[test]
    fn test_admin_page_empty() {
        let html = render_admin_page(&[]).unwrap();
        assert!(html.contains("No reports yet."));
    }

    #[test]
    fn test_admin_page_escapes_user_text() {
        let html = render_admin_page(&[report(3, "<script>alert(1)</script>", &[])]).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
