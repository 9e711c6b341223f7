use utoipa::{Modify, OpenApi};

use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        reports_handlers::report_handler::submit_report,
        reports_handlers::report_handler::get_recent_reports,
        reports_handlers::report_handler::list_reports,
    ),
    components(
        schemas(
            MessageResponse,
            ErrorResponse,
            reports_dtos::ReportResponseDto,
            reports_dtos::SubmitReportForm,
        )
    ),
    tags(
        (name = "reports", description = "Vandalized project reports"),
    ),
    info(
        title = "ReportMe API",
        version = "0.1.0",
        description = "Reports about vandalized projects",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
