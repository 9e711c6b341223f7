mod report_query_service;
mod report_service;

pub use report_query_service::ReportQueryService;
pub use report_service::{ReportService, MISSING_FIELDS_MESSAGE};
