/// Number of reports returned by the public "recent reports" listing
pub const RECENT_REPORTS_LIMIT: i64 = 10;

/// Image extensions accepted for upload (compared case-insensitively)
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Separator used when image paths are aggregated into a single column
pub const IMAGE_PATH_SEPARATOR: char = ',';

// =============================================================================
// SUBMISSION FORM FIELDS
// =============================================================================

pub const FIELD_PROJECT_NAME: &str = "Project Name";
pub const FIELD_LOCATION: &str = "Location";
pub const FIELD_DESCRIPTION: &str = "Description";
pub const FIELD_IMAGES: &str = "images[]";
pub const FIELD_CAMERA_IMAGE: &str = "camera_image";

// =============================================================================
// ROUTES
// =============================================================================

pub const REPORT_FORM_PATH: &str = "/report-vandalized-projects";
