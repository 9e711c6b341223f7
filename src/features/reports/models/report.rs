use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::shared::constants::IMAGE_PATH_SEPARATOR;

/// Data for creating a new report
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub project_name: String,
    pub location: String,
    pub description: String,
}

/// Report row joined with its images aggregated into one delimited column
#[derive(Debug, Clone, FromRow)]
pub struct ReportWithImages {
    pub id: i32,
    pub project_name: String,
    pub location: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub image_paths: Option<String>,
}

impl ReportWithImages {
    /// Split the aggregated image column into individual paths, in order
    pub fn images(&self) -> Vec<String> {
        split_image_paths(self.image_paths.as_deref())
    }
}

pub fn split_image_paths(aggregated: Option<&str>) -> Vec<String> {
    match aggregated {
        Some(paths) if !paths.is_empty() => paths
            .split(IMAGE_PATH_SEPARATOR)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_image_paths_empty() {
        assert!(split_image_paths(None).is_empty());
        assert!(split_image_paths(Some("")).is_empty());
    }

    #[test]
    fn test_split_image_paths_keeps_order() {
        assert_eq!(
            split_image_paths(Some("uploads/a.png")),
            vec!["uploads/a.png".to_string()]
        );
        assert_eq!(
            split_image_paths(Some("uploads/b.jpg,uploads/a.png,uploads/c.gif")),
            vec![
                "uploads/b.jpg".to_string(),
                "uploads/a.png".to_string(),
                "uploads/c.gif".to_string(),
            ]
        );
    }
}
