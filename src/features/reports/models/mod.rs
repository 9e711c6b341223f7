mod report;

pub use report::{split_image_paths, CreateReport, ReportWithImages};
