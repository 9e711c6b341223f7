pub mod dtos;
pub mod routes;
pub mod services;

pub use routes::{routes, upload_url};
pub use services::FileService;
