mod file_dto;

pub use file_dto::{is_extension_allowed, UploadedFile};
