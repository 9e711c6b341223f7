pub mod admin;
pub mod files;
pub mod pages;
pub mod reports;
