pub mod app;
pub mod file_browser;
pub mod labels;
