pub mod fetch_service;
pub mod export_service;

pub use fetch_service::FetchService;
pub use export_service::ExportService;
