pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod reports;
pub mod source;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use dashboard::{DashboardController, DashboardView};
pub use source::{DirectorySource, HttpReportDateSource, ReportDateSource};
pub use state::AppState;
