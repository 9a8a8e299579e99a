use crate::handlers;
use crate::source::REPORT_DATES_PATH;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(REPORT_DATES_PATH, get(handlers::get_report_dates))
        .route("/static/reports/:date/:report", get(handlers::report_file))
        .with_state(state)
}
