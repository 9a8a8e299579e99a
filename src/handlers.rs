use crate::dashboard::DashboardController;
use crate::errors::AppError;
use crate::models::ReportDate;
use crate::reports::{content_type_for, list_report_dates, report_file_path};
use crate::source::DirectorySource;
use crate::state::AppState;
use crate::ui::{render_index, PageView};
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use tokio::fs;
use tracing::{error, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let source = DirectorySource::new(state.reports_dir.as_path());
    let mut dashboard = DashboardController::new(source, PageView::new(state.tabs.to_vec()));
    dashboard.setup_dashboard().await;
    Html(render_index(dashboard.view()))
}

pub async fn get_report_dates(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReportDate>>, AppError> {
    match list_report_dates(&state.reports_dir).await {
        Ok(dates) => Ok(Json(dates)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!(dir = %state.reports_dir.display(), "reports directory not found");
            Ok(Json(Vec::new()))
        }
        Err(err) => {
            error!("failed to list report dates: {err}");
            Err(AppError::internal(err))
        }
    }
}

pub async fn report_file(
    State(state): State<AppState>,
    Path((date, report)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let path = report_file_path(&state.reports_dir, &date, &report)
        .ok_or_else(|| AppError::bad_request("invalid report path"))?;
    let bytes = fs::read(&path).await?;

    Ok(([(header::CONTENT_TYPE, content_type_for(&path))], bytes).into_response())
}
