use crate::models::ReportDate;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Lists the report date directories under `dir`, newest start date first.
///
/// Plain files and directories whose name does not start with a date are
/// left out.
pub async fn list_report_dates(dir: &Path) -> Result<Vec<ReportDate>, std::io::Error> {
    let mut entries = fs::read_dir(dir).await?;
    let mut dated = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };

        let date = ReportDate::new(name);
        match date.start_date() {
            Some(start) => dated.push((start, date)),
            None => debug!(token = %date, "skipping report directory without a start date"),
        }
    }

    dated.sort_by(|(a_start, a), (b_start, b)| {
        b_start.cmp(a_start).then_with(|| b.as_str().cmp(a.as_str()))
    });

    Ok(dated.into_iter().map(|(_, date)| date).collect())
}

/// Resolves `<root>/<date>/<report>`, rejecting segments that could leave the root.
pub fn report_file_path(root: &Path, date: &str, report: &str) -> Option<PathBuf> {
    let valid = |segment: &str| {
        !segment.is_empty()
            && segment != "."
            && segment != ".."
            && !segment.contains(['/', '\\'])
    };
    if !valid(date) || !valid(report) {
        return None;
    }
    Some(root.join(date).join(report))
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
