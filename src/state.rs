use crate::models::ReportTab;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub reports_dir: Arc<PathBuf>,
    pub tabs: Arc<[ReportTab]>,
}

impl AppState {
    pub fn new(reports_dir: PathBuf, tabs: Vec<ReportTab>) -> Self {
        Self {
            reports_dir: Arc::new(reports_dir),
            tabs: tabs.into(),
        }
    }
}
