use crate::models::{default_tabs, ReportTab};
use std::{env, path::PathBuf};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REPORTS_DIR: &str = "apps/static/reports";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub reports_dir: PathBuf,
    tabs: Vec<ReportTab>,
}

impl Config {
    /// Reads `PORT`, `REPORTS_DIR` and `REPORT_TABS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let reports_dir = lookup("REPORTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORTS_DIR));

        let tabs = match lookup("REPORT_TABS").map(|raw| parse_tabs(&raw)) {
            Some(tabs) if !tabs.is_empty() => tabs,
            Some(_) => {
                warn!("REPORT_TABS has no valid entries, using default tabs");
                default_tabs()
            }
            None => default_tabs(),
        };

        Self {
            port,
            reports_dir,
            tabs,
        }
    }

    pub fn tabs(&self) -> &[ReportTab] {
        &self.tabs
    }
}

/// Parses `Label=value` pairs separated by commas, skipping malformed ones.
pub fn parse_tabs(raw: &str) -> Vec<ReportTab> {
    raw.split(',')
        .filter_map(|entry| {
            let (label, value) = entry.split_once('=')?;
            let (label, value) = (label.trim(), value.trim());
            if label.is_empty() || value.is_empty() {
                return None;
            }
            Some(ReportTab::new(label, value))
        })
        .collect()
}
