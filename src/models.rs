use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date formats accepted for the start of a report date token.
const START_DATE_FORMATS: [&str; 2] = ["%m-%d-%Y", "%Y-%m-%d"];

/// Opaque token naming a dated report bundle, e.g. `01-01-2021_01-07-2021`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportDate(String);

impl ReportDate {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human readable form: every `-` becomes `/`, every `_` becomes ` - `.
    pub fn label(&self) -> String {
        self.0.replace('-', "/").replace('_', " - ")
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        let head = self.0.split('_').next()?;
        START_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(head, format).ok())
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOption {
    pub label: String,
    pub value: String,
    pub selected: bool,
}

impl DateOption {
    pub fn for_date(date: &ReportDate, selected: bool) -> Self {
        Self {
            label: date.label(),
            value: date.as_str().to_string(),
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTab {
    pub label: String,
    pub value: String,
}

impl ReportTab {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

pub fn default_tabs() -> Vec<ReportTab> {
    vec![
        ReportTab::new("Data Drift", "data_drift_report.html"),
        ReportTab::new("Numerical Target Drift", "num_target_drift_report.html"),
        ReportTab::new("Regression Performance", "reg_performance_report.html"),
    ]
}
