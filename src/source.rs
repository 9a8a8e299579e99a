use crate::errors::FetchError;
use crate::models::ReportDate;
use crate::reports::list_report_dates;
use reqwest::Client;
use std::path::PathBuf;

pub const REPORT_DATES_PATH: &str = "/get_report_dates";

/// Supplies the ordered list of report dates a dashboard can show.
pub trait ReportDateSource {
    fn fetch_report_dates(&self) -> impl Future<Output = Result<Vec<ReportDate>, FetchError>> + Send;
}

/// Reads report dates straight from the reports directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ReportDateSource for DirectorySource {
    async fn fetch_report_dates(&self) -> Result<Vec<ReportDate>, FetchError> {
        Ok(list_report_dates(&self.root).await?)
    }
}

/// Fetches report dates from a running dashboard server.
#[derive(Debug, Clone)]
pub struct HttpReportDateSource {
    client: Client,
    url: String,
}

impl HttpReportDateSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}{REPORT_DATES_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReportDateSource for HttpReportDateSource {
    async fn fetch_report_dates(&self) -> Result<Vec<ReportDate>, FetchError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}
