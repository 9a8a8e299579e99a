//! Date and report selection for the report dashboard.
//!
//! [`DashboardController`] owns the fetched report dates and the current
//! selection. It reads from a [`ReportDateSource`] and writes to a
//! [`DashboardView`], which stands in for the page controls: the date
//! selector, the report tab strip and the display frame.

use crate::models::{DateOption, ReportDate};
use crate::source::ReportDateSource;
use tracing::{debug, info, warn};

/// Path prefix the display frame's source is built under.
pub const REPORT_URL_PREFIX: &str = "static/reports";

/// The page controls the controller drives.
pub trait DashboardView {
    fn clear_date_options(&mut self);
    fn append_date_option(&mut self, option: DateOption);
    /// Current value of the date selector, `None` when it has no options.
    fn selected_date(&self) -> Option<String>;
    /// Selects the option with `value`; `false` when no such option exists.
    fn select_date(&mut self, value: &str) -> bool;
    /// Value of the first report tab carrying the active marker.
    fn active_report(&self) -> Option<String>;
    /// Moves the active marker to the tab with `value`; `false` when no such tab exists.
    fn mark_active_report(&mut self, value: &str) -> bool;
    fn set_frame_src(&mut self, src: &str);
}

/// `Ready` once setup has run; events are only handled then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
}

/// The date and report the frame should show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub date: Option<ReportDate>,
    pub report: Option<String>,
}

/// Frame source for a date and report: `static/reports/{date}/{report}`.
pub fn report_url(date: &ReportDate, report: &str) -> String {
    format!("{REPORT_URL_PREFIX}/{date}/{report}")
}

/// Drives a [`DashboardView`] from the dates a [`ReportDateSource`] returns.
pub struct DashboardController<S, V> {
    source: S,
    view: V,
    report_dates: Vec<ReportDate>,
    selection: Selection,
    phase: Phase,
}

impl<S, V> DashboardController<S, V>
where
    S: ReportDateSource,
    V: DashboardView,
{
    pub fn new(source: S, view: V) -> Self {
        Self {
            source,
            view,
            report_dates: Vec::new(),
            selection: Selection::default(),
            phase: Phase::Uninitialized,
        }
    }

    pub fn report_dates(&self) -> &[ReportDate] {
        &self.report_dates
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Replaces the date list with the source's answer.
    ///
    /// A failed fetch is logged and leaves the list as it was; the return
    /// value tells whether the list was replaced.
    pub async fn fetch_report_dates(&mut self) -> bool {
        match self.source.fetch_report_dates().await {
            Ok(dates) => {
                info!(count = dates.len(), "fetched report dates");
                self.report_dates = dates;
                true
            }
            Err(err) => {
                warn!("error getting report dates: {err}");
                false
            }
        }
    }

    /// Rebuilds the date selector from the current list, first entry selected.
    pub fn populate_date_select(&mut self) {
        self.view.clear_date_options();
        for (i, date) in self.report_dates.iter().enumerate() {
            self.view.append_date_option(DateOption::for_date(date, i == 0));
        }
        debug!(options = self.report_dates.len(), "populated date selector");
    }

    pub fn active_date(&self) -> Option<ReportDate> {
        self.view
            .selected_date()
            .filter(|value| !value.is_empty())
            .map(ReportDate::new)
    }

    pub fn active_report(&self) -> Option<String> {
        self.view.active_report().filter(|value| !value.is_empty())
    }

    pub fn update_report_url(&mut self, date: &ReportDate, report: &str) -> String {
        let url = report_url(date, report);
        debug!(%url, "updated report frame source");
        self.view.set_frame_src(&url);
        url
    }

    /// Points the frame at the current selection.
    ///
    /// Nothing is rendered while either the date or the report is unknown.
    pub fn render(&mut self) -> Option<String> {
        let Selection { date, report } = self.selection.clone();
        match (date, report) {
            (Some(date), Some(report)) => Some(self.update_report_url(&date, &report)),
            (date, report) => {
                warn!(
                    has_date = date.is_some(),
                    has_report = report.is_some(),
                    "skipping report render, selection incomplete"
                );
                None
            }
        }
    }

    pub async fn setup_dashboard(&mut self) -> Option<String> {
        self.fetch_report_dates().await;
        self.populate_date_select();
        self.selection = Selection {
            date: self.active_date(),
            report: self.active_report(),
        };
        self.phase = Phase::Ready;
        self.render()
    }

    /// Handles a new value in the date selector. The report stays as it was.
    pub fn on_date_change(&mut self, value: &str) -> Option<String> {
        if self.phase != Phase::Ready {
            debug!(value, "ignoring date change before setup");
            return None;
        }
        if !value.is_empty() {
            if self.view.select_date(value) {
                self.selection.date = Some(ReportDate::new(value));
            } else {
                debug!(value, "ignoring unknown report date");
            }
        }
        self.render()
    }

    /// Handles a click in the report tab strip. The date stays as it was.
    pub fn on_report_click(&mut self, value: &str) -> Option<String> {
        if self.phase != Phase::Ready {
            debug!(value, "ignoring report click before setup");
            return None;
        }
        if !value.is_empty() {
            if self.view.mark_active_report(value) {
                self.selection.report = Some(value.to_string());
            } else {
                debug!(value, "ignoring unknown report");
            }
        }
        self.render()
    }
}
