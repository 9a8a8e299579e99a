use crate::dashboard::DashboardView;
use crate::models::{DateOption, ReportTab};

/// Server-side stand-in for the dashboard page controls.
///
/// The first tab starts out active, matching the markup the browser receives.
#[derive(Debug, Clone)]
pub struct PageView {
    options: Vec<DateOption>,
    tabs: Vec<ReportTab>,
    active_tab: Option<usize>,
    frame_src: Option<String>,
}

impl PageView {
    pub fn new(tabs: Vec<ReportTab>) -> Self {
        let active_tab = if tabs.is_empty() { None } else { Some(0) };
        Self {
            options: Vec::new(),
            tabs,
            active_tab,
            frame_src: None,
        }
    }

    pub fn options(&self) -> &[DateOption] {
        &self.options
    }

    pub fn frame_src(&self) -> Option<&str> {
        self.frame_src.as_deref()
    }
}

impl DashboardView for PageView {
    fn clear_date_options(&mut self) {
        self.options.clear();
    }

    fn append_date_option(&mut self, option: DateOption) {
        self.options.push(option);
    }

    fn selected_date(&self) -> Option<String> {
        self.options
            .iter()
            .find(|option| option.selected)
            .or_else(|| self.options.first())
            .map(|option| option.value.clone())
    }

    fn select_date(&mut self, value: &str) -> bool {
        if !self.options.iter().any(|option| option.value == value) {
            return false;
        }
        for option in &mut self.options {
            option.selected = option.value == value;
        }
        true
    }

    fn active_report(&self) -> Option<String> {
        self.active_tab
            .and_then(|index| self.tabs.get(index))
            .map(|tab| tab.value.clone())
    }

    fn mark_active_report(&mut self, value: &str) -> bool {
        match self.tabs.iter().position(|tab| tab.value == value) {
            Some(index) => {
                self.active_tab = Some(index);
                true
            }
            None => false,
        }
    }

    fn set_frame_src(&mut self, src: &str) {
        self.frame_src = Some(src.to_string());
    }
}

pub fn render_index(view: &PageView) -> String {
    let options: String = view
        .options
        .iter()
        .map(|option| {
            let selected = if option.selected { " selected" } else { "" };
            format!(
                "\n          <option value=\"{}\"{selected}>{}</option>",
                escape_html(&option.value),
                escape_html(&option.label)
            )
        })
        .collect();

    let tabs: String = view
        .tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let active = view.active_tab == Some(index);
            format!(
                "\n        <button class=\"tab{}\" type=\"button\" role=\"tab\" aria-selected=\"{active}\" value=\"{}\">{}</button>",
                if active { " active" } else { "" },
                escape_html(&tab.value),
                escape_html(&tab.label)
            )
        })
        .collect();

    let frame_src = view
        .frame_src
        .as_deref()
        .map(|src| format!(" src=\"{}\"", escape_html(src)))
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{DATE_OPTIONS}}", &options)
        .replace("{{REPORT_TABS}}", &tabs)
        .replace("{{FRAME_SRC}}", &frame_src)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Model Monitoring Reports</title>
  <style>
    :root {
      --bg: #f4f6f8;
      --ink: #1f2a33;
      --muted: #66717c;
      --accent: #2f6f8f;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(31, 42, 51, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 24px 18px 36px;
    }

    .app {
      width: min(1280px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 20px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3vw, 2.2rem);
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    select {
      min-width: 260px;
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid rgba(31, 42, 51, 0.2);
      font-size: 1rem;
      background: var(--card);
      color: var(--ink);
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 111, 143, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      appearance: none;
      border: none;
      background: transparent;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    #reportDisplay {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      overflow: hidden;
    }

    #reportDisplay iframe {
      width: 100%;
      height: 78vh;
      border: none;
      display: block;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Model Monitoring Reports</h1>
        <p class="subtitle">Pick a date range and a report to view.</p>
      </div>
      <label>
        Date range
        <select id="dateRangeSelector">{{DATE_OPTIONS}}
        </select>
      </label>
    </header>

    <nav class="tabs" id="reportTabSelector" role="tablist">{{REPORT_TABS}}
    </nav>

    <div id="reportDisplay">
      <iframe title="Report"{{FRAME_SRC}}></iframe>
    </div>
  </main>

  <script>
    const REPORT_DATES_URL = '/get_report_dates';

    const dateSelect = document.getElementById('dateRangeSelector');
    const tabStrip = document.getElementById('reportTabSelector');
    const frame = document.querySelector('#reportDisplay iframe');

    const state = { date: null, report: null, ready: false };

    const dateLabel = (token) => token.replaceAll('-', '/').replaceAll('_', ' - ');

    const fetchReportDates = async () => {
      const res = await fetch(REPORT_DATES_URL);
      if (!res.ok) {
        throw new Error(`report dates request failed: ${res.status}`);
      }
      return res.json();
    };

    const populateDateSelect = (dates) => {
      dateSelect.replaceChildren();
      dates.forEach((date, index) => {
        const option = document.createElement('option');
        option.text = dateLabel(date);
        option.value = date;
        if (index === 0) {
          option.setAttribute('selected', 'selected');
        }
        dateSelect.appendChild(option);
      });
    };

    const getActiveDate = () => dateSelect.value || null;

    const getActiveReport = () => {
      const active = tabStrip.querySelector('button.active');
      return active && active.value ? active.value : null;
    };

    const markActiveReport = (value) => {
      tabStrip.querySelectorAll('button').forEach((button) => {
        const isActive = button.value === value;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
    };

    const updateReportUrl = (date, report) => {
      const url = `static/reports/${date}/${report}`;
      if (frame.getAttribute('src') !== url) {
        frame.src = url;
      }
      return url;
    };

    const render = () => {
      if (!state.date || !state.report) {
        console.warn('skipping report render, selection incomplete');
        return;
      }
      updateReportUrl(state.date, state.report);
    };

    const setupDashboard = async () => {
      try {
        populateDateSelect(await fetchReportDates());
      } catch (err) {
        console.warn('error getting report dates', err);
      }
      state.date = getActiveDate();
      state.report = getActiveReport();
      state.ready = true;
      render();
    };

    dateSelect.addEventListener('change', (event) => {
      if (!state.ready) {
        return;
      }
      if (event.target.value) {
        state.date = event.target.value;
      }
      render();
    });

    tabStrip.addEventListener('click', (event) => {
      if (!state.ready) {
        return;
      }
      const button = event.target.closest('button');
      if (button && button.value) {
        markActiveReport(button.value);
        state.report = button.value;
      }
      render();
    });

    setupDashboard();
  </script>
</body>
</html>
"##;
