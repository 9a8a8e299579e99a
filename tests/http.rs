use once_cell::sync::Lazy;
use report_dashboard::models::default_tabs;
use report_dashboard::ui::PageView;
use report_dashboard::{DashboardController, HttpReportDateSource};
use reqwest::{Client, StatusCode};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const OLDER: &str = "01-01-2021_01-07-2021";
const NEWER: &str = "01-08-2021_01-14-2021";
const DRIFT_REPORT: &str = "data_drift_report.html";

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::{Once, OnceLock};

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);
    static REPORTS_DIR: OnceLock<PathBuf> = OnceLock::new();

    pub fn register(pid: u32, reports_dir: PathBuf) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            let _ = REPORTS_DIR.set(reports_dir);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
        if let Some(dir) = REPORTS_DIR.get() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn seed_reports_dir() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut root = std::env::temp_dir();
    root.push(format!("report_dashboard_http_{}_{}", std::process::id(), nanos));

    for date in [OLDER, NEWER] {
        let dir = root.join(date);
        std::fs::create_dir_all(&dir).expect("create report dir");
        std::fs::write(
            dir.join(DRIFT_REPORT),
            format!("<html><body>drift report {date}</body></html>"),
        )
        .expect("write report");
    }
    std::fs::create_dir_all(root.join("scratch")).expect("create stray dir");
    root
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/get_report_dates")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let reports_dir = seed_reports_dir();
    let child = Command::new(env!("CARGO_BIN_EXE_report_dashboard"))
        .env("PORT", port.to_string())
        .env("REPORTS_DIR", &reports_dir)
        .env_remove("REPORT_TABS")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id(), reports_dir.clone());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

#[tokio::test]
async fn http_report_dates_newest_first() {
    let server = shared_server().await;

    let body = Client::new()
        .get(format!("{}/get_report_dates", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let dates: Vec<String> = serde_json::from_str(&body).unwrap();

    assert_eq!(dates, vec![NEWER.to_string(), OLDER.to_string()]);
}

#[tokio::test]
async fn http_serves_report_files() {
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/static/reports/{OLDER}/{DRIFT_REPORT}", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[reqwest::header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(response.text().await.unwrap().contains(&format!("drift report {OLDER}")));

    let missing = client
        .get(format!("{}/static/reports/{OLDER}/reg_performance_report.html", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_index_renders_initial_selection() {
    let server = shared_server().await;

    let html = Client::new()
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains(&format!(r#"<option value="{NEWER}" selected>"#)));
    assert!(html.contains(&format!(r#"<option value="{OLDER}">"#)));
    assert!(html.contains(&format!(r#"src="static/reports/{NEWER}/{DRIFT_REPORT}""#)));
    assert!(html.contains(r#"id="reportTabSelector""#));
}

#[tokio::test]
async fn http_controller_follows_server_dates() {
    let server = shared_server().await;
    let source = HttpReportDateSource::new(&server.base_url);
    let mut dashboard = DashboardController::new(source, PageView::new(default_tabs()));

    let url = dashboard.setup_dashboard().await;
    assert_eq!(url, Some(format!("static/reports/{NEWER}/{DRIFT_REPORT}")));
    assert_eq!(dashboard.view().options().len(), 2);
    assert!(dashboard.view().options()[0].selected);

    let url = dashboard.on_date_change(OLDER);
    assert_eq!(url, Some(format!("static/reports/{OLDER}/{DRIFT_REPORT}")));

    let url = dashboard.on_report_click("reg_performance_report.html");
    assert_eq!(url, Some(format!("static/reports/{OLDER}/reg_performance_report.html")));
    assert_eq!(dashboard.view().frame_src(), url.as_deref());
}

#[tokio::test]
async fn http_unreachable_server_leaves_dashboard_empty() {
    let base_url = format!("http://127.0.0.1:{}", pick_free_port());
    let mut dashboard = DashboardController::new(
        HttpReportDateSource::new(&base_url),
        PageView::new(default_tabs()),
    );

    assert_eq!(dashboard.setup_dashboard().await, None);
    assert!(dashboard.report_dates().is_empty());
    assert!(dashboard.view().options().is_empty());
    assert_eq!(dashboard.view().frame_src(), None);
}
