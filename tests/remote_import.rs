use anyhow::Result;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use email_checklist::app::{AppState, Mode};
use email_checklist::clipboard::ClipboardSink;
use email_checklist::config::Config;
use email_checklist::import::{ImportError, SheetSource, SheetsClient};
use email_checklist::session::Checklist;
use email_checklist::storage::{MemoryStore, StatePersistence};
use email_checklist::ui::theme::Theme;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/sheet-123_abc/edit#gid=0";
const API_KEY: &str = "test-key";

#[derive(Clone)]
struct FakeSheets {
    metadata: (StatusCode, Value),
    values: (StatusCode, Value),
    requested_ranges: Arc<Mutex<Vec<String>>>,
}

impl FakeSheets {
    fn new(metadata: (StatusCode, Value), values: (StatusCode, Value)) -> Self {
        Self {
            metadata,
            values,
            requested_ranges: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn ok_metadata(values: (StatusCode, Value)) -> Self {
        Self::new(
            (
                StatusCode::OK,
                json!({"sheets": [{"properties": {"title": "Roster"}}, {"properties": {"title": "Other"}}]}),
            ),
            values,
        )
    }

    /// Serve on an ephemeral port; returns the base URL.
    async fn spawn(&self) -> String {
        let metadata = self.metadata.clone();
        let values = self.values.clone();
        let ranges = self.requested_ranges.clone();

        let app = Router::new()
            .route(
                "/v4/spreadsheets/{id}",
                get(move |Path(id): Path<String>, Query(query): Query<HashMap<String, String>>| {
                    let (status, body) = metadata.clone();
                    async move {
                        assert_eq!(id, "sheet-123_abc");
                        assert_eq!(query.get("key").map(String::as_str), Some(API_KEY));
                        (status, Json(body))
                    }
                }),
            )
            .route(
                "/v4/spreadsheets/{id}/values/{range}",
                get(move |Path((_id, range)): Path<(String, String)>| {
                    let (status, body) = values.clone();
                    ranges.lock().unwrap().push(range);
                    async move { (status, Json(body)) }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }
}

async fn fetch(fake: &FakeSheets, url: &str) -> Result<Vec<String>, ImportError> {
    let base_url = fake.spawn().await;
    SheetsClient::new(base_url, API_KEY)
        .fetch_first_column(url)
        .await
}

#[tokio::test]
async fn first_cells_that_are_non_blank_strings_are_kept() {
    let fake = FakeSheets::ok_metadata((
        StatusCode::OK,
        json!({"values": [["x@a.com"], [""], [42]]}),
    ));

    let emails = fetch(&fake, SHEET_URL).await.unwrap();

    assert_eq!(emails, vec!["x@a.com"]);
    assert_eq!(
        fake.requested_ranges.lock().unwrap().as_slice(),
        ["'Roster'!A:A"]
    );
}

#[tokio::test]
async fn metadata_error_message_is_surfaced() {
    let fake = FakeSheets::new(
        (StatusCode::FORBIDDEN, json!({"error": {"message": "Forbidden"}})),
        (StatusCode::OK, json!({"values": [["x@a.com"]]})),
    );

    let err = fetch(&fake, SHEET_URL).await.unwrap_err();

    assert!(matches!(err, ImportError::Service(ref m) if m == "Forbidden"));
    assert!(err.to_string().contains("Forbidden"));
    assert!(fake.requested_ranges.lock().unwrap().is_empty());
}

#[tokio::test]
async fn values_error_without_message_uses_fallback() {
    let fake = FakeSheets::ok_metadata((StatusCode::INTERNAL_SERVER_ERROR, json!({"oops": true})));

    let err = fetch(&fake, SHEET_URL).await.unwrap_err();

    assert!(matches!(err, ImportError::Service(ref m) if m == "Failed to fetch sheet data"));
}

#[tokio::test]
async fn missing_or_empty_values_is_no_data() {
    let absent = FakeSheets::ok_metadata((StatusCode::OK, json!({"range": "'Roster'!A1:A1000"})));
    assert!(matches!(
        fetch(&absent, SHEET_URL).await,
        Err(ImportError::NoData)
    ));

    let empty = FakeSheets::ok_metadata((StatusCode::OK, json!({"values": []})));
    assert!(matches!(
        fetch(&empty, SHEET_URL).await,
        Err(ImportError::NoData)
    ));
}

#[tokio::test]
async fn rows_without_valid_strings_is_no_valid_emails() {
    let fake = FakeSheets::ok_metadata((StatusCode::OK, json!({"values": [["  "], [7], [true]]})));

    assert!(matches!(
        fetch(&fake, SHEET_URL).await,
        Err(ImportError::NoValidEmails)
    ));
}

#[tokio::test]
async fn invalid_url_never_reaches_the_service() {
    let fake = FakeSheets::ok_metadata((StatusCode::OK, json!({"values": [["x@a.com"]]})));

    let result = fetch(&fake, "https://example.com/not-a-sheet").await;

    assert!(matches!(result, Err(ImportError::InvalidUrl)));
    assert!(fake.requested_ranges.lock().unwrap().is_empty());
}

struct NullClipboard;

impl ClipboardSink for NullClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

fn app_with(emails: &[&str], base_url: String) -> AppState {
    let mut checklist =
        Checklist::load(StatePersistence::new(Box::new(MemoryStore::new()))).unwrap();
    checklist
        .apply_import(emails.iter().map(|e| e.to_string()).collect())
        .unwrap();
    let config = Config {
        sheets_api_key: Some(API_KEY.to_string()),
        sheets_base_url: base_url,
        ..Config::default()
    };
    AppState::new(checklist, Box::new(NullClipboard), Theme::default(), config)
}

async fn wait_for_imports(state: &mut AppState) {
    for _ in 0..500 {
        state.check_import_results().unwrap();
        if !state.has_pending_imports() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("remote import did not finish");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_remote_import_keeps_the_previous_list() {
    let fake = FakeSheets::new(
        (StatusCode::FORBIDDEN, json!({"error": {"message": "Forbidden"}})),
        (StatusCode::OK, json!({"values": [["x@a.com"]]})),
    );
    let mut state = app_with(&["keep@x.com"], fake.spawn().await);

    state.start_remote_import(SHEET_URL);
    wait_for_imports(&mut state).await;

    assert_eq!(state.mode, Mode::Alert);
    assert!(state.alert_message.as_deref().unwrap().contains("Forbidden"));
    assert_eq!(state.checklist.state().emails(), ["keep@x.com"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn successful_remote_import_replaces_the_list() {
    let fake = FakeSheets::ok_metadata((
        StatusCode::OK,
        json!({"values": [["new@y.com"], ["other@z.com", "ignored"]]}),
    ));
    let mut state = app_with(&["old@x.com"], fake.spawn().await);

    state.start_remote_import(SHEET_URL);
    wait_for_imports(&mut state).await;

    assert_eq!(state.mode, Mode::Navigate);
    assert_eq!(state.checklist.state().emails(), ["new@y.com", "other@z.com"]);
}
