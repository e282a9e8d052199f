//! Remote import from a hosted Google Sheets document.
//!
//! Two requests are made: one for sheet metadata (to learn the first sheet's
//! title) and one for column A of that sheet. Only the first cell of every
//! returned row is considered.

use super::{normalize_cell, ImportError};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

const SPREADSHEET_PATH_MARKER: &str = "/spreadsheets/d/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of the first column of a remote spreadsheet.
#[allow(async_fn_in_trait)]
pub trait SheetSource {
    async fn fetch_first_column(&self, url: &str) -> Result<Vec<String>, ImportError>;
}

#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl SheetsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from configuration, failing early when no API key is available.
    pub fn from_config(config: &crate::config::Config) -> Result<Self, ImportError> {
        let api_key = config.resolved_api_key().ok_or(ImportError::MissingApiKey)?;
        Ok(Self::new(config.sheets_base_url.clone(), api_key))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ImportError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ImportError::Service(format!("bad service URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ImportError::Service("bad service URL".to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn first_sheet_title(&self, spreadsheet_id: &str) -> Result<String, ImportError> {
        let mut url = self.endpoint(&["v4", "spreadsheets", spreadsheet_id])?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties.title");

        debug!(spreadsheet_id, "Fetching spreadsheet metadata");
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response, "Failed to fetch spreadsheet metadata").await?;
        let metadata: SpreadsheetMetadata = response.json().await?;

        metadata
            .sheets
            .into_iter()
            .next()
            .map(|sheet| sheet.properties.title)
            .ok_or(ImportError::NoData)
    }

    async fn column_a_values(
        &self,
        spreadsheet_id: &str,
        sheet_title: &str,
    ) -> Result<Vec<Vec<Value>>, ImportError> {
        let range = format!("'{}'!A:A", sheet_title.replace('\'', "''"));
        let url = self.endpoint(&["v4", "spreadsheets", spreadsheet_id, "values", &range])?;

        debug!(spreadsheet_id, range = %range, "Fetching sheet values");
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response, "Failed to fetch sheet data").await?;
        let values: ValueRange = response.json().await?;

        match values.values {
            Some(rows) if !rows.is_empty() => Ok(rows),
            _ => Err(ImportError::NoData),
        }
    }
}

impl SheetSource for SheetsClient {
    async fn fetch_first_column(&self, url: &str) -> Result<Vec<String>, ImportError> {
        let spreadsheet_id = extract_spreadsheet_id(url).ok_or(ImportError::InvalidUrl)?;

        let title = self.first_sheet_title(spreadsheet_id).await?;
        let rows = self.column_a_values(spreadsheet_id, &title).await?;
        let emails = first_column_strings(&rows);

        if emails.is_empty() {
            return Err(ImportError::NoValidEmails);
        }

        info!(spreadsheet_id, sheet = %title, count = emails.len(), "Imported spreadsheet");
        Ok(emails)
    }
}

/// The document id following `/spreadsheets/d/`, made of `[A-Za-z0-9_-]`.
pub fn extract_spreadsheet_id(url: &str) -> Option<&str> {
    let start = url.find(SPREADSHEET_PATH_MARKER)? + SPREADSHEET_PATH_MARKER.len();
    let rest = &url[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());

    let id = &rest[..end];
    (!id.is_empty()).then_some(id)
}

/// Keep the first cell of each row when it is a non-blank string.
pub fn first_column_strings(rows: &[Vec<Value>]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.first())
        .filter_map(|cell| cell.as_str())
        .filter_map(normalize_cell)
        .collect()
}

async fn ensure_success(response: Response, fallback: &str) -> Result<Response, ImportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = service_error_message(&body).unwrap_or_else(|| fallback.to_string());
    warn!(%status, message = %message, "Spreadsheet service returned an error");
    Err(ImportError::Service(message))
}

fn service_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|m| !m.trim().is_empty())
}
