pub mod sheets;
pub mod text;
pub mod workbook;

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub use sheets::{SheetSource, SheetsClient};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid Google Sheets URL")]
    InvalidUrl,

    #[error("No Google Sheets API key configured (set sheets_api_key or EMAIL_CHECKLIST_SHEETS_KEY)")]
    MissingApiKey,

    #[error("Error loading spreadsheet: {0}")]
    Service(String),

    #[error("No data found in the spreadsheet")]
    NoData,

    #[error("No valid emails found in the spreadsheet")]
    NoValidEmails,

    #[error("Request to the spreadsheet service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read workbook: {0}")]
    Workbook(String),
}

/// Importers selectable from a local file, keyed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    DelimitedText,
    Workbook,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(FileKind::DelimitedText),
            "xlsx" => Some(FileKind::Workbook),
            _ => None,
        }
    }
}

/// Read and parse a local file.
///
/// Returns `Ok(None)` when the extension has no importer; nothing is read in that case.
pub fn import_file(path: &Path) -> Result<Option<Vec<String>>, ImportError> {
    let Some(kind) = FileKind::from_path(path) else {
        info!(path = %path.display(), "No importer for file extension, ignoring");
        return Ok(None);
    };

    let emails = match kind {
        FileKind::DelimitedText => {
            text::parse_lines(&String::from_utf8_lossy(&fs::read(path)?))
        }
        FileKind::Workbook => workbook::parse_workbook(&fs::read(path)?)?,
    };

    info!(path = %path.display(), count = emails.len(), ?kind, "Imported file");
    Ok(Some(emails))
}

/// Trimmed copy of `value`, or `None` when nothing but whitespace remains.
pub(crate) fn normalize_cell(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
