use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ledger file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Malformed record date in ledger: {0}")]
    MalformedRecordDate(String),

    #[error("Invalid date '{0}' (expected DD-MM-YYYY)")]
    InvalidDate(String),

    #[error("Failed to read workbook: {0}")]
    WorkbookRead(String),

    #[error("Failed to write workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
