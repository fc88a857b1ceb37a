use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentifyError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported format `{requested}`: permitted formats are xlsx and docx")]
    UnsupportedFormat { requested: String },
    #[error("malformed sheet `{sheet}`: column {column} separates chunks but holds data")]
    MalformedSheet { sheet: String, column: usize },
    #[error("workbook error: {0}")]
    Workbook(String),
    #[error("export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, SentifyError>;
