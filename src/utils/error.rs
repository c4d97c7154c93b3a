use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Malformed input at line {line}: {content}")]
    MalformedInput { line: usize, content: String },

    #[error("Invalid timestamp at record {record}: {value}")]
    InvalidTimestamp { record: usize, value: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
