/// Centralized error types for the activity tracker
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    // Configuration Errors
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // Network Errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Upstream API error: {code} - {message}")]
    UpstreamApiError { code: String, message: String },

    // Data Errors
    #[error("Deserialization failed: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Missing data: {0}")]
    MissingData(String),

    // File I/O Errors
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    // Generic Errors
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// Check if error is recoverable (transient upstream/network conditions)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TrackerError::HttpError(_)
                | TrackerError::UpstreamApiError { .. }
                | TrackerError::MissingData(_)
        )
    }

    /// Get error code for logging/monitoring
    pub fn error_code(&self) -> &str {
        match self {
            TrackerError::UnsupportedChain(_) => "CFG_001",
            TrackerError::ConfigError(_) => "CFG_002",
            TrackerError::InvalidParameter(_) => "CFG_003",
            TrackerError::HttpError(_) => "NET_001",
            TrackerError::UpstreamApiError { .. } => "NET_002",
            TrackerError::DeserializationError(_) => "DATA_001",
            TrackerError::MissingData(_) => "DATA_002",
            TrackerError::FileError(_) => "FILE_001",
            TrackerError::InternalError(_) => "INT_001",
        }
    }
}
