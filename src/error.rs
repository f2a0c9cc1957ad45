//! Error types for ftracker
//!
//! Calculations never fail: degenerate numeric inputs yield `0.0`. Errors only
//! come from the outer surfaces (label and format parsing, export).

use thiserror::Error;

/// Top-level error type for all ftracker operations
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Activity label that is not one of the supported training types
    #[error("Unknown activity: {label}")]
    UnknownActivity { label: String },

    /// Output format name that has no renderer
    #[error("Unknown output format: {format}")]
    UnknownFormat { format: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for ftracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Message shown to the user for a failed command.
///
/// A bare `TrackerError` gets its friendly wording; errors wrapped in
/// context keep the full context chain.
pub fn error_message(err: &anyhow::Error) -> String {
    match err
        .chain()
        .next()
        .and_then(|e| e.downcast_ref::<TrackerError>())
    {
        Some(tracker_err) => tracker_err.user_message(),
        None => format!("{:#}", err),
    }
}

impl TrackerError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::UnknownActivity { label } => format!(
                "'{}' is not a known training type. Use Running, Walking or Swimming.",
                label
            ),
            TrackerError::UnknownFormat { format } => format!(
                "'{}' is not a known output format. Use text, table, json or csv.",
                format
            ),
            _ => self.to_string(),
        }
    }
}
