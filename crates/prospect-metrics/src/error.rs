//! Error types for loading prospect data and building dashboards.
//!
//! The derivation functions themselves are total and never fail; errors only
//! arise at the edges: configuration, reading a spreadsheet export and
//! writing reports.
//!
//! Errors are serializable so they can be handed to a frontend as
//! `{ "code": ..., "message": ... }`.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

use crate::config::ConfigValidationError;

/// The main error type for the dashboard crate.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The loaded dataset contains no records.
    #[error("Dataset is empty: {0}")]
    EmptyDataset(String),

    /// The input file extension is not one we know how to read.
    #[error("Unsupported input format '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),

    /// The input file does not exist.
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),

    /// A date given on the command line or in a config could not be parsed.
    #[error("Invalid date '{0}' (expected DD/MM/YYYY)")]
    InvalidDate(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<DashboardError>,
    },
}

impl DashboardError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        DashboardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get error code for frontend handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDataset(_) => "EMPTY_DATASET",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Whether the user can fix this by choosing another file or option.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::EmptyDataset(_)
            | Self::UnsupportedFormat(_)
            | Self::FileNotFound(_)
            | Self::InvalidConfig(_)
            | Self::InvalidDate(_) => true,
            Self::WithContext { source, .. } => source.is_user_error(),
            _ => false,
        }
    }
}

impl Serialize for DashboardError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("DashboardError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DashboardError::Polars(e).with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DashboardError::Json(e).with_context(context))
    }
}
