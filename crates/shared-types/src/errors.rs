//! Error types shared by every dashboard crate

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for dashboard operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DashboardError {
    /// A required input file, column or record set is absent. Always fatal.
    #[error("Missing data: {resource}")]
    MissingData { resource: String },

    #[error("Data parse error in {path}{}: {message}", line_suffix(.line))]
    DataParse {
        path: String,
        line: Option<u64>,
        message: String,
    },

    #[error("Duplicate observation in {path}: {state} {year}")]
    DuplicateObservation {
        path: String,
        state: String,
        year: i32,
    },

    /// The resolver was asked about a state or mode outside the built catalog.
    #[error("Invalid selection: {message}")]
    InvalidSelection { message: String },

    #[error("Failed to write {path}: {message}")]
    Output { path: String, message: String },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

impl DashboardError {
    pub fn missing(resource: impl Into<String>) -> Self {
        DashboardError::MissingData {
            resource: resource.into(),
        }
    }

    /// Whether the error comes from the input data rather than from a caller
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            DashboardError::MissingData { .. }
                | DashboardError::DataParse { .. }
                | DashboardError::DuplicateObservation { .. }
        )
    }
}
