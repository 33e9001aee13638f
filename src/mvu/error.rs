use thiserror::Error;

use crate::error::ScorecardError;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error(transparent)]
    Scorecard(#[from] ScorecardError),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("export error: {0}")]
    Export(String),
    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        Self::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<String> for AppError {
    fn from(e: String) -> Self {
        Self::Other(e)
    }
}

impl From<&str> for AppError {
    fn from(e: &str) -> Self {
        Self::Other(e.to_string())
    }
}
