// File: crates/chart-optimize/src/error.rs
// Summary: Error type for the JSON boundary; the optimize pass itself never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("chart description JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown sampling method '{0}'")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, OptimizeError>;
