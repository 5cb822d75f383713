// File: crates/gapminder-core/src/error.rs
// Summary: Error type shared by loading, layout and rendering.

use thiserror::Error;

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    /// The CSV resource could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent.
    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// A numeric cell holds text that is neither a number nor a missing marker.
    #[error("line {line}: column '{column}' has non-numeric value '{value}'")]
    InvalidNumber { line: u64, column: &'static str, value: String },

    /// A missing marker was found while the policy forbids missing values.
    #[error("line {line}: column '{column}' is missing")]
    MissingValue { line: u64, column: &'static str },

    /// A filter matched no usable rows, so no extent can be computed.
    #[error("no rows to plot for {what}")]
    EmptySelection { what: String },

    /// Skia surface creation or encoding failed.
    #[error("render failed: {0}")]
    Render(String),
}

impl VizError {
    pub fn empty(what: impl Into<String>) -> Self {
        Self::EmptySelection { what: what.into() }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
