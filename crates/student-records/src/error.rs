//! Error types for the student-records crate.
//!
//! The record generator itself is total and never fails. These enums cover
//! the edges around it: parsing dates back from JSON, choosing a record
//! section, rendering output, and the CLI flow.

use thiserror::Error;

/// Errors raised when parsing a [`RecordDate`](crate::RecordDate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// The value is not shaped like `YYYY-MM-DD`.
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    Malformed {
        /// The rejected input.
        value: String,
    },

    /// The month or day lies outside the calendar range.
    #[error("date '{value}' has a month or day out of range")]
    OutOfRange {
        /// The rejected input.
        value: String,
    },
}

/// Raised when a record section name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown record section '{name}'; expected one of: {expected}")]
pub struct SectionParseError {
    /// The name that failed to parse.
    pub name: String,
    /// Comma-separated list of accepted names.
    pub expected: String,
}

/// Errors raised while rendering records as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Serialisation to JSON failed.
    #[error("failed to serialise {section} records: {message}")]
    Serialization {
        /// Section being rendered.
        section: &'static str,
        /// Description of the serialiser error.
        message: String,
    },
}

/// Errors surfaced by the `student-records` command-line flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from flags, environment, or files.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Description of the configuration error.
        message: String,
    },

    /// The requested section is not recognised.
    #[error(transparent)]
    Section(#[from] SectionParseError),

    /// Rendering the records failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}
