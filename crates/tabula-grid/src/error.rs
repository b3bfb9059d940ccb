//! Error types for the grid engine

use tabula_core::RecordId;
use thiserror::Error;

use crate::ViewContext;

pub type GridResult<T> = Result<T, GridError>;

/// Misconfiguration of view contexts or column schemas.
///
/// These are developer-facing defects and should surface during development.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown view context: {0}")]
    UnknownContext(String),

    #[error("No column schema registered for view context '{0}'")]
    MissingSchema(ViewContext),

    #[error("Malformed column '{key}' in '{context}': {reason}")]
    MalformedColumn {
        context: ViewContext,
        key: String,
        reason: String,
    },

    #[error("Default sort field '{field}' in '{context}' is not a sortable column")]
    InvalidDefaultSort { context: ViewContext, field: String },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// A cell could not be produced for a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("Record '{record}' has no value for column '{column}' and no fallback is configured")]
    MissingField { record: RecordId, column: String },
}

/// Invalid pagination request. Page numbers are clamped, so only page sizes
/// can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}

/// Any error raised by a grid instance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("Record '{0}' is not part of the current record set")]
    UnknownRecord(RecordId),
}
