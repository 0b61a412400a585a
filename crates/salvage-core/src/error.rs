use thiserror::Error;

/// Raised when a caller hands the engine structurally invalid data.
///
/// Validation happens once, before any scoring. Clinical plausibility
/// (a negative age, an eGFR of 400) is not checked here.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    #[error("missing required section: {0}")]
    MissingSection(&'static str),

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("malformed assessment input: {0}")]
    Malformed(#[from] serde_json::Error),
}
