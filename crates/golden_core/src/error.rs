use thiserror::Error;

/// Errors raised by the model and harness. Tolerance mismatches are not errors;
/// they are reported through [`crate::verify::CheckOutcome`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GoldenError {
    #[error("{what} produced a non-finite value")]
    NonFinite { what: &'static str },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, GoldenError>;
