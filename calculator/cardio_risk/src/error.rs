use cardio_types::ValidationError;
use thiserror::Error;

/// Errors raised by the risk core. Every variant is a caller-input problem;
/// nothing here is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

pub type RiskResult<T> = Result<T, RiskError>;
