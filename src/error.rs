use pyo3::PyErr;
use pyo3::exceptions::PyValueError;
use thiserror::Error;

/// Rejected user input. Raised before any computation runs, so a failed
/// request never leaves a partial curve behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("points must be a positive integer, got {0:?}")]
    InvalidPointCount(String),

    #[error("{field} must be finite, got {value}")]
    NonFiniteBound { field: &'static str, value: f64 },

    #[error("an SNR sweep needs at least one point")]
    EmptySweep,
}

/// Returned by the strict `Modulation` parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown modulation {0:?}")]
pub struct UnknownModulation(pub String);

impl From<InputError> for PyErr {
    fn from(err: InputError) -> PyErr {
        PyValueError::new_err(format!("Simulation error: {err}"))
    }
}

impl From<UnknownModulation> for PyErr {
    fn from(err: UnknownModulation) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
