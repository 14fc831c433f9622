use std::fmt;

/// Errors surfaced by the scenario engine.
///
/// The numeric core has almost no fallible operations: inputs are validated
/// up front, and the only runtime failures are invalid distribution
/// parameters and date arithmetic overflow. Any error aborts the current
/// computation pass; the engine never substitutes default values.
#[derive(Debug)]
pub enum ScenarioError {
    /// A configuration parameter is outside its supported range.
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// The monthly-return distribution could not be constructed.
    InvalidDistributionParameters {
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
    /// Date arithmetic failed (schedule or forecast horizon out of range).
    Date(jiff::Error),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::InvalidParameter {
                field,
                value,
                reason,
            } => {
                write!(f, "invalid parameter {field}={value}: {reason}")
            }
            ScenarioError::InvalidDistributionParameters {
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid return distribution (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
            ScenarioError::Date(e) => write!(f, "date calculation error: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Date(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jiff::Error> for ScenarioError {
    fn from(err: jiff::Error) -> Self {
        ScenarioError::Date(err)
    }
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
