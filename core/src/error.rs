use std::fmt;

/// Structural failures of the harness.
///
/// Returned directly by registry construction and attached as context to
/// `anyhow::Error` everywhere else, so callers can `downcast_ref` it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    EmptyScenario { scenario: String },
    DuplicateScenario { scenario: String },
    DuplicateVariant { scenario: String, variant: String },
    Setup { scenario: String, variant: String },
    SuiteIncomplete { scenario: String },
    MeasurementMismatch {
        scenario: String,
        reported: usize,
        measured: usize,
    },
}

impl HarnessError {
    pub fn scenario(&self) -> &str {
        match self {
            HarnessError::EmptyScenario { scenario }
            | HarnessError::DuplicateScenario { scenario }
            | HarnessError::DuplicateVariant { scenario, .. }
            | HarnessError::Setup { scenario, .. }
            | HarnessError::SuiteIncomplete { scenario }
            | HarnessError::MeasurementMismatch { scenario, .. } => scenario,
        }
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::EmptyScenario { scenario } => {
                write!(f, "scenario '{}' has no variants", scenario)
            }
            HarnessError::DuplicateScenario { scenario } => {
                write!(f, "scenario '{}' is registered more than once", scenario)
            }
            HarnessError::DuplicateVariant { scenario, variant } => {
                write!(f, "variant '{}' appears twice in scenario '{}'", variant, scenario)
            }
            HarnessError::Setup { scenario, variant } => {
                write!(f, "setup failed for variant '{}' of scenario '{}'", variant, scenario)
            }
            HarnessError::SuiteIncomplete { scenario } => {
                write!(f, "suite '{}' stopped before signalling completion", scenario)
            }
            HarnessError::MeasurementMismatch {
                scenario,
                reported,
                measured,
            } => write!(
                f,
                "suite '{}' reported {} cycles but produced {} measurements",
                scenario, reported, measured
            ),
        }
    }
}

impl std::error::Error for HarnessError {}
