use serde::{Deserialize, Serialize};

/// Runtime settings for flowchart traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    /// Optional cap on transitions per evaluation. Once reached, traversal stops
    /// with `EvaluationError::StepLimitExceeded`. Cycles are detected whether or
    /// not a cap is set.
    pub max_steps: Option<usize>,
}

impl EvaluationOptions {
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }

    pub fn unbounded() -> Self {
        Self { max_steps: None }
    }
}
