use itertools::Itertools;
use thiserror::Error;

/// Errors raised while building a `PropertySpecifier`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Selector '{0}' is not a simple field access")]
    InvalidSelector(String),
}

/// Structural problems found by `Flowchart::validate`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("{}", describe_invalid_graph(.dangling, .duplicates))]
    InvalidGraph {
        /// Arrow destinations that name no shape in the flowchart.
        dangling: Vec<String>,
        /// Shape names that occur more than once.
        duplicates: Vec<String>,
    },
}

impl GraphError {
    pub fn dangling(&self) -> &[String] {
        match self {
            GraphError::InvalidGraph { dangling, .. } => dangling,
        }
    }

    pub fn duplicates(&self) -> &[String] {
        match self {
            GraphError::InvalidGraph { duplicates, .. } => duplicates,
        }
    }
}

fn quote_all(names: &[String]) -> String {
    names.iter().map(|n| format!("'{}'", n)).join(", ")
}

fn describe_invalid_graph(dangling: &[String], duplicates: &[String]) -> String {
    let mut parts = Vec::new();
    if !dangling.is_empty() {
        parts.push(format!(
            "The following destination names are invalid: {}",
            quote_all(dangling)
        ));
    }
    if !duplicates.is_empty() {
        parts.push(format!(
            "The following shape names are duplicated: {}",
            quote_all(duplicates)
        ));
    }
    if parts.is_empty() {
        "Invalid flowchart".to_string()
    } else {
        parts.join("; ")
    }
}

/// Errors that can occur while walking a flowchart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Cannot evaluate a flowchart with no shapes")]
    EmptyGraph,

    #[error("Traversal returned to shape '{shape}' after {steps} steps and would never end")]
    CycleDetected { steps: usize, shape: String },

    #[error("Traversal reached its cap of {max_steps} steps at shape '{shape}'")]
    StepLimitExceeded { max_steps: usize, shape: String },

    #[error("Arrow from shape '{from}' points to unknown shape '{to}'")]
    UnknownDestination { from: String, to: String },
}

/// Errors that can occur when assembling a flowchart from a declarative definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("The following rule names are not registered: {}", quote_all(.0))]
    UnknownRules(Vec<String>),

    #[error("Failed to parse flowchart definition: {0}")]
    Parse(String),

    #[error("Artifact error: {0}")]
    Artifact(String),
}
