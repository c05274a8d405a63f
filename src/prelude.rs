//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the shapeflow crate.
//!
//! # Example
//!
//! ```rust
//! use shapeflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let registry = RuleRegistry::<u32>::default().with("is_even", |n: &u32| n % 2 == 0);
//! let definition: FlowchartDefinition<String> = FlowchartDefinition::from_json(
//!     r#"{ "shapes": [
//!         { "name": "start", "result": "odd", "arrows": [{ "points_to": "even", "rule": "is_even" }] },
//!         { "name": "even", "result": "even" }
//!     ] }"#,
//! )?;
//!
//! let flowchart = definition.assemble(&registry)?;
//! assert_eq!(flowchart.evaluate(&4)?.result, "even");
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Graph and evaluation
pub use crate::evaluator::EvaluationResult;
pub use crate::flowchart::{Arrow, Flowchart, FlowchartBuilder, Shape};
pub use crate::options::EvaluationOptions;

// Fields and rules
pub use crate::field;
pub use crate::field::{PropertySpecifier, RequiredFields};
pub use crate::rule::{Rule, SharedRule};

// Declarative definitions
pub use crate::definition::{
    ArrowDefinition, FlowchartDefinition, IntoFlowchart, RuleRegistry, ShapeDefinition,
};

// Error types
pub use crate::error::{DefinitionError, EvaluationError, GraphError, SelectorError};

// Trace formatting
pub use crate::trace::TraceFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
