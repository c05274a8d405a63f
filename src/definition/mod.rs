//! Declarative flowchart definitions.
//!
//! A [`FlowchartDefinition`] names its rules instead of holding them, so it can
//! be parsed from JSON, stored as a bincode artifact, or produced from a custom
//! format through [`IntoFlowchart`]. Assembling it against a [`RuleRegistry`]
//! yields a validated [`Flowchart`](crate::flowchart::Flowchart).

pub mod artifact;
pub mod conversion;
pub mod model;
pub mod registry;

pub use conversion::*;
pub use model::*;
pub use registry::*;
