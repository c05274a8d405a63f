//! # Shapeflow - Rule-Driven Flowchart Evaluation
//!
//! **Shapeflow** evaluates flowcharts: directed graphs of named *shapes* whose
//! outbound *arrows* are guarded by rules over an input record. Evaluation
//! starts at the first shape, follows the first arrow whose rule fires, and
//! repeats until it reaches a shape where no arrow fires. That terminal shape's
//! result is the answer, reported together with every required field declared
//! along the way.
//!
//! ## Core Workflow
//!
//! 1.  **Describe Your Record**: Any type can be evaluated. Fields that drive an
//!     outcome are named with [`field!`], which the compiler checks.
//! 2.  **Assemble Shapes**: Build [`Shape`](flowchart::Shape)s and their
//!     [`Arrow`](flowchart::Arrow)s in code, or load a
//!     [`FlowchartDefinition`](definition::FlowchartDefinition) and resolve its
//!     rule names against a [`RuleRegistry`](definition::RuleRegistry).
//! 3.  **Validate**: `FlowchartBuilder::build` checks that every arrow points at
//!     an existing shape and that names are unique, reporting every problem at once.
//! 4.  **Evaluate**: Call `Flowchart::evaluate` as often as needed; the graph is
//!     only read, so one flowchart can serve many threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use shapeflow::prelude::*;
//!
//! struct Movie {
//!     title: String,
//! }
//!
//! fn main() -> Result<()> {
//!     let flowchart = Flowchart::builder()
//!         .shape(
//!             Shape::new("A", "long")
//!                 .requires(field!(Movie, title))
//!                 .arrow(Arrow::to("B").when(|m: &Movie| m.title.len() < 10)),
//!         )
//!         .shape(Shape::new("B", "short"))
//!         .build()?;
//!
//!     let outcome = flowchart.evaluate(&Movie { title: "hi".to_string() })?;
//!     assert_eq!(outcome.result, "short");
//!     assert!(outcome.required_fields.contains("title"));
//!     println!("-> {}", outcome.reason());
//!     Ok(())
//! }
//! ```
//!
//! Rules depend only on the input, so a walk that returns to a shape it already
//! visited would loop forever. Traversal stops such a walk with
//! [`EvaluationError::CycleDetected`](error::EvaluationError::CycleDetected)
//! instead of hanging. An explicit cap can be set with `FlowchartBuilder::max_steps`.

pub mod definition;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod flowchart;
pub mod options;
pub mod prelude;
pub mod rule;
pub mod trace;
