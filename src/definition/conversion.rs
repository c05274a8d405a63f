use super::model::FlowchartDefinition;
use crate::error::DefinitionError;

/// A trait for custom data models that can be converted into a `FlowchartDefinition`.
///
/// Implement it on the structs your own format parses into, and the result can
/// be assembled against a [`RuleRegistry`](super::RuleRegistry) like any other
/// definition.
///
/// # Example
///
/// ```rust
/// use shapeflow::definition::{ArrowDefinition, FlowchartDefinition, IntoFlowchart, ShapeDefinition};
/// use shapeflow::error::DefinitionError;
///
/// struct Step { id: String, next: Option<(String, String)> }
/// struct Script { steps: Vec<Step> }
///
/// impl IntoFlowchart<String> for Script {
///     fn into_flowchart(self) -> Result<FlowchartDefinition<String>, DefinitionError> {
///         let shapes = self
///             .steps
///             .into_iter()
///             .map(|step| {
///                 let mut shape = ShapeDefinition::new(step.id.clone(), step.id);
///                 if let Some((target, rule)) = step.next {
///                     shape.arrows.push(ArrowDefinition { points_to: target, rule: Some(rule) });
///                 }
///                 shape
///             })
///             .collect();
///         Ok(FlowchartDefinition::new(shapes))
///     }
/// }
/// ```
pub trait IntoFlowchart<R> {
    /// Consumes the object and converts it into a flowchart definition.
    fn into_flowchart(self) -> Result<FlowchartDefinition<R>, DefinitionError>;
}

impl<R> IntoFlowchart<R> for FlowchartDefinition<R> {
    fn into_flowchart(self) -> Result<FlowchartDefinition<R>, DefinitionError> {
        Ok(self)
    }
}
