use super::registry::RuleRegistry;
use crate::error::DefinitionError;
use crate::field::PropertySpecifier;
use crate::flowchart::{Arrow, Flowchart, Shape};
use crate::options::EvaluationOptions;
use crate::rule::{Never, SharedRule};
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The complete, declarative definition of a flowchart.
/// Rules are referenced by name and resolved against a [`RuleRegistry`] when
/// the definition is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowchartDefinition<R> {
    pub shapes: Vec<ShapeDefinition<R>>,
    #[serde(default)]
    pub options: EvaluationOptions,
}

/// Defines a single shape in the flowchart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDefinition<R> {
    pub name: String,
    #[serde(default)]
    pub required_field: Option<String>,
    pub result: R,
    #[serde(default)]
    pub arrows: Vec<ArrowDefinition>,
}

/// Defines an outbound arrow. A missing rule never fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrowDefinition {
    pub points_to: String,
    #[serde(default)]
    pub rule: Option<String>,
}

impl<R> FlowchartDefinition<R> {
    pub fn new(shapes: Vec<ShapeDefinition<R>>) -> Self {
        Self {
            shapes,
            options: EvaluationOptions::default(),
        }
    }

    /// Parses a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError>
    where
        R: DeserializeOwned,
    {
        serde_json::from_str(json).map_err(|e| DefinitionError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, DefinitionError>
    where
        R: Serialize,
    {
        serde_json::to_string_pretty(self).map_err(|e| DefinitionError::Parse(e.to_string()))
    }

    /// Rule names referenced by arrows that the registry does not know.
    pub fn unknown_rules<T>(&self, registry: &RuleRegistry<T>) -> Vec<String> {
        self.shapes
            .iter()
            .flat_map(|shape| &shape.arrows)
            .filter_map(|arrow| arrow.rule.as_deref())
            .filter(|name| !registry.contains(name))
            .unique()
            .map(str::to_string)
            .collect()
    }

    /// Resolves rules and field names, then validates the resulting graph.
    ///
    /// Every unknown rule name is reported at once. Field selectors are checked
    /// next, and graph validation runs last.
    pub fn assemble<T>(
        self,
        registry: &RuleRegistry<T>,
    ) -> Result<Flowchart<T, R>, DefinitionError> {
        let unknown = self.unknown_rules(registry);
        if !unknown.is_empty() {
            return Err(DefinitionError::UnknownRules(unknown));
        }

        let shapes = self
            .shapes
            .into_iter()
            .map(|shape| shape.into_shape(registry))
            .collect::<Result<Vec<_>, _>>()?;

        let flowchart = Flowchart::builder()
            .shapes(shapes)
            .options(self.options)
            .build()?;
        Ok(flowchart)
    }
}

impl<R> ShapeDefinition<R> {
    pub fn new(name: impl Into<String>, result: R) -> Self {
        Self {
            name: name.into(),
            required_field: None,
            result,
            arrows: Vec::new(),
        }
    }

    fn into_shape<T>(
        self,
        registry: &RuleRegistry<T>,
    ) -> Result<Shape<T, R>, DefinitionError> {
        let mut shape = Shape::new(self.name, self.result);
        if let Some(selector) = self.required_field {
            shape = shape.requires(PropertySpecifier::new(selector)?);
        }
        for arrow in self.arrows {
            let rule = resolve_rule(arrow.rule.as_deref(), registry)?;
            shape = shape.arrow(Arrow::to(arrow.points_to).with_shared_rule(rule));
        }
        Ok(shape)
    }
}

fn resolve_rule<T>(
    name: Option<&str>,
    registry: &RuleRegistry<T>,
) -> Result<SharedRule<T>, DefinitionError> {
    match name {
        None => Ok(Arc::new(Never)),
        Some(name) => registry
            .get(name)
            .ok_or_else(|| DefinitionError::UnknownRules(vec![name.to_string()])),
    }
}
