use super::Arrow;
use crate::field::PropertySpecifier;
use crate::rule::Rule;
use std::fmt;

/// A named node of a flowchart.
///
/// Arrows are tried in the order they were added; the first one whose rule
/// fires decides the next shape. When none fires, or there are none, this
/// shape is terminal and its `result` is the answer.
pub struct Shape<T, R> {
    name: String,
    arrows: Vec<Arrow<T>>,
    required_field: Option<PropertySpecifier<T>>,
    result: R,
}

impl<T, R> Shape<T, R> {
    pub fn new(name: impl Into<String>, result: R) -> Self {
        Self {
            name: name.into(),
            arrows: Vec::new(),
            required_field: None,
            result,
        }
    }

    /// Creates a shape whose result is `R::default()`.
    pub fn named(name: impl Into<String>) -> Self
    where
        R: Default,
    {
        Self::new(name, R::default())
    }

    /// Marks `field` as an input this shape depends on.
    pub fn requires(mut self, field: PropertySpecifier<T>) -> Self {
        self.required_field = Some(field);
        self
    }

    pub fn arrow(mut self, arrow: Arrow<T>) -> Self {
        self.arrows.push(arrow);
        self
    }

    pub fn arrow_to(self, destination: impl Into<String>, rule: impl Rule<T> + 'static) -> Self {
        self.arrow(Arrow::to(destination).with_rule(rule))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrows(&self) -> &[Arrow<T>] {
        &self.arrows
    }

    pub fn arrows_mut(&mut self) -> &mut Vec<Arrow<T>> {
        &mut self.arrows
    }

    pub fn required_field(&self) -> Option<&PropertySpecifier<T>> {
        self.required_field.as_ref()
    }

    pub fn set_required_field(&mut self, field: Option<PropertySpecifier<T>>) {
        self.required_field = field;
    }

    pub fn result(&self) -> &R {
        &self.result
    }

    pub fn set_result(&mut self, result: R) {
        self.result = result;
    }

    /// A shape with no arrows is terminal for every input.
    pub fn is_terminal(&self) -> bool {
        self.arrows.is_empty()
    }

    /// The first arrow whose rule fires for `data`, if any.
    pub fn next_for(&self, data: &T) -> Option<&Arrow<T>> {
        self.arrows.iter().find(|arrow| {
            let fired = arrow.evaluate(data);
            log::trace!(
                "Shape '{}': arrow to '{}' {}",
                self.name,
                arrow.points_to(),
                if fired { "fired" } else { "did not fire" }
            );
            fired
        })
    }
}

impl<T, R: Clone> Clone for Shape<T, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            arrows: self.arrows.clone(),
            required_field: self.required_field.clone(),
            result: self.result.clone(),
        }
    }
}

impl<T, R: fmt::Debug> fmt::Debug for Shape<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("name", &self.name)
            .field("arrows", &self.arrows)
            .field("required_field", &self.required_field)
            .field("result", &self.result)
            .finish()
    }
}
