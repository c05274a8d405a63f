use crate::rule::{Never, Rule, SharedRule};
use std::fmt;
use std::sync::Arc;

/// A guarded edge from its owning shape to the shape named by `points_to`.
///
/// A default arrow has an empty destination and a rule that never fires.
pub struct Arrow<T> {
    points_to: String,
    rule: SharedRule<T>,
}

impl<T> Arrow<T> {
    /// Creates an arrow to `destination` that does not fire until given a rule.
    pub fn to(destination: impl Into<String>) -> Self {
        Self {
            points_to: destination.into(),
            rule: Arc::new(Never),
        }
    }

    /// Sets the guard from a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.with_rule(predicate)
    }

    pub fn with_rule(mut self, rule: impl Rule<T> + 'static) -> Self {
        self.rule = Arc::new(rule);
        self
    }

    pub fn with_shared_rule(mut self, rule: SharedRule<T>) -> Self {
        self.rule = rule;
        self
    }

    pub fn points_to(&self) -> &str {
        &self.points_to
    }

    pub fn set_points_to(&mut self, destination: impl Into<String>) {
        self.points_to = destination.into();
    }

    pub fn set_rule(&mut self, rule: SharedRule<T>) {
        self.rule = rule;
    }

    /// An arrow without a destination leads nowhere.
    pub fn is_noop(&self) -> bool {
        self.points_to.is_empty()
    }

    pub fn evaluate(&self, data: &T) -> bool {
        self.rule.evaluate(data)
    }
}

impl<T> Default for Arrow<T> {
    fn default() -> Self {
        Self::to("")
    }
}

impl<T> Clone for Arrow<T> {
    fn clone(&self) -> Self {
        Self {
            points_to: self.points_to.clone(),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T> fmt::Debug for Arrow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arrow")
            .field("points_to", &self.points_to)
            .finish_non_exhaustive()
    }
}
