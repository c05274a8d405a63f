//! Predicates that guard arrows.
//!
//! Any `Fn(&T) -> bool + Send + Sync` closure is a [`Rule`], so most callers never
//! name the trait. Implement it directly when a guard carries its own state or
//! needs to be tested in isolation from any flowchart.

use std::sync::Arc;

/// Defines the contract for a guard evaluated against an input record.
///
/// Implementations must be pure and total: the same record always gives the
/// same answer and evaluation never diverges.
pub trait Rule<T>: Send + Sync {
    fn evaluate(&self, data: &T) -> bool;
}

/// A rule shared between arrows and registries.
pub type SharedRule<T> = Arc<dyn Rule<T>>;

impl<T, F> Rule<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn evaluate(&self, data: &T) -> bool {
        self(data)
    }
}

/// Never fires. The guard of an arrow that was given no rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl<T> Rule<T> for Never {
    fn evaluate(&self, _data: &T) -> bool {
        false
    }
}

/// Always fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl<T> Rule<T> for Always {
    fn evaluate(&self, _data: &T) -> bool {
        true
    }
}

/// Inverts another rule.
pub struct Not<T> {
    inner: SharedRule<T>,
}

impl<T> Rule<T> for Not<T> {
    fn evaluate(&self, data: &T) -> bool {
        !self.inner.evaluate(data)
    }
}

/// Fires when every inner rule fires. Short-circuits in order; empty is `true`.
pub struct All<T> {
    rules: Vec<SharedRule<T>>,
}

impl<T> Rule<T> for All<T> {
    fn evaluate(&self, data: &T) -> bool {
        self.rules.iter().all(|r| r.evaluate(data))
    }
}

/// Fires when any inner rule fires. Short-circuits in order; empty is `false`.
pub struct Any<T> {
    rules: Vec<SharedRule<T>>,
}

impl<T> Rule<T> for Any<T> {
    fn evaluate(&self, data: &T) -> bool {
        self.rules.iter().any(|r| r.evaluate(data))
    }
}

pub fn not<T>(rule: impl Rule<T> + 'static) -> Not<T> {
    Not {
        inner: Arc::new(rule),
    }
}

pub fn all<T>(rules: impl IntoIterator<Item = SharedRule<T>>) -> All<T> {
    All {
        rules: rules.into_iter().collect(),
    }
}

pub fn any<T>(rules: impl IntoIterator<Item = SharedRule<T>>) -> Any<T> {
    Any {
        rules: rules.into_iter().collect(),
    }
}

/// Wraps a rule for sharing.
pub fn shared<T>(rule: impl Rule<T> + 'static) -> SharedRule<T> {
    Arc::new(rule)
}
