use crate::field::RequiredFields;
use crate::trace::TraceFormatter;
use std::fmt;

mod engine;

pub(crate) use engine::Traversal;

/// The outcome of walking a flowchart for one input record.
pub struct EvaluationResult<T, R> {
    /// The result stored on the terminal shape.
    pub result: R,
    /// Required fields of every visited shape, deduplicated by property name.
    pub required_fields: RequiredFields<T>,
    /// Names of the visited shapes, entry first and terminal last.
    pub path: Vec<String>,
}

impl<T, R> EvaluationResult<T, R> {
    /// The name of the shape traversal stopped at.
    pub fn terminal(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// A human-readable account of the path that led to the result.
    pub fn reason(&self) -> String {
        TraceFormatter::format_result(&self.path, &self.required_fields)
    }
}

impl<T, R: Clone> Clone for EvaluationResult<T, R> {
    fn clone(&self) -> Self {
        Self {
            result: self.result.clone(),
            required_fields: self.required_fields.clone(),
            path: self.path.clone(),
        }
    }
}

impl<T, R: fmt::Debug> fmt::Debug for EvaluationResult<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationResult")
            .field("result", &self.result)
            .field("required_fields", &self.required_fields)
            .field("path", &self.path)
            .finish()
    }
}

impl<T, R: PartialEq> PartialEq for EvaluationResult<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.result == other.result
            && self.required_fields == other.required_fields
            && self.path == other.path
    }
}

impl<T, R: Eq> Eq for EvaluationResult<T, R> {}
