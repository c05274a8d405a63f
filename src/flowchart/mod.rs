pub mod arrow;
pub mod builder;
pub mod shape;

pub use arrow::*;
pub use builder::*;
pub use shape::*;

use crate::error::{EvaluationError, GraphError};
use crate::evaluator::{EvaluationResult, Traversal};
use crate::options::EvaluationOptions;
use ahash::AHashSet;
use itertools::Itertools;
use std::fmt;

/// An ordered collection of shapes. The first shape is the entry point.
///
/// A flowchart is assembled, validated once, and then evaluated any number of
/// times. Evaluation only reads the graph, so a flowchart behind an `Arc` can
/// serve evaluations from many threads. If shapes are changed after
/// validation, call [`Flowchart::validate`] again; nothing is cached.
pub struct Flowchart<T, R> {
    shapes: Vec<Shape<T, R>>,
    options: EvaluationOptions,
}

impl<T, R> Flowchart<T, R> {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            options: EvaluationOptions::default(),
        }
    }

    pub fn builder() -> FlowchartBuilder<T, R> {
        FlowchartBuilder::new()
    }

    pub fn push(&mut self, shape: Shape<T, R>) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape<T, R>] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut Vec<Shape<T, R>> {
        &mut self.shapes
    }

    /// The shape traversal starts from.
    pub fn entry(&self) -> Option<&Shape<T, R>> {
        self.shapes.first()
    }

    /// The first shape with this name.
    pub fn shape(&self, name: &str) -> Option<&Shape<T, R>> {
        self.shapes.iter().find(|s| s.name() == name)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EvaluationOptions) {
        self.options = options;
    }

    /// Checks that every arrow points at an existing shape and that shape names
    /// are unique.
    ///
    /// Both checks always run, and every offending name is reported in a single
    /// `GraphError::InvalidGraph`, so all structural problems can be fixed in one
    /// pass. An arrow with an empty destination is always reported as dangling.
    pub fn validate(&self) -> Result<(), GraphError> {
        let dangling = self.invalid_destinations();
        let duplicates = self.duplicate_names();

        if dangling.is_empty() && duplicates.is_empty() {
            Ok(())
        } else {
            log::debug!(
                "Flowchart validation failed: {} dangling, {} duplicated",
                dangling.len(),
                duplicates.len()
            );
            Err(GraphError::InvalidGraph {
                dangling,
                duplicates,
            })
        }
    }

    fn invalid_destinations(&self) -> Vec<String> {
        let names: AHashSet<&str> = self.shapes.iter().map(Shape::name).collect();
        self.shapes
            .iter()
            .flat_map(Shape::arrows)
            .filter(|arrow| arrow.is_noop() || !names.contains(arrow.points_to()))
            .map(Arrow::points_to)
            .unique()
            .map(str::to_string)
            .collect()
    }

    fn duplicate_names(&self) -> Vec<String> {
        self.shapes
            .iter()
            .map(Shape::name)
            .duplicates()
            .map(str::to_string)
            .collect()
    }

    /// Walks the flowchart for `data` and reports the terminal shape's result
    /// together with the required fields of every visited shape.
    ///
    /// Starting at the entry shape, the first arrow whose rule fires is
    /// followed, until a shape is reached where no arrow fires.
    ///
    /// # Returns
    ///
    /// * `Ok(EvaluationResult)`: the terminal result, the deduplicated required
    ///   fields, and the visited path.
    /// * `Err(EvaluationError::EmptyGraph)`: the flowchart has no shapes.
    /// * `Err(EvaluationError::CycleDetected)`: the walk returned to a shape it
    ///   already visited, so it would never reach a terminal shape.
    /// * `Err(EvaluationError::StepLimitExceeded)`: an explicit `max_steps` cap
    ///   was reached.
    /// * `Err(EvaluationError::UnknownDestination)`: a dangling arrow fired. This
    ///   cannot happen on a validated flowchart.
    pub fn evaluate(&self, data: &T) -> Result<EvaluationResult<T, R>, EvaluationError>
    where
        R: Clone,
    {
        Traversal::new(&self.shapes, self.options.max_steps).run(data)
    }
}

impl<T, R> Default for Flowchart<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> FromIterator<Shape<T, R>> for Flowchart<T, R> {
    fn from_iter<I: IntoIterator<Item = Shape<T, R>>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
            options: EvaluationOptions::default(),
        }
    }
}

impl<T, R: Clone> Clone for Flowchart<T, R> {
    fn clone(&self) -> Self {
        Self {
            shapes: self.shapes.clone(),
            options: self.options,
        }
    }
}

impl<T, R: fmt::Debug> fmt::Debug for Flowchart<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flowchart")
            .field("shapes", &self.shapes)
            .field("options", &self.options)
            .finish()
    }
}
