use super::{Flowchart, Shape};
use crate::error::GraphError;
use crate::options::EvaluationOptions;

/// Assembles a [`Flowchart`] and validates it before handing it out.
pub struct FlowchartBuilder<T, R> {
    shapes: Vec<Shape<T, R>>,
    options: EvaluationOptions,
}

impl<T, R> FlowchartBuilder<T, R> {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            options: EvaluationOptions::default(),
        }
    }

    pub fn shape(mut self, shape: Shape<T, R>) -> Self {
        self.shapes.push(shape);
        self
    }

    pub fn shapes(mut self, shapes: impl IntoIterator<Item = Shape<T, R>>) -> Self {
        self.shapes.extend(shapes);
        self
    }

    pub fn options(mut self, options: EvaluationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.options.max_steps = Some(max_steps);
        self
    }

    /// Removes any step cap. Cycles are still detected.
    pub fn unbounded(mut self) -> Self {
        self.options.max_steps = None;
        self
    }

    pub fn build(self) -> Result<Flowchart<T, R>, GraphError> {
        let flowchart = self.build_unchecked();
        flowchart.validate()?;
        log::debug!("Built flowchart with {} shapes", flowchart.len());
        Ok(flowchart)
    }

    /// Skips validation. The caller must validate before evaluating.
    pub fn build_unchecked(self) -> Flowchart<T, R> {
        Flowchart {
            shapes: self.shapes,
            options: self.options,
        }
    }
}

impl<T, R> Default for FlowchartBuilder<T, R> {
    fn default() -> Self {
        Self::new()
    }
}
