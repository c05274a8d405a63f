use super::EvaluationResult;
use crate::error::EvaluationError;
use crate::field::RequiredFields;
use crate::flowchart::Shape;
use ahash::{AHashMap, AHashSet};

/// Walks a shape list from its entry shape, one transition at a time.
pub(crate) struct Traversal<'a, T, R> {
    shapes: &'a [Shape<T, R>],
    index: AHashMap<&'a str, usize>,
    max_steps: Option<usize>,
}

impl<'a, T, R> Traversal<'a, T, R> {
    pub(crate) fn new(shapes: &'a [Shape<T, R>], max_steps: Option<usize>) -> Self {
        let mut index = AHashMap::with_capacity(shapes.len());
        for (position, shape) in shapes.iter().enumerate() {
            // First shape wins if a name is duplicated.
            index.entry(shape.name()).or_insert(position);
        }
        Self {
            shapes,
            index,
            max_steps,
        }
    }

    pub(crate) fn run(&self, data: &T) -> Result<EvaluationResult<T, R>, EvaluationError>
    where
        R: Clone,
    {
        let visited = self.visit(data)?;
        Self::reduce(&visited)
    }

    /// Collects every visited shape in order, the terminal one last.
    fn visit(&self, data: &T) -> Result<Vec<&'a Shape<T, R>>, EvaluationError> {
        let shapes = self.shapes;
        let mut current = shapes.first().ok_or(EvaluationError::EmptyGraph)?;
        let mut visited = vec![current];
        // Rules only see the input, so reaching a shape twice means the walk never ends.
        let mut seen = AHashSet::from_iter([0usize]);
        let mut steps = 0usize;

        while let Some(arrow) = current.next_for(data) {
            if let Some(max_steps) = self.max_steps.filter(|&max| steps >= max) {
                log::warn!(
                    "Traversal cap of {} steps reached at shape '{}'",
                    max_steps,
                    current.name()
                );
                return Err(EvaluationError::StepLimitExceeded {
                    max_steps,
                    shape: current.name().to_string(),
                });
            }

            let position = Some(arrow.points_to())
                .filter(|destination| !destination.is_empty())
                .and_then(|destination| self.index.get(destination).copied())
                .ok_or_else(|| EvaluationError::UnknownDestination {
                    from: current.name().to_string(),
                    to: arrow.points_to().to_string(),
                })?;
            let next = &shapes[position];
            steps += 1;

            if !seen.insert(position) {
                log::warn!(
                    "Cycle detected: '{}' -> '{}' revisits a shape after {} steps",
                    current.name(),
                    next.name(),
                    steps
                );
                return Err(EvaluationError::CycleDetected {
                    steps,
                    shape: next.name().to_string(),
                });
            }

            log::debug!("Transition '{}' -> '{}'", current.name(), next.name());
            current = next;
            visited.push(current);
        }

        log::debug!(
            "Traversal ended at terminal shape '{}' after {} steps",
            current.name(),
            steps
        );
        Ok(visited)
    }

    fn reduce(visited: &[&Shape<T, R>]) -> Result<EvaluationResult<T, R>, EvaluationError>
    where
        R: Clone,
    {
        let terminal = visited.last().ok_or(EvaluationError::EmptyGraph)?;

        let required_fields: RequiredFields<T> = visited
            .iter()
            .filter_map(|shape| shape.required_field().cloned())
            .collect();

        Ok(EvaluationResult {
            result: terminal.result().clone(),
            required_fields,
            path: visited.iter().map(|s| s.name().to_string()).collect(),
        })
    }
}
