//! Scored candidates and the ranking rule.

use std::cmp::Ordering;

use serde::Serialize;

use crate::dialect::Dialect;
use crate::template::Template;
use crate::types::Colour;

/// A proposed expression and how well it reaches the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Colour the expression produces.
    pub colour: Colour,
    /// Perceptual distance from `colour` to the target.
    pub difference: f64,
    /// Cost heuristic; lower means simpler.
    pub complexity: f64,
    /// The expression rendered for its dialect.
    pub expression: String,
    #[serde(skip)]
    pub template: Template,
}

impl Candidate {
    /// Score `colour` against `target` and render `template` for `dialect`.
    pub fn scored(
        colour: Colour,
        target: Colour,
        complexity: f64,
        template: Template,
        dialect: Dialect,
    ) -> Self {
        Self {
            colour,
            difference: colour.difference(target),
            complexity,
            expression: template.render(dialect),
            template,
        }
    }

    /// Lexicographic order on (difference, complexity).
    pub fn rank(&self, other: &Self) -> Ordering {
        self.difference
            .total_cmp(&other.difference)
            .then(self.complexity.total_cmp(&other.complexity))
    }
}

/// Sort by (difference, complexity) and keep candidates similar to `target`.
///
/// The sort is stable, so equally ranked candidates keep their input order.
pub fn best(mut candidates: Vec<Candidate>, target: Colour) -> Vec<Candidate> {
    candidates.sort_by(Candidate::rank);
    candidates.retain(|candidate| candidate.colour.is_similar_to(target));
    candidates
}
