//! Minimal test solution fixtures.
//!
//! A solution type with only a score field, for testing terminations,
//! acceptors and other components that never touch entities.

use plancraft_core::domain::{PlanningSolution, SolutionDescriptor};
use plancraft_core::score::SimpleScore;
use plancraft_scoring::SimpleScoreDirector;
use std::any::TypeId;

/// A minimal test solution with just a score field.
#[derive(Clone, Debug)]
pub struct MinimalSolution {
    pub score: Option<SimpleScore>,
}

impl MinimalSolution {
    /// Creates a new minimal solution with no score.
    pub fn new() -> Self {
        Self { score: None }
    }

    /// Creates a minimal solution with the given score.
    pub fn with_score(score: SimpleScore) -> Self {
        Self { score: Some(score) }
    }
}

impl Default for MinimalSolution {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanningSolution for MinimalSolution {
    type Score = SimpleScore;

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }
}

/// Type alias for a SimpleScoreDirector with a function pointer calculator.
pub type MinimalDirector =
    SimpleScoreDirector<MinimalSolution, fn(&MinimalSolution) -> SimpleScore>;

/// A zero-returning calculator function.
pub fn zero_calculator(_: &MinimalSolution) -> SimpleScore {
    SimpleScore::of(0)
}

/// Creates a SolutionDescriptor for MinimalSolution.
pub fn create_minimal_descriptor() -> SolutionDescriptor {
    SolutionDescriptor::new("MinimalSolution", TypeId::of::<MinimalSolution>())
}

/// Creates a SimpleScoreDirector for MinimalSolution with a zero calculator.
pub fn create_minimal_director() -> MinimalDirector {
    SimpleScoreDirector::new(
        MinimalSolution::new(),
        create_minimal_descriptor(),
        zero_calculator as fn(&MinimalSolution) -> SimpleScore,
    )
}

/// Creates a SimpleScoreDirector for MinimalSolution with a fixed score.
pub fn create_minimal_director_with_score(
    score: SimpleScore,
) -> SimpleScoreDirector<MinimalSolution, impl Fn(&MinimalSolution) -> SimpleScore> {
    SimpleScoreDirector::new(
        MinimalSolution::with_score(score),
        create_minimal_descriptor(),
        move |_| score,
    )
}
