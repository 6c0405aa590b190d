//! Score-based termination conditions.

use std::fmt::Debug;

use plancraft_core::domain::PlanningSolution;
use plancraft_core::score::Score;
use plancraft_scoring::ScoreDirector;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when the best score reaches or exceeds a target.
#[derive(Debug, Clone)]
pub struct BestScoreTermination<Sc: Score> {
    target_score: Sc,
}

impl<Sc: Score> BestScoreTermination<Sc> {
    pub fn new(target_score: Sc) -> Self {
        Self { target_score }
    }
}

impl<S, Sc, D> Termination<S, D> for BestScoreTermination<Sc>
where
    S: PlanningSolution<Score = Sc>,
    Sc: Score,
    D: ScoreDirector<S>,
{
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope
            .best_score()
            .map(|score| *score >= self.target_score)
            .unwrap_or(false)
    }
}

/// Terminates when the best score becomes feasible.
#[derive(Debug, Clone, Default)]
pub struct BestScoreFeasibleTermination;

impl BestScoreFeasibleTermination {
    pub fn new() -> Self {
        Self
    }
}

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D> for BestScoreFeasibleTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool {
        solver_scope
            .best_score()
            .map(|score| score.is_feasible())
            .unwrap_or(false)
    }
}
