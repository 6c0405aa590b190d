//! Termination conditions for solver phases.
//!
//! Terminations are consulted at step boundaries: a step in progress runs to
//! completion before termination is honored.

mod best_score;
mod composite;
mod step_count;
mod time;
mod unimproved;

use std::fmt::Debug;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use crate::scope::SolverScope;

pub use best_score::{BestScoreFeasibleTermination, BestScoreTermination};
pub use composite::{AndTermination, OrTermination};
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::{UnimprovedStepCountTermination, UnimprovedTimeTermination};

/// Trait for determining when to stop solving.
pub trait Termination<S: PlanningSolution, D: ScoreDirector<S>>: Send + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope<S, D>) -> bool;
}

/// Marker termination that never terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl<S: PlanningSolution, D: ScoreDirector<S>> Termination<S, D> for NoTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope<S, D>) -> bool {
        false
    }
}

#[cfg(test)]
mod tests;
