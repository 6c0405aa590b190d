//! Solver phases.
//!
//! Phases are executed in sequence by the solver, each with its own strategy
//! for improving the working solution.

pub mod localsearch;

use std::fmt::Debug;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use crate::scope::SolverScope;

/// A phase of the solving process.
///
/// A phase modifies the working solution in the solver scope and updates the
/// best solution when improvements are found.
pub trait Phase<S: PlanningSolution, D: ScoreDirector<S>>: Send + Debug {
    /// Executes this phase.
    fn solve(&mut self, solver_scope: &mut SolverScope<S, D>);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
