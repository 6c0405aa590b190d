//! Scope hierarchy for solver execution.
//!
//! Scopes maintain state at different levels of the solving process:
//! - [`SolverScope`]: Top-level, holds working solution and best solution
//! - [`PhaseScope`]: Per-phase state
//! - [`StepScope`]: Per-step state within a phase
//!
//! [`MoveScope`] is the per-candidate bookkeeping record that flows through
//! the forager during one step.

mod phase;
mod solver;
mod step;

use plancraft_core::score::Score;

pub use phase::PhaseScope;
pub use solver::SolverScope;
pub use step::StepScope;

/// Bookkeeping record for one evaluated candidate move within a step.
///
/// The move itself stays in the decider's arena; the scope carries its index
/// so the winner can be taken out by index without cloning. Scopes are owned
/// by the step that created them and discarded at step end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScope<Sc: Score> {
    /// Index of the move in the decider's arena.
    pub move_index: usize,
    /// Score the solution would have after this move.
    pub score: Sc,
    /// Whether the acceptor accepted this move.
    pub accepted: bool,
}

impl<Sc: Score> MoveScope<Sc> {
    pub fn new(move_index: usize, score: Sc, accepted: bool) -> Self {
        Self {
            move_index,
            score,
            accepted,
        }
    }
}

#[cfg(test)]
mod tests;
