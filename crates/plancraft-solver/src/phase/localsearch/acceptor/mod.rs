//! Acceptors for local search move acceptance.
//!
//! Acceptors decide whether a candidate move may enter the forager, based
//! on comparing its speculative score against the previous step's score.

mod hill_climbing;
mod late_acceptance;
mod simulated_annealing;

use std::fmt::Debug;

use rand::rngs::StdRng;

use plancraft_core::domain::PlanningSolution;

pub use hill_climbing::HillClimbingAcceptor;
pub use late_acceptance::LateAcceptanceAcceptor;
pub use simulated_annealing::SimulatedAnnealingAcceptor;

/// Trait for accepting or rejecting moves in local search.
///
/// Acceptors implement different strategies for escaping local optima,
/// such as hill climbing, late acceptance, or simulated annealing.
/// Stochastic policies draw from the solver's random source passed to
/// `is_accepted`; deterministic policies ignore it.
pub trait Acceptor<S: PlanningSolution>: Send + Debug {
    /// Returns true if a move resulting in `move_score` should be accepted,
    /// given the previous step's score.
    fn is_accepted(
        &mut self,
        rng: &mut StdRng,
        last_step_score: &S::Score,
        move_score: &S::Score,
    ) -> bool;

    /// Called when a phase starts, with the phase's initial score.
    fn phase_started(&mut self, _initial_score: &S::Score) {}

    /// Called when a phase ends.
    fn phase_ended(&mut self) {}

    /// Called when a step starts.
    fn step_started(&mut self) {}

    /// Called when a step ends, with the winning score.
    fn step_ended(&mut self, _step_score: &S::Score) {}
}

#[cfg(test)]
mod tests;
