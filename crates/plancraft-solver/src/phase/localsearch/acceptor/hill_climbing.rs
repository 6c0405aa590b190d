//! Hill climbing acceptor.

use rand::rngs::StdRng;

use plancraft_core::domain::PlanningSolution;

use super::Acceptor;

/// Hill climbing acceptor - only accepts strictly improving moves.
///
/// Greedy and fast but gets stuck in local optima. Combine with an
/// accepted-count limit of 1 for classic first-improvement hill climbing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    pub fn new() -> Self {
        HillClimbingAcceptor
    }
}

impl<S: PlanningSolution> Acceptor<S> for HillClimbingAcceptor {
    fn is_accepted(
        &mut self,
        _rng: &mut StdRng,
        last_step_score: &S::Score,
        move_score: &S::Score,
    ) -> bool {
        move_score > last_step_score
    }
}
