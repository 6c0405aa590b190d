//! Late acceptance acceptor.

use std::fmt::Debug;

use rand::rngs::StdRng;

use plancraft_core::domain::PlanningSolution;

use super::Acceptor;

/// Late acceptance acceptor - accepts moves that match or beat a historical score.
///
/// Maintains a circular buffer of recent step scores and accepts moves that
/// are at least as good as the score from `late_acceptance_size` steps ago.
/// The optional hill climbing clause additionally accepts any move that
/// matches or beats the last step score.
pub struct LateAcceptanceAcceptor<S: PlanningSolution> {
    /// Size of the late acceptance list.
    late_acceptance_size: usize,
    /// Circular buffer of historical scores.
    score_history: Vec<Option<S::Score>>,
    /// Current index in the buffer.
    current_index: usize,
    /// Also accept moves at least as good as the last step score.
    hill_climbing_enabled: bool,
}

impl<S: PlanningSolution> Debug for LateAcceptanceAcceptor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LateAcceptanceAcceptor")
            .field("late_acceptance_size", &self.late_acceptance_size)
            .field("current_index", &self.current_index)
            .field("hill_climbing_enabled", &self.hill_climbing_enabled)
            .finish()
    }
}

impl<S: PlanningSolution> Clone for LateAcceptanceAcceptor<S> {
    fn clone(&self) -> Self {
        Self {
            late_acceptance_size: self.late_acceptance_size,
            score_history: self.score_history.clone(),
            current_index: self.current_index,
            hill_climbing_enabled: self.hill_climbing_enabled,
        }
    }
}

impl<S: PlanningSolution> LateAcceptanceAcceptor<S> {
    /// Creates a new late acceptance acceptor with the given history size.
    ///
    /// # Panics
    /// Panics if `late_acceptance_size` is zero.
    pub fn new(late_acceptance_size: usize) -> Self {
        assert!(
            late_acceptance_size > 0,
            "late acceptance size must be at least 1"
        );
        Self {
            late_acceptance_size,
            score_history: vec![None; late_acceptance_size],
            current_index: 0,
            hill_climbing_enabled: true,
        }
    }

    pub fn with_hill_climbing(mut self, hill_climbing_enabled: bool) -> Self {
        self.hill_climbing_enabled = hill_climbing_enabled;
        self
    }
}

impl<S: PlanningSolution> Default for LateAcceptanceAcceptor<S> {
    fn default() -> Self {
        Self::new(400)
    }
}

impl<S: PlanningSolution> Acceptor<S> for LateAcceptanceAcceptor<S> {
    fn is_accepted(
        &mut self,
        _rng: &mut StdRng,
        last_step_score: &S::Score,
        move_score: &S::Score,
    ) -> bool {
        if self.hill_climbing_enabled && move_score >= last_step_score {
            return true;
        }

        match &self.score_history[self.current_index] {
            Some(late_score) => move_score >= late_score,
            // No history yet, accept
            None => true,
        }
    }

    fn phase_started(&mut self, initial_score: &S::Score) {
        for slot in &mut self.score_history {
            *slot = Some(*initial_score);
        }
        self.current_index = 0;
    }

    fn step_ended(&mut self, step_score: &S::Score) {
        self.score_history[self.current_index] = Some(*step_score);
        self.current_index = (self.current_index + 1) % self.late_acceptance_size;
    }
}
