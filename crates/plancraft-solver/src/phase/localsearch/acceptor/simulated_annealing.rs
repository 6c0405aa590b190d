//! Simulated annealing acceptor.

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::Rng;

use plancraft_core::domain::PlanningSolution;
use plancraft_core::score::Score;

use super::Acceptor;

// Temperature never cools to zero while steps remain, so exp() stays finite.
const MIN_TEMPERATURE: f64 = 1.0e-6;

/// Simulated annealing acceptor - accepts worsening moves with a
/// temperature-based probability.
///
/// Improving and sideways moves are always accepted. A worsening move is
/// accepted with probability `exp(delta / temperature)` per score level
/// (delta is negative), multiplied across levels and compared against a
/// uniform draw. The temperature starts at the configured score and cools
/// linearly over the step budget.
pub struct SimulatedAnnealingAcceptor<S: PlanningSolution> {
    /// Per-level starting temperatures, taken from a score value.
    starting_temperature: S::Score,
    /// Steps over which the temperature cools from start to zero.
    step_budget: u64,
    steps_taken: u64,
}

impl<S: PlanningSolution> Debug for SimulatedAnnealingAcceptor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedAnnealingAcceptor")
            .field("starting_temperature", &self.starting_temperature)
            .field("step_budget", &self.step_budget)
            .field("steps_taken", &self.steps_taken)
            .finish()
    }
}

impl<S: PlanningSolution> Clone for SimulatedAnnealingAcceptor<S> {
    fn clone(&self) -> Self {
        Self {
            starting_temperature: self.starting_temperature,
            step_budget: self.step_budget,
            steps_taken: self.steps_taken,
        }
    }
}

impl<S: PlanningSolution> SimulatedAnnealingAcceptor<S> {
    /// Creates a new simulated annealing acceptor.
    ///
    /// # Panics
    /// Panics if any level of `starting_temperature` is negative or if
    /// `step_budget` is zero.
    pub fn new(starting_temperature: S::Score, step_budget: u64) -> Self {
        assert!(
            starting_temperature
                .to_level_numbers()
                .iter()
                .all(|&level| level >= 0),
            "starting temperature {starting_temperature:?} has a negative level"
        );
        assert!(step_budget > 0, "step budget must be at least 1");
        Self {
            starting_temperature,
            step_budget,
            steps_taken: 0,
        }
    }

    fn cooling_gradient(&self) -> f64 {
        (self.steps_taken as f64 / self.step_budget as f64).min(1.0)
    }
}

impl<S: PlanningSolution> Acceptor<S> for SimulatedAnnealingAcceptor<S> {
    fn is_accepted(
        &mut self,
        rng: &mut StdRng,
        last_step_score: &S::Score,
        move_score: &S::Score,
    ) -> bool {
        if move_score >= last_step_score {
            return true;
        }

        let gradient = self.cooling_gradient();
        let starting_levels = self.starting_temperature.to_level_numbers();
        let last_levels = last_step_score.to_level_numbers();
        let move_levels = move_score.to_level_numbers();

        let mut acceptance = 1.0_f64;
        for (level, starting) in starting_levels.iter().enumerate() {
            let delta = (move_levels[level] - last_levels[level]) as f64;
            if delta >= 0.0 {
                continue;
            }
            let temperature =
                ((*starting as f64) * (1.0 - gradient)).max(MIN_TEMPERATURE);
            acceptance *= (delta / temperature).exp();
        }

        acceptance > rng.random::<f64>()
    }

    fn phase_started(&mut self, _initial_score: &S::Score) {
        self.steps_taken = 0;
    }

    fn step_ended(&mut self, _step_score: &S::Score) {
        self.steps_taken += 1;
    }
}
