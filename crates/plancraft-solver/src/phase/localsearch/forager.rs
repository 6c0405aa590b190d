//! Foragers: per-step acceptance buffering and winner selection.

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::Rng;

use plancraft_core::score::Score;

use super::podium::{FinalistPodium, HighestScorePodium};
use crate::scope::MoveScope;

/// When the forager stops pulling further candidates within a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickEarlyType {
    /// Only the accepted-count limit can end the step early.
    #[default]
    Never,
    /// Quit as soon as an accepted score strictly exceeds the best score
    /// recorded at the end of the previous step.
    FirstBestScoreImproving,
    /// Quit as soon as an accepted score strictly exceeds the last
    /// completed step's score.
    FirstLastStepScoreImproving,
}

/// Buffers the candidates of one step and picks exactly one winner.
///
/// The buffer is step-scoped: `step_started` clears it and captures the
/// reference scores the pick-early policies compare against.
pub trait LocalSearchForager<Sc: Score>: Send + Debug {
    /// Called when the phase starts.
    fn phase_started(&mut self) {}

    /// Resets step-scoped state. `last_step_score` is the working score at
    /// the end of the previous step; `best_score` is the solver-wide best.
    fn step_started(&mut self, last_step_score: Sc, best_score: Option<Sc>);

    /// Submits an evaluated candidate, accepted or not.
    fn add_move(&mut self, move_scope: MoveScope<Sc>);

    /// Returns true once the forager wants no further candidates this step.
    fn is_quit_early(&self) -> bool;

    /// Picks the winning candidate, or None if nothing was accepted.
    ///
    /// Consumes at most one draw from `rng`, and only when breaking a tie
    /// among two or more finalists.
    fn pick_move(&mut self, rng: &mut StdRng) -> Option<MoveScope<Sc>>;

    /// Called when the phase ends; releases step buffers.
    fn phase_ended(&mut self) {}

    /// Returns true if this forager can bound the number of candidates per
    /// step. A never-ending move selector requires this.
    fn supports_never_ending_selector(&self) -> bool;
}

/// The standard forager: finalist podium plus an accepted-count limit.
pub struct AcceptedForager<Sc: Score> {
    accepted_count_limit: Option<usize>,
    pick_early_type: PickEarlyType,
    break_tie_randomly: bool,
    pick_unaccepted_fallback: bool,
    podium: HighestScorePodium<Sc>,
    accepted_count: usize,
    quit_early: bool,
    last_step_score: Option<Sc>,
    reference_best_score: Option<Sc>,
    best_unaccepted: Option<MoveScope<Sc>>,
}

impl<Sc: Score> AcceptedForager<Sc> {
    /// Creates a forager. `accepted_count_limit = None` disables the limit.
    pub fn new(accepted_count_limit: Option<usize>) -> Self {
        Self {
            accepted_count_limit,
            pick_early_type: PickEarlyType::Never,
            break_tie_randomly: true,
            pick_unaccepted_fallback: false,
            podium: HighestScorePodium::new(),
            accepted_count: 0,
            quit_early: false,
            last_step_score: None,
            reference_best_score: None,
            best_unaccepted: None,
        }
    }

    pub fn with_pick_early_type(mut self, pick_early_type: PickEarlyType) -> Self {
        self.pick_early_type = pick_early_type;
        self
    }

    pub fn with_break_tie_randomly(mut self, break_tie_randomly: bool) -> Self {
        self.break_tie_randomly = break_tie_randomly;
        self
    }

    /// Allows picking the least-bad unaccepted candidate when the step
    /// accepted nothing.
    pub fn with_pick_unaccepted_fallback(mut self, pick_unaccepted_fallback: bool) -> Self {
        self.pick_unaccepted_fallback = pick_unaccepted_fallback;
        self
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted_count
    }
}

impl<Sc: Score> Debug for AcceptedForager<Sc> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcceptedForager")
            .field("accepted_count_limit", &self.accepted_count_limit)
            .field("pick_early_type", &self.pick_early_type)
            .field("break_tie_randomly", &self.break_tie_randomly)
            .field("accepted_count", &self.accepted_count)
            .finish()
    }
}

impl<Sc: Score> LocalSearchForager<Sc> for AcceptedForager<Sc> {
    fn step_started(&mut self, last_step_score: Sc, best_score: Option<Sc>) {
        self.podium.step_started();
        self.accepted_count = 0;
        self.quit_early = false;
        self.last_step_score = Some(last_step_score);
        self.reference_best_score = best_score;
        self.best_unaccepted = None;
    }

    fn add_move(&mut self, move_scope: MoveScope<Sc>) {
        if move_scope.accepted {
            self.accepted_count += 1;
            self.podium.add_move(move_scope);

            match self.pick_early_type {
                PickEarlyType::Never => {}
                PickEarlyType::FirstBestScoreImproving => {
                    let improves = match &self.reference_best_score {
                        Some(best) => move_scope.score > *best,
                        None => true,
                    };
                    if improves {
                        self.quit_early = true;
                    }
                }
                PickEarlyType::FirstLastStepScoreImproving => {
                    if self
                        .last_step_score
                        .is_some_and(|last| move_scope.score > last)
                    {
                        self.quit_early = true;
                    }
                }
            }

            if self
                .accepted_count_limit
                .is_some_and(|limit| self.accepted_count >= limit)
            {
                self.quit_early = true;
            }
        } else if self.pick_unaccepted_fallback {
            let replace = match &self.best_unaccepted {
                None => true,
                Some(best) => move_scope.score > best.score,
            };
            if replace {
                self.best_unaccepted = Some(move_scope);
            }
        }
    }

    fn is_quit_early(&self) -> bool {
        self.quit_early
    }

    fn pick_move(&mut self, rng: &mut StdRng) -> Option<MoveScope<Sc>> {
        let finalists = self.podium.finalists();
        if finalists.is_empty() {
            return self.best_unaccepted.take();
        }
        if finalists.len() == 1 || !self.break_tie_randomly {
            return Some(finalists[0]);
        }
        Some(finalists[rng.random_range(0..finalists.len())])
    }

    fn phase_ended(&mut self) {
        self.podium.step_started();
        self.best_unaccepted = None;
    }

    fn supports_never_ending_selector(&self) -> bool {
        self.accepted_count_limit.is_some()
    }
}
