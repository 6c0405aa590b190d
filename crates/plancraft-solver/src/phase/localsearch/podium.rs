//! Finalist podium: tracks the best-scored accepted candidates of a step.

use std::fmt::Debug;

use smallvec::SmallVec;

use plancraft_core::score::Score;

use crate::scope::MoveScope;

/// Tracks the finalists of the current step.
///
/// A finalist is an accepted candidate whose score ties the best accepted
/// score seen so far this step. The forager picks the winner among the
/// finalists at step end, either the earliest or a uniform random one.
pub trait FinalistPodium<Sc: Score>: Send + Debug {
    /// Clears the podium for a new step.
    fn step_started(&mut self);

    /// Submits an accepted candidate.
    fn add_move(&mut self, move_scope: MoveScope<Sc>);

    /// Returns the candidates tied on the current best accepted score,
    /// in submission order.
    fn finalists(&self) -> &[MoveScope<Sc>];

    /// Returns the best accepted score seen this step.
    fn best_score(&self) -> Option<&Sc>;
}

/// Podium that keeps every candidate tying the highest accepted score.
///
/// A strictly better candidate replaces the whole finalist list; an equal
/// one joins it; a worse one is dropped.
pub struct HighestScorePodium<Sc: Score> {
    finalists: SmallVec<[MoveScope<Sc>; 8]>,
    best_score: Option<Sc>,
}

impl<Sc: Score> HighestScorePodium<Sc> {
    pub fn new() -> Self {
        Self {
            finalists: SmallVec::new(),
            best_score: None,
        }
    }
}

impl<Sc: Score> Default for HighestScorePodium<Sc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sc: Score> Debug for HighestScorePodium<Sc> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighestScorePodium")
            .field("finalist_count", &self.finalists.len())
            .field("best_score", &self.best_score)
            .finish()
    }
}

impl<Sc: Score> FinalistPodium<Sc> for HighestScorePodium<Sc> {
    fn step_started(&mut self) {
        self.finalists.clear();
        self.best_score = None;
    }

    fn add_move(&mut self, move_scope: MoveScope<Sc>) {
        match &self.best_score {
            None => {
                self.best_score = Some(move_scope.score);
                self.finalists.push(move_scope);
            }
            Some(best) => {
                if move_scope.score > *best {
                    self.best_score = Some(move_scope.score);
                    self.finalists.clear();
                    self.finalists.push(move_scope);
                } else if move_scope.score == *best {
                    self.finalists.push(move_scope);
                }
            }
        }
    }

    fn finalists(&self) -> &[MoveScope<Sc>] {
        &self.finalists
    }

    fn best_score(&self) -> Option<&Sc> {
        self.best_score.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plancraft_core::score::SimpleScore;

    fn scope(index: usize, score: i64) -> MoveScope<SimpleScore> {
        MoveScope::new(index, SimpleScore::of(score), true)
    }

    #[test]
    fn test_better_score_replaces_finalists() {
        let mut podium = HighestScorePodium::new();
        podium.step_started();

        podium.add_move(scope(0, -20));
        podium.add_move(scope(1, -1));
        podium.add_move(scope(2, -20));

        assert_eq!(podium.finalists().len(), 1);
        assert_eq!(podium.finalists()[0].move_index, 1);
        assert_eq!(podium.best_score(), Some(&SimpleScore::of(-1)));
    }

    #[test]
    fn test_equal_score_joins_finalists() {
        let mut podium = HighestScorePodium::new();
        podium.step_started();

        podium.add_move(scope(0, -1));
        podium.add_move(scope(1, -5));
        podium.add_move(scope(2, -1));
        podium.add_move(scope(3, -1));

        let indices: Vec<_> = podium.finalists().iter().map(|s| s.move_index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
    }

    #[test]
    fn test_step_started_clears() {
        let mut podium = HighestScorePodium::new();
        podium.step_started();
        podium.add_move(scope(0, -1));

        podium.step_started();
        assert!(podium.finalists().is_empty());
        assert!(podium.best_score().is_none());
    }
}
