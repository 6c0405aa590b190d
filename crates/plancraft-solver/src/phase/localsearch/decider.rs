//! The per-step decision loop: select, score, accept, pick, commit.

use std::fmt::Debug;
use std::marker::PhantomData;

use tracing::trace;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::{RecordingScoreDirector, ScoreDirector};

use crate::heuristic::r#move::{Move, MoveArena};
use crate::heuristic::selector::MoveSelector;
use crate::scope::{MoveScope, PhaseScope, StepScope};

use super::acceptor::Acceptor;
use super::forager::LocalSearchForager;

/// Runs the candidate loop of one local search step.
///
/// Each candidate is applied speculatively through a recording score
/// director, scored, judged by the acceptor, and rolled back before the
/// next candidate is pulled. Only the forager's winner is committed.
pub struct LocalSearchDecider<S, M, MS, A, Fo>
where
    S: PlanningSolution,
    M: Move<S>,
{
    move_selector: MS,
    acceptor: A,
    forager: Fo,
    arena: MoveArena<M>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, M, MS, A, Fo> Debug for LocalSearchDecider<S, M, MS, A, Fo>
where
    S: PlanningSolution,
    M: Move<S>,
    MS: Debug,
    A: Debug,
    Fo: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchDecider")
            .field("move_selector", &self.move_selector)
            .field("acceptor", &self.acceptor)
            .field("forager", &self.forager)
            .finish()
    }
}

impl<S, M, MS, A, Fo> LocalSearchDecider<S, M, MS, A, Fo>
where
    S: PlanningSolution,
    M: Move<S>,
    MS: MoveSelector<S, M>,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S::Score>,
{
    /// Creates a decider from its three collaborators.
    ///
    /// # Panics
    /// Panics if the move selector never ends while the forager cannot
    /// quit a step early, since such a step would never finish.
    pub fn new(move_selector: MS, acceptor: A, forager: Fo) -> Self {
        assert!(
            !move_selector.is_never_ending() || forager.supports_never_ending_selector(),
            "move selector {move_selector:?} is never ending but forager {forager:?} \
             has no accepted count limit to quit a step early"
        );
        Self {
            move_selector,
            acceptor,
            forager,
            arena: MoveArena::new(),
            _phantom: PhantomData,
        }
    }

    pub fn phase_started<D: ScoreDirector<S>>(&mut self, phase_scope: &mut PhaseScope<'_, S, D>) {
        let initial_score = phase_scope.calculate_score();
        self.acceptor.phase_started(&initial_score);
        self.forager.phase_started();
        self.move_selector
            .phase_started(phase_scope.solver_scope_mut().rng());
    }

    pub fn phase_ended(&mut self) {
        self.acceptor.phase_ended();
        self.forager.phase_ended();
        self.move_selector.phase_ended();
        self.arena.reset();
    }

    pub fn step_ended(&mut self, step_score: &S::Score) {
        self.acceptor.step_ended(step_score);
        self.move_selector.step_ended();
    }

    /// Decides and commits one step.
    ///
    /// Returns the winning move scope, or `None` when no candidate was
    /// picked, which ends the phase. On success the winner has been applied
    /// to the working solution and the step score recorded on `step_scope`.
    pub fn decide<D: ScoreDirector<S>>(
        &mut self,
        step_scope: &mut StepScope<'_, '_, S, D>,
        last_step_score: S::Score,
    ) -> Option<MoveScope<S::Score>> {
        self.arena.reset();
        let best_score = step_scope
            .phase_scope()
            .solver_scope()
            .best_score()
            .copied();
        self.forager.step_started(last_step_score, best_score);
        self.acceptor.step_started();
        self.move_selector
            .step_started(step_scope.phase_scope_mut().solver_scope_mut().rng());

        {
            let mut candidates = {
                let (director, rng) = step_scope
                    .phase_scope_mut()
                    .solver_scope_mut()
                    .score_director_and_rng();
                self.move_selector.iter_moves(director, rng)
            };
            while let Some(candidate) = candidates.next() {
                if !candidate.is_doable(step_scope.score_director()) {
                    continue;
                }

                let move_score = {
                    let mut recorder = RecordingScoreDirector::new(step_scope.score_director_mut());
                    candidate.do_move(&mut recorder);
                    let score = recorder.calculate_score();
                    recorder.undo_changes();
                    score
                };
                step_scope.phase_scope().solver_scope().record_score_calculation();

                let accepted = self.acceptor.is_accepted(
                    step_scope.phase_scope_mut().solver_scope_mut().rng(),
                    &last_step_score,
                    &move_score,
                );
                step_scope.phase_scope().solver_scope().record_move(accepted);
                trace!(
                    event = "move_evaluated",
                    score = %move_score,
                    accepted,
                    candidate = ?candidate,
                );

                let move_index = self.arena.push(candidate);
                self.forager
                    .add_move(MoveScope::new(move_index, move_score, accepted));

                if self.forager.is_quit_early() {
                    break;
                }
            }
        }

        let winner = self
            .forager
            .pick_move(step_scope.phase_scope_mut().solver_scope_mut().rng())?;
        let winning_move = self.arena.take(winner.move_index);
        winning_move.do_move(step_scope.score_director_mut());
        let step_score = step_scope.calculate_score();
        debug_assert_eq!(step_score, winner.score);
        step_scope.set_step_score(step_score);
        Some(winner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use plancraft_core::score::SimpleScore;
    use plancraft_test::nqueens::{create_nqueens_director, get_queen_row, set_queen_row};
    use plancraft_test::NQueensSolution;

    use super::*;
    use crate::heuristic::r#move::ChangeMove;
    use crate::heuristic::selector::{ChangeMoveSelector, SelectorLifecycle};
    use crate::phase::localsearch::acceptor::HillClimbingAcceptor;
    use crate::phase::localsearch::forager::AcceptedForager;
    use crate::scope::SolverScope;
    use crate::statistics::StatisticsCollector;

    fn selector(
        values: Vec<i64>,
    ) -> ChangeMoveSelector<
        NQueensSolution,
        i64,
        crate::heuristic::selector::FromSolutionEntitySelector,
        crate::heuristic::selector::StaticValueSelector<NQueensSolution, i64>,
    > {
        ChangeMoveSelector::simple(get_queen_row, set_queen_row, 0, "row", values)
    }

    #[test]
    fn test_decide_commits_improving_move() {
        let mut solver_scope = SolverScope::with_seed(create_nqueens_director(&[0, 0]), 42);
        solver_scope.update_best_solution();
        let mut decider = LocalSearchDecider::new(
            selector(vec![0, 1, 2, 3]),
            HillClimbingAcceptor::new(),
            AcceptedForager::new(None),
        );

        let mut phase_scope = PhaseScope::new(&mut solver_scope, 0);
        decider.phase_started(&mut phase_scope);
        let mut step_scope = StepScope::new(&mut phase_scope);

        let winner = decider
            .decide(&mut step_scope, SimpleScore::of(-1))
            .unwrap();

        assert!(winner.accepted);
        assert_eq!(winner.score, SimpleScore::of(0));
        assert_eq!(step_scope.step_score(), Some(&SimpleScore::of(0)));
        assert_eq!(step_scope.calculate_score(), SimpleScore::of(0));
    }

    #[test]
    fn test_decide_rolls_back_when_nothing_accepted() {
        let mut solver_scope = SolverScope::with_seed(create_nqueens_director(&[0, 2]), 42);
        solver_scope.update_best_solution();
        let mut decider = LocalSearchDecider::new(
            selector(vec![0, 1, 2]),
            HillClimbingAcceptor::new(),
            AcceptedForager::new(None),
        );

        let mut phase_scope = PhaseScope::new(&mut solver_scope, 0);
        decider.phase_started(&mut phase_scope);
        let mut step_scope = StepScope::new(&mut phase_scope);

        assert!(decider.decide(&mut step_scope, SimpleScore::of(0)).is_none());

        // Every speculative application was undone
        let solution = step_scope.score_director().working_solution();
        assert_eq!(get_queen_row(solution, 0), Some(0));
        assert_eq!(get_queen_row(solution, 1), Some(2));
        assert_eq!(step_scope.calculate_score(), SimpleScore::of(0));
    }

    #[test]
    fn test_accepted_count_limit_bounds_evaluation() {
        let collector = Arc::new(StatisticsCollector::<SimpleScore>::new());
        let mut solver_scope = SolverScope::with_seed(create_nqueens_director(&[0, 0]), 42)
            .with_statistics(Arc::clone(&collector));
        solver_scope.update_best_solution();
        let mut decider = LocalSearchDecider::new(
            selector(vec![0, 1, 2, 3]),
            HillClimbingAcceptor::new(),
            AcceptedForager::new(Some(1)),
        );

        let mut phase_scope = PhaseScope::new(&mut solver_scope, 0);
        decider.phase_started(&mut phase_scope);
        let mut step_scope = StepScope::new(&mut phase_scope);

        let winner = decider
            .decide(&mut step_scope, SimpleScore::of(-1))
            .unwrap();

        assert_eq!(winner.score, SimpleScore::of(0));
        // Quit after the first accepted candidate, well short of all 8 moves
        assert!(collector.current_moves_evaluated() < 8);
        assert_eq!(collector.current_moves_accepted(), 1);
    }

    #[derive(Debug)]
    struct EndlessSelector;

    impl SelectorLifecycle for EndlessSelector {}

    impl MoveSelector<NQueensSolution, ChangeMove<NQueensSolution, i64>> for EndlessSelector {
        fn iter_moves<'a, D: ScoreDirector<NQueensSolution>>(
            &'a self,
            _score_director: &D,
            _rng: &mut rand::rngs::StdRng,
        ) -> Box<dyn Iterator<Item = ChangeMove<NQueensSolution, i64>> + 'a> {
            Box::new(std::iter::empty())
        }

        fn size<D: ScoreDirector<NQueensSolution>>(&self, _score_director: &D) -> usize {
            usize::MAX
        }

        fn is_never_ending(&self) -> bool {
            true
        }
    }

    #[test]
    #[should_panic(expected = "never ending")]
    fn test_never_ending_selector_requires_quit_early_forager() {
        let _ = LocalSearchDecider::new(
            EndlessSelector,
            HillClimbingAcceptor::new(),
            AcceptedForager::<SimpleScore>::new(None),
        );
    }
}
