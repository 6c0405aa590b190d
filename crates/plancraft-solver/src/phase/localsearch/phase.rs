//! Local search phase driver.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, info, trace};

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use crate::event::SolverEventSupport;
use crate::heuristic::r#move::Move;
use crate::heuristic::selector::MoveSelector;
use crate::phase::Phase;
use crate::scope::{PhaseScope, SolverScope, StepScope};
use crate::termination::{NoTermination, Termination};

use super::acceptor::Acceptor;
use super::decider::LocalSearchDecider;
use super::forager::LocalSearchForager;

/// A local search phase: repeats decision steps until no acceptable move
/// remains, a termination fires, or the solver terminates early.
///
/// The phase owns the decider and drives step boundaries, best solution
/// bookkeeping, and lifecycle notifications around it. An optional
/// termination is consulted at every step boundary.
pub struct LocalSearchPhase<S, M, MS, A, Fo, T = NoTermination>
where
    S: PlanningSolution,
    M: Move<S>,
{
    decider: LocalSearchDecider<S, M, MS, A, Fo>,
    phase_index: usize,
    step_limit: Option<u64>,
    termination: T,
    events: Option<Arc<SolverEventSupport<S>>>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, M, MS, A, Fo, T> Debug for LocalSearchPhase<S, M, MS, A, Fo, T>
where
    S: PlanningSolution,
    M: Move<S>,
    MS: Debug,
    A: Debug,
    Fo: Debug,
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchPhase")
            .field("decider", &self.decider)
            .field("phase_index", &self.phase_index)
            .field("step_limit", &self.step_limit)
            .field("termination", &self.termination)
            .finish()
    }
}

impl<S, M, MS, A, Fo> LocalSearchPhase<S, M, MS, A, Fo, NoTermination>
where
    S: PlanningSolution,
    M: Move<S>,
    MS: MoveSelector<S, M>,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S::Score>,
{
    /// Creates a phase from its collaborators.
    ///
    /// # Panics
    /// Panics if the move selector never ends while the forager cannot
    /// quit a step early.
    pub fn new(move_selector: MS, acceptor: A, forager: Fo) -> Self {
        Self {
            decider: LocalSearchDecider::new(move_selector, acceptor, forager),
            phase_index: 0,
            step_limit: None,
            termination: NoTermination,
            events: None,
            _phantom: PhantomData,
        }
    }
}

impl<S, M, MS, A, Fo, T> LocalSearchPhase<S, M, MS, A, Fo, T>
where
    S: PlanningSolution,
    M: Move<S>,
{
    pub fn with_phase_index(mut self, phase_index: usize) -> Self {
        self.phase_index = phase_index;
        self
    }

    /// Bounds the number of steps this phase may take.
    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.step_limit = Some(step_limit);
        self
    }

    /// Sets a termination consulted at step boundaries.
    pub fn with_termination<T2>(self, termination: T2) -> LocalSearchPhase<S, M, MS, A, Fo, T2> {
        LocalSearchPhase {
            decider: self.decider,
            phase_index: self.phase_index,
            step_limit: self.step_limit,
            termination,
            events: self.events,
            _phantom: PhantomData,
        }
    }

    /// Attaches event listeners to fire phase, step, and best-solution
    /// notifications.
    pub fn with_event_support(mut self, events: Arc<SolverEventSupport<S>>) -> Self {
        self.events = Some(events);
        self
    }
}

impl<S, M, MS, A, Fo, T> LocalSearchPhase<S, M, MS, A, Fo, T>
where
    S: PlanningSolution,
    M: Move<S>,
    MS: MoveSelector<S, M>,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S::Score>,
{
    fn solve_phase<D>(&mut self, solver_scope: &mut SolverScope<S, D>)
    where
        D: ScoreDirector<S>,
        T: Termination<S, D>,
    {
        let stats = solver_scope.statistics().cloned();
        let stats_index = stats.as_ref().map(|c| c.start_phase("LocalSearch"));
        let moves_evaluated_before = stats.as_ref().map_or(0, |c| c.current_moves_evaluated());
        let moves_accepted_before = stats.as_ref().map_or(0, |c| c.current_moves_accepted());

        let mut phase_scope = PhaseScope::new(solver_scope, self.phase_index);
        self.decider.phase_started(&mut phase_scope);
        let starting_score = phase_scope.calculate_score();
        if let Some(events) = &self.events {
            events.fire_phase_started(self.phase_index, "LocalSearch");
        }
        info!(
            event = "phase_started",
            phase_index = self.phase_index,
            score = %starting_score,
        );

        let mut last_step_score = starting_score;
        let mut exhausted = false;
        loop {
            if phase_scope.solver_scope().is_terminate_early() {
                break;
            }
            if self.termination.is_terminated(phase_scope.solver_scope()) {
                break;
            }
            if self
                .step_limit
                .is_some_and(|limit| phase_scope.step_count() >= limit)
            {
                break;
            }

            let mut step_scope = StepScope::new(&mut phase_scope);
            let step_index = step_scope.step_index();
            if let Some(events) = &self.events {
                events.fire_step_started(step_index);
            }

            let Some(winner) = self.decider.decide(&mut step_scope, last_step_score) else {
                // No doable accepted move left: a terminal condition
                exhausted = true;
                break;
            };
            step_scope.complete();

            last_step_score = winner.score;
            self.decider.step_ended(&winner.score);
            trace!(event = "step_ended", step_index, score = %winner.score);

            if phase_scope.update_best_solution() {
                debug!(event = "best_solution_changed", score = %winner.score);
                if let Some(events) = &self.events {
                    let solver_scope = phase_scope.solver_scope();
                    if let (Some(solution), Some(score)) =
                        (solver_scope.best_solution(), solver_scope.best_score())
                    {
                        events.fire_best_solution_changed(solution, score);
                    }
                }
            }
            if let Some(events) = &self.events {
                events.fire_step_ended(step_index, &last_step_score);
            }
        }

        self.decider.phase_ended();
        if let Some(events) = &self.events {
            events.fire_phase_ended(self.phase_index, "LocalSearch");
        }
        info!(
            event = "phase_ended",
            phase_index = self.phase_index,
            step_count = phase_scope.step_count(),
            exhausted,
            score = %last_step_score,
        );

        if let (Some(collector), Some(index)) = (stats, stats_index) {
            collector.end_phase(
                index,
                phase_scope.elapsed(),
                phase_scope.step_count(),
                collector.current_moves_evaluated() - moves_evaluated_before,
                collector.current_moves_accepted() - moves_accepted_before,
                Some(starting_score),
                Some(last_step_score),
            );
        }
    }
}

impl<S, M, MS, A, Fo, T, D> Phase<S, D> for LocalSearchPhase<S, M, MS, A, Fo, T>
where
    S: PlanningSolution,
    M: Move<S>,
    MS: MoveSelector<S, M>,
    A: Acceptor<S>,
    Fo: LocalSearchForager<S::Score>,
    T: Termination<S, D>,
    D: ScoreDirector<S>,
{
    fn solve(&mut self, solver_scope: &mut SolverScope<S, D>) {
        self.solve_phase(solver_scope);
    }

    fn phase_type_name(&self) -> &'static str {
        "LocalSearch"
    }
}
