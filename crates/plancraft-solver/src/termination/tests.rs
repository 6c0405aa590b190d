use plancraft_core::score::SimpleScore;
use plancraft_test::nqueens::create_nqueens_director;
use plancraft_test::NQueensSolution;

use super::*;
use crate::scope::SolverScope;

fn scope_with_best(
    rows: &[i64],
) -> SolverScope<
    NQueensSolution,
    impl plancraft_scoring::ScoreDirector<NQueensSolution>,
> {
    let mut scope = SolverScope::new(create_nqueens_director(rows));
    scope.update_best_solution();
    scope
}

#[test]
fn test_step_count_termination() {
    let mut scope = SolverScope::new(create_nqueens_director(&[0]));
    let term = StepCountTermination::new(2);

    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination_requires_started_clock() {
    let mut scope = SolverScope::new(create_nqueens_director(&[0]));
    let term = TimeTermination::millis(0);

    // No start time recorded yet
    assert!(!term.is_terminated(&scope));

    scope.start_solving();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination_far_limit() {
    let mut scope = SolverScope::new(create_nqueens_director(&[0]));
    scope.start_solving();

    let term = TimeTermination::seconds(3600);
    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_best_score_termination() {
    let scope = scope_with_best(&[0, 2]);
    // Solved board scores 0

    let reached = BestScoreTermination::new(SimpleScore::of(0));
    assert!(reached.is_terminated(&scope));

    let unreached = BestScoreTermination::new(SimpleScore::of(1));
    assert!(!unreached.is_terminated(&scope));
}

#[test]
fn test_best_score_termination_without_best() {
    let scope = SolverScope::new(create_nqueens_director(&[0]));
    let term = BestScoreTermination::new(SimpleScore::of(-100));
    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_best_score_feasible_termination() {
    let feasible = scope_with_best(&[0, 2]);
    let infeasible = scope_with_best(&[0, 0]);

    let term = BestScoreFeasibleTermination::new();
    assert!(term.is_terminated(&feasible));
    assert!(!term.is_terminated(&infeasible));
}

#[test]
fn test_unimproved_step_count_termination() {
    let mut scope = scope_with_best(&[0, 0]);
    let term = UnimprovedStepCountTermination::<NQueensSolution>::new(2);

    // Step 0 records the initial best
    assert!(!term.is_terminated(&scope));

    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    // Re-checking the same step does not double-count
    assert!(!term.is_terminated(&scope));

    scope.increment_step_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_unimproved_step_count_resets_on_improvement() {
    let mut scope = scope_with_best(&[0, 0]);
    let term = UnimprovedStepCountTermination::<NQueensSolution>::new(2);

    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));

    // Improvement resets the counter
    plancraft_test::nqueens::set_queen_row(scope.working_solution_mut(), 1, Some(2));
    scope.update_best_solution();

    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(!term.is_terminated(&scope));
    scope.increment_step_count();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_unimproved_time_termination_resets_on_improvement() {
    let mut scope = SolverScope::new(create_nqueens_director(&[0, 0]));
    let term = UnimprovedTimeTermination::<NQueensSolution>::millis(0);

    // First observation records the baseline and never terminates
    scope.update_best_solution();
    assert!(!term.is_terminated(&scope));

    // Zero tolerance means any later check without improvement terminates
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination_any_child() {
    let mut scope = SolverScope::new(create_nqueens_director(&[0]));
    scope.increment_step_count();

    let term = OrTermination::new((
        StepCountTermination::new(1),
        StepCountTermination::new(100),
    ));
    assert!(term.is_terminated(&scope));

    let term = OrTermination::new((
        StepCountTermination::new(50),
        StepCountTermination::new(100),
    ));
    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_and_termination_all_children() {
    let mut scope = SolverScope::new(create_nqueens_director(&[0]));
    scope.increment_step_count();

    let term = AndTermination::new((
        StepCountTermination::new(1),
        StepCountTermination::new(100),
    ));
    assert!(!term.is_terminated(&scope));

    let term = AndTermination::new((StepCountTermination::new(1), StepCountTermination::new(1)));
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination_three_children() {
    let mut scope = scope_with_best(&[0, 2]);
    scope.increment_step_count();

    let term = OrTermination::new((
        StepCountTermination::new(100),
        BestScoreTermination::new(SimpleScore::of(0)),
        BestScoreFeasibleTermination::new(),
    ));
    assert!(term.is_terminated(&scope));
}
