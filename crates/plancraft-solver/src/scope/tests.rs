use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;

use plancraft_core::score::SimpleScore;
use plancraft_test::nqueens::{create_nqueens_director, set_queen_row};

use super::{MoveScope, PhaseScope, SolverScope, StepScope};

#[test]
fn test_solver_scope_tracks_best_solution() {
    let director = create_nqueens_director(&[0, 0]);
    let mut scope = SolverScope::new(director);

    assert!(scope.best_solution().is_none());
    assert!(scope.update_best_solution());
    assert_eq!(scope.best_score().copied(), Some(SimpleScore::of(-1)));

    // Same score again is not an improvement
    assert!(!scope.update_best_solution());
}

#[test]
fn test_solver_scope_best_improves_after_change() {
    let director = create_nqueens_director(&[0, 0]);
    let mut scope = SolverScope::new(director);
    scope.update_best_solution();

    set_queen_row(scope.working_solution_mut(), 1, Some(2));
    assert!(scope.update_best_solution());
    assert_eq!(scope.best_score().copied(), Some(SimpleScore::of(0)));
}

#[test]
fn test_solver_scope_seeded_rng_is_reproducible() {
    let make_draws = || -> Vec<u64> {
        let director = create_nqueens_director(&[0]);
        let mut scope = SolverScope::with_seed(director, 17);
        (0..5).map(|_| scope.rng().random()).collect()
    };

    assert_eq!(make_draws(), make_draws());
}

#[test]
fn test_solver_scope_step_count() {
    let director = create_nqueens_director(&[0]);
    let mut scope = SolverScope::new(director);

    assert_eq!(scope.total_step_count(), 0);
    assert_eq!(scope.increment_step_count(), 1);
    assert_eq!(scope.increment_step_count(), 2);
}

#[test]
fn test_solver_scope_terminate_early_flag() {
    let director = create_nqueens_director(&[0]);
    let mut scope = SolverScope::new(director);

    assert!(!scope.is_terminate_early());

    let flag = Arc::new(AtomicBool::new(false));
    scope.set_terminate_early_flag(flag.clone());
    assert!(!scope.is_terminate_early());

    flag.store(true, std::sync::atomic::Ordering::SeqCst);
    assert!(scope.is_terminate_early());
}

#[test]
fn test_take_best_or_working_falls_back_to_working() {
    let director = create_nqueens_director(&[0, 1]);
    let scope = SolverScope::new(director);

    let solution = scope.take_best_or_working_solution();
    assert_eq!(solution.queens.len(), 2);
}

#[test]
fn test_phase_scope_increments_both_counters() {
    let director = create_nqueens_director(&[0]);
    let mut solver_scope = SolverScope::new(director);
    let mut phase_scope = PhaseScope::new(&mut solver_scope, 0);

    phase_scope.increment_step_count();
    phase_scope.increment_step_count();

    assert_eq!(phase_scope.step_count(), 2);
    assert_eq!(phase_scope.solver_scope().total_step_count(), 2);
}

#[test]
fn test_step_scope_index_and_score() {
    let director = create_nqueens_director(&[0]);
    let mut solver_scope = SolverScope::new(director);
    let mut phase_scope = PhaseScope::new(&mut solver_scope, 0);
    phase_scope.increment_step_count();

    let mut step_scope = StepScope::new(&mut phase_scope);
    assert_eq!(step_scope.step_index(), 1);
    assert!(step_scope.step_score().is_none());

    step_scope.set_step_score(SimpleScore::of(-3));
    assert_eq!(step_scope.step_score().copied(), Some(SimpleScore::of(-3)));

    step_scope.complete();
    assert_eq!(phase_scope.step_count(), 2);
}

#[test]
fn test_move_scope_fields() {
    let scope = MoveScope::new(3, SimpleScore::of(-7), true);
    assert_eq!(scope.move_index, 3);
    assert_eq!(scope.score, SimpleScore::of(-7));
    assert!(scope.accepted);
}
