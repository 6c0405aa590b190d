//! Tests for SwapMove operations.

use super::*;

#[test]
fn test_swap_move_is_doable() {
    let director = create_director(vec![
        Task::with_priority(1),
        Task::with_priority(5),
        Task::with_priority(1),
    ]);

    let m = SwapMove::<TaskSolution, i32>::new(0, 1, get_priority, set_priority, "priority", 0);
    assert!(m.is_doable(&director));

    // Same entity - not doable
    let m = SwapMove::<TaskSolution, i32>::new(1, 1, get_priority, set_priority, "priority", 0);
    assert!(!m.is_doable(&director));

    // Equal values - not doable
    let m = SwapMove::<TaskSolution, i32>::new(0, 2, get_priority, set_priority, "priority", 0);
    assert!(!m.is_doable(&director));
}

#[test]
fn test_swap_move_do_and_undo() {
    let mut director = create_director(vec![Task::with_priority(1), Task::with_priority(5)]);

    let m = SwapMove::<TaskSolution, i32>::new(0, 1, get_priority, set_priority, "priority", 0);
    let undo = m.do_move(&mut director);

    assert_eq!(get_priority(director.working_solution(), 0), Some(5));
    assert_eq!(get_priority(director.working_solution(), 1), Some(1));

    // A swap is its own inverse
    assert_eq!(undo, m);
    undo.do_move(&mut director);

    assert_eq!(get_priority(director.working_solution(), 0), Some(1));
    assert_eq!(get_priority(director.working_solution(), 1), Some(5));
}

#[test]
fn test_swap_move_with_unassigned() {
    let mut director = create_director(vec![Task::with_priority(3), Task::unassigned()]);

    let m = SwapMove::<TaskSolution, i32>::new(0, 1, get_priority, set_priority, "priority", 0);
    assert!(m.is_doable(&director));

    m.do_move(&mut director);
    assert_eq!(get_priority(director.working_solution(), 0), None);
    assert_eq!(get_priority(director.working_solution(), 1), Some(3));
}

#[test]
fn test_swap_move_recorded_undo() {
    let mut director = create_director(vec![Task::with_priority(1), Task::with_priority(5)]);

    let m = SwapMove::<TaskSolution, i32>::new(0, 1, get_priority, set_priority, "priority", 0);
    {
        let mut recording = RecordingScoreDirector::new(&mut director);
        m.do_move(&mut recording);
        assert_eq!(get_priority(recording.working_solution(), 0), Some(5));
        recording.undo_changes();
    }

    assert_eq!(get_priority(director.working_solution(), 0), Some(1));
    assert_eq!(get_priority(director.working_solution(), 1), Some(5));
}

#[test]
fn test_swap_move_entity_indices() {
    let m = SwapMove::<TaskSolution, i32>::new(2, 4, get_priority, set_priority, "priority", 0);
    assert_eq!(m.entity_indices(), &[2, 4]);
    assert_eq!(m.left_index(), 2);
    assert_eq!(m.right_index(), 4);
}
