//! Tests for ChangeMove operations.

use super::*;

#[test]
fn test_change_move_is_doable() {
    let director = create_director(vec![Task::with_priority(1), Task::with_priority(2)]);

    // Different value - doable
    let m = ChangeMove::<_, i32>::new(0, Some(5), get_priority, set_priority, "priority", 0);
    assert!(m.is_doable(&director));

    // Same value - not doable
    let m = ChangeMove::<_, i32>::new(0, Some(1), get_priority, set_priority, "priority", 0);
    assert!(!m.is_doable(&director));
}

#[test]
fn test_change_move_unassign_unassigned_not_doable() {
    let director = create_director(vec![Task::unassigned()]);

    let m = ChangeMove::<_, i32>::new(0, None, get_priority, set_priority, "priority", 0);
    assert!(!m.is_doable(&director));
}

#[test]
fn test_change_move_do_move() {
    let mut director = create_director(vec![Task::with_priority(1)]);

    let m = ChangeMove::<_, i32>::new(0, Some(5), get_priority, set_priority, "priority", 0);
    m.do_move(&mut director);

    assert_eq!(get_priority(director.working_solution(), 0), Some(5));
}

#[test]
fn test_change_move_returns_inverse() {
    let mut director = create_director(vec![Task::with_priority(1)]);

    let m = ChangeMove::<_, i32>::new(0, Some(5), get_priority, set_priority, "priority", 0);
    let undo = m.do_move(&mut director);
    assert_eq!(get_priority(director.working_solution(), 0), Some(5));

    undo.do_move(&mut director);
    assert_eq!(get_priority(director.working_solution(), 0), Some(1));
}

#[test]
fn test_change_move_to_none() {
    let mut director = create_director(vec![Task::with_priority(5)]);

    let m = ChangeMove::<_, i32>::new(0, None, get_priority, set_priority, "priority", 0);
    assert!(m.is_doable(&director));

    m.do_move(&mut director);
    assert_eq!(get_priority(director.working_solution(), 0), None);
}

#[test]
fn test_change_move_recorded_undo() {
    let mut director = create_director(vec![Task::with_priority(1), Task::with_priority(2)]);

    let m = ChangeMove::<_, i32>::new(1, Some(9), get_priority, set_priority, "priority", 0);
    {
        let mut recording = RecordingScoreDirector::new(&mut director);
        m.do_move(&mut recording);
        assert_eq!(get_priority(recording.working_solution(), 1), Some(9));
        recording.undo_changes();
    }

    assert_eq!(get_priority(director.working_solution(), 1), Some(2));
}

#[test]
fn test_change_move_entity_indices() {
    let m =
        ChangeMove::<TaskSolution, i32>::new(3, Some(5), get_priority, set_priority, "priority", 0);
    assert_eq!(m.entity_indices(), &[3]);
    assert_eq!(m.descriptor_index(), 0);
}

#[test]
fn test_change_move_equality_ignores_accessors() {
    let m1 =
        ChangeMove::<TaskSolution, i32>::new(0, Some(5), get_priority, set_priority, "priority", 0);
    let m2 =
        ChangeMove::<TaskSolution, i32>::new(0, Some(5), get_priority, set_priority, "priority", 0);
    let m3 =
        ChangeMove::<TaskSolution, i32>::new(0, Some(6), get_priority, set_priority, "priority", 0);
    assert_eq!(m1, m2);
    assert_ne!(m1, m3);
}

#[test]
fn test_change_move_copy() {
    let m1 =
        ChangeMove::<TaskSolution, i32>::new(0, Some(5), get_priority, set_priority, "priority", 0);
    let m2 = m1;
    assert_eq!(m1.entity_index(), m2.entity_index());
    assert_eq!(m1.to_value(), m2.to_value());
}
