//! MoveArena tests.

use super::*;

#[test]
fn test_arena_basic() {
    let mut arena: MoveArena<i32> = MoveArena::new();
    assert!(arena.is_empty());

    arena.push(1);
    arena.push(2);
    arena.push(3);

    assert_eq!(arena.len(), 3);
    assert_eq!(arena.get(0), Some(&1));
    assert_eq!(arena.get(1), Some(&2));
    assert_eq!(arena.get(2), Some(&3));
    assert_eq!(arena.get(3), None);
}

#[test]
fn test_arena_reset_keeps_capacity() {
    let mut arena: MoveArena<i32> = MoveArena::new();
    arena.push(1);
    arena.push(2);
    arena.push(3);

    let capacity_before = arena.capacity();

    arena.reset();

    assert!(arena.is_empty());
    assert_eq!(arena.capacity(), capacity_before);
}

#[test]
fn test_arena_reuse_after_reset() {
    let mut arena: MoveArena<i32> = MoveArena::new();

    arena.push(1);
    arena.push(2);
    assert_eq!(arena.len(), 2);

    arena.reset();

    arena.push(10);
    arena.push(20);
    arena.push(30);
    assert_eq!(arena.len(), 3);
    assert_eq!(arena.get(0), Some(&10));
    assert_eq!(arena.get(1), Some(&20));
    assert_eq!(arena.get(2), Some(&30));
}

#[test]
fn test_arena_iter() {
    let mut arena: MoveArena<i32> = MoveArena::new();
    arena.push(1);
    arena.push(2);
    arena.push(3);

    let collected: Vec<i32> = arena.iter().copied().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn test_arena_extend() {
    let mut arena: MoveArena<i32> = MoveArena::new();
    arena.extend([4, 5, 6].into_iter());
    assert_eq!(arena.len(), 3);
    assert_eq!(arena.get(1), Some(&5));
}

#[test]
fn test_arena_take_last() {
    let mut arena: MoveArena<String> = MoveArena::new();
    arena.push("a".to_string());
    arena.push("b".to_string());

    assert_eq!(arena.take(1), "b");
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.get(0), Some(&"a".to_string()));
}

#[test]
fn test_arena_take_middle_relocates_last() {
    let mut arena: MoveArena<String> = MoveArena::new();
    arena.push("a".to_string());
    arena.push("b".to_string());
    arena.push("c".to_string());

    assert_eq!(arena.take(0), "a");
    assert_eq!(arena.len(), 2);
    // The last live element filled the vacated slot
    assert_eq!(arena.get(0), Some(&"c".to_string()));
    assert_eq!(arena.get(1), Some(&"b".to_string()));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_arena_take_out_of_bounds_panics() {
    let mut arena: MoveArena<i32> = MoveArena::new();
    arena.push(1);
    arena.take(1);
}

#[test]
fn test_arena_drop_runs_destructors() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Tracked(Arc<AtomicUsize>);
    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let drops = Arc::new(AtomicUsize::new(0));
    {
        let mut arena: MoveArena<Tracked> = MoveArena::new();
        arena.push(Tracked(drops.clone()));
        arena.push(Tracked(drops.clone()));
        arena.push(Tracked(drops.clone()));
        arena.reset();
        assert_eq!(drops.load(Ordering::SeqCst), 3);
        arena.push(Tracked(drops.clone()));
    }
    // The remaining element dropped with the arena
    assert_eq!(drops.load(Ordering::SeqCst), 4);
}
