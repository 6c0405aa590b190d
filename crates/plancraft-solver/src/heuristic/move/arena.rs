//! Arena for per-step move storage.
//!
//! The decision loop evaluates many candidate moves per step and discards
//! all but one. The arena keeps the candidates in one reusable buffer so a
//! step produces no per-move allocations once the buffer has warmed up.

use std::fmt::Debug;
use std::mem::MaybeUninit;

/// A reusable buffer of moves with O(1) reset.
///
/// Slots up to `len` are initialized; `reset()` drops them in place and
/// rewinds `len` without releasing the backing storage.
pub struct MoveArena<M> {
    storage: Vec<MaybeUninit<M>>,
    len: usize,
}

impl<M> MoveArena<M> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            len: 0,
        }
    }

    /// Creates an arena with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Number of live moves in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots the backing storage can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// True if the arena holds no live moves.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a move, reusing a previously vacated slot when possible.
    ///
    /// Returns the index of the stored move.
    pub fn push(&mut self, m: M) -> usize {
        let index = self.len;
        if index < self.storage.len() {
            self.storage[index] = MaybeUninit::new(m);
        } else {
            self.storage.push(MaybeUninit::new(m));
        }
        self.len += 1;
        index
    }

    /// Appends every move from the iterator.
    pub fn extend(&mut self, moves: impl Iterator<Item = M>) {
        for m in moves {
            self.push(m);
        }
    }

    /// Returns a reference to the move at `index`, if live.
    pub fn get(&self, index: usize) -> Option<&M> {
        if index < self.len {
            // SAFETY: slots below len are always initialized.
            Some(unsafe { self.storage[index].assume_init_ref() })
        } else {
            None
        }
    }

    /// Takes ownership of the move at `index`.
    ///
    /// The last live move is relocated into the vacated slot, so indices of
    /// other moves may change. The decision loop only takes the winner after
    /// foraging, when no other index is still referenced.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn take(&mut self, index: usize) -> M {
        assert!(
            index < self.len,
            "move arena index {index} out of bounds (len {})",
            self.len
        );
        // SAFETY: slot index is initialized; after the read it is treated as
        // vacant and either overwritten by the last live slot or excluded by
        // the decremented len.
        let value = unsafe { self.storage[index].assume_init_read() };
        self.len -= 1;
        if index < self.len {
            let last = unsafe { self.storage[self.len].assume_init_read() };
            self.storage[index] = MaybeUninit::new(last);
        }
        value
    }

    /// Drops all live moves and rewinds the arena, keeping its capacity.
    pub fn reset(&mut self) {
        for slot in &mut self.storage[..self.len] {
            // SAFETY: slots below len are initialized exactly once.
            unsafe { slot.assume_init_drop() };
        }
        self.len = 0;
    }

    /// Iterates over the live moves.
    pub fn iter(&self) -> impl Iterator<Item = &M> {
        // SAFETY: slots below len are always initialized.
        self.storage[..self.len]
            .iter()
            .map(|slot| unsafe { slot.assume_init_ref() })
    }
}

impl<M> Default for MoveArena<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Drop for MoveArena<M> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<M: Debug> Debug for MoveArena<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveArena").field("len", &self.len).finish()
    }
}
