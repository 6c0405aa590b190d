//! Shuffling move selector decorator.

use std::cell::RefCell;
use std::fmt::Debug;
use std::marker::PhantomData;

use rand::prelude::SliceRandom;
use rand::rngs::StdRng;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use crate::heuristic::r#move::Move;
use crate::heuristic::selector::move_selector::MoveSelector;
use crate::heuristic::selector::{SelectionCacheType, SelectorLifecycle};

/// Yields the inner selector's moves in shuffled order.
///
/// The snapshot is shuffled exactly once per cache-scope refresh, not once
/// per access: repeated `iter_moves` calls within one scope see the same
/// order. The shuffle draws from the working random source handed to
/// `iter_moves`, so a fixed solver seed reproduces the same orders.
pub struct ShufflingMoveSelector<S, M, Inner> {
    inner: Inner,
    cache_type: SelectionCacheType,
    shuffled: RefCell<Option<Vec<M>>>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, M, Inner> ShufflingMoveSelector<S, M, Inner> {
    /// Creates a new shuffling selector with the given cache scope.
    ///
    /// # Panics
    /// Panics if the inner selector is never-ending: shuffling requires
    /// collecting the full sequence.
    pub fn new(inner: Inner, cache_type: SelectionCacheType) -> Self
    where
        S: PlanningSolution,
        M: Move<S>,
        Inner: MoveSelector<S, M>,
    {
        assert!(
            !inner.is_never_ending(),
            "shuffling selector cannot wrap the never-ending selector {:?}",
            inner
        );
        Self {
            inner,
            cache_type,
            shuffled: RefCell::new(None),
            _phantom: PhantomData,
        }
    }

    /// Discards the snapshot, forcing a reshuffle on the next `iter_moves`.
    fn reset(&self) {
        *self.shuffled.borrow_mut() = None;
    }
}

impl<S, M, Inner: Debug> Debug for ShufflingMoveSelector<S, M, Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShufflingMoveSelector")
            .field("inner", &self.inner)
            .field("cache_type", &self.cache_type)
            .finish()
    }
}

// SAFETY: the snapshot is only touched from the decision loop's single
// thread; the RefCell never crosses a thread boundary while borrowed.
unsafe impl<S, M: Send, Inner: Send> Send for ShufflingMoveSelector<S, M, Inner> {}

impl<S, M, Inner> SelectorLifecycle for ShufflingMoveSelector<S, M, Inner>
where
    Inner: SelectorLifecycle,
{
    fn phase_started(&mut self, rng: &mut StdRng) {
        if self.cache_type.invalidates_on_phase() {
            self.reset();
        }
        self.inner.phase_started(rng);
    }

    fn step_started(&mut self, rng: &mut StdRng) {
        if self.cache_type.invalidates_on_step() {
            self.reset();
        }
        self.inner.step_started(rng);
    }

    fn step_ended(&mut self) {
        self.inner.step_ended();
    }

    fn phase_ended(&mut self) {
        self.inner.phase_ended();
    }
}

impl<S, M, Inner> MoveSelector<S, M> for ShufflingMoveSelector<S, M, Inner>
where
    S: PlanningSolution,
    M: Move<S>,
    Inner: MoveSelector<S, M>,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        rng: &mut StdRng,
    ) -> Box<dyn Iterator<Item = M> + 'a> {
        {
            let mut shuffled = self.shuffled.borrow_mut();
            if shuffled.is_none() {
                let mut moves: Vec<M> =
                    self.inner.iter_moves(score_director, rng).collect();
                moves.shuffle(rng);
                *shuffled = Some(moves);
            }
        }

        let shuffled = self.shuffled.borrow();
        let moves = shuffled.as_ref().map(Vec::clone).unwrap_or_default();
        Box::new(moves.into_iter())
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        self.inner.size(score_director)
    }

    fn is_never_ending(&self) -> bool {
        false
    }
}
