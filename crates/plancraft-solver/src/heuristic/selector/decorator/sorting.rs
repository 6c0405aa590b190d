//! Sorting move selector decorator.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use crate::heuristic::r#move::Move;
use crate::heuristic::selector::move_selector::MoveSelector;
use crate::heuristic::selector::SelectorLifecycle;

/// Yields the inner selector's moves sorted by a comparator.
///
/// Sorting collects the full sequence on every `iter_moves` call; wrap this
/// in a [`CachingMoveSelector`](super::CachingMoveSelector) when the inner
/// selection does not change within a step.
pub struct SortingMoveSelector<S, M, Inner> {
    inner: Inner,
    comparator: fn(&M, &M) -> Ordering,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, M, Inner> SortingMoveSelector<S, M, Inner> {
    /// Creates a new sorting selector.
    ///
    /// # Panics
    /// Panics if the inner selector is never-ending.
    pub fn new(inner: Inner, comparator: fn(&M, &M) -> Ordering) -> Self
    where
        S: PlanningSolution,
        M: Move<S>,
        Inner: MoveSelector<S, M>,
    {
        assert!(
            !inner.is_never_ending(),
            "sorting selector cannot wrap the never-ending selector {:?}",
            inner
        );
        Self {
            inner,
            comparator,
            _phantom: PhantomData,
        }
    }
}

impl<S, M, Inner: Debug> Debug for SortingMoveSelector<S, M, Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortingMoveSelector")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<S, M, Inner> SelectorLifecycle for SortingMoveSelector<S, M, Inner>
where
    Inner: SelectorLifecycle,
{
    fn phase_started(&mut self, rng: &mut rand::rngs::StdRng) {
        self.inner.phase_started(rng);
    }

    fn step_started(&mut self, rng: &mut rand::rngs::StdRng) {
        self.inner.step_started(rng);
    }

    fn step_ended(&mut self) {
        self.inner.step_ended();
    }

    fn phase_ended(&mut self) {
        self.inner.phase_ended();
    }
}

impl<S, M, Inner> MoveSelector<S, M> for SortingMoveSelector<S, M, Inner>
where
    S: PlanningSolution,
    M: Move<S>,
    Inner: MoveSelector<S, M>,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        rng: &mut rand::rngs::StdRng,
    ) -> Box<dyn Iterator<Item = M> + 'a> {
        let mut moves: Vec<M> = self.inner.iter_moves(score_director, rng).collect();
        moves.sort_by(self.comparator);
        Box::new(moves.into_iter())
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        self.inner.size(score_director)
    }

    fn is_never_ending(&self) -> bool {
        false
    }
}
