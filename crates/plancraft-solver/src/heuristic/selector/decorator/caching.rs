//! Caching move selector decorator.

use std::cell::RefCell;
use std::fmt::Debug;
use std::marker::PhantomData;

use rand::rngs::StdRng;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use crate::heuristic::r#move::Move;
use crate::heuristic::selector::move_selector::MoveSelector;
use crate::heuristic::selector::{SelectionCacheType, SelectorLifecycle};

/// Caches moves from an inner selector for repeated iteration.
///
/// The first `iter_moves` call after a cache-scope refresh collects the
/// inner selector's full sequence; subsequent calls within the scope serve
/// the snapshot. The snapshot is discarded at the lifecycle boundary that
/// matches the configured [`SelectionCacheType`].
pub struct CachingMoveSelector<S, M, Inner> {
    inner: Inner,
    cache_type: SelectionCacheType,
    cache: RefCell<Option<Vec<M>>>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, M, Inner> CachingMoveSelector<S, M, Inner> {
    /// Creates a new caching selector with the given cache scope.
    ///
    /// # Panics
    /// Panics if the inner selector is never-ending: an infinite sequence
    /// cannot be snapshotted at any cache scope.
    pub fn new(inner: Inner, cache_type: SelectionCacheType) -> Self
    where
        S: PlanningSolution,
        M: Move<S>,
        Inner: MoveSelector<S, M>,
    {
        assert!(
            !inner.is_never_ending(),
            "caching selector with {:?} scope cannot wrap the never-ending selector {:?}",
            cache_type,
            inner
        );
        Self {
            inner,
            cache_type,
            cache: RefCell::new(None),
            _phantom: PhantomData,
        }
    }

    /// Discards the snapshot, forcing a rebuild on the next `iter_moves`.
    pub fn reset(&self) {
        *self.cache.borrow_mut() = None;
    }

    /// Returns the inner selector.
    pub fn inner(&self) -> &Inner {
        &self.inner
    }

    /// Returns the configured cache scope.
    pub fn cache_type(&self) -> SelectionCacheType {
        self.cache_type
    }
}

impl<S, M, Inner: Debug> Debug for CachingMoveSelector<S, M, Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingMoveSelector")
            .field("inner", &self.inner)
            .field("cache_type", &self.cache_type)
            .field("cached", &self.cache.borrow().is_some())
            .finish()
    }
}

// SAFETY: the cache is only touched from the decision loop's single thread;
// the RefCell never crosses a thread boundary while borrowed.
unsafe impl<S, M: Send, Inner: Send> Send for CachingMoveSelector<S, M, Inner> {}

impl<S, M, Inner> SelectorLifecycle for CachingMoveSelector<S, M, Inner>
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

impl<S, M, Inner> MoveSelector<S, M> for CachingMoveSelector<S, M, Inner>
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
            let mut cache = self.cache.borrow_mut();
            if cache.is_none() {
                *cache = Some(self.inner.iter_moves(score_director, rng).collect());
            }
        }

        let cache = self.cache.borrow();
        let moves = cache.as_ref().map(Vec::clone).unwrap_or_default();
        Box::new(moves.into_iter())
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        let cache = self.cache.borrow();
        match cache.as_ref() {
            Some(moves) => moves.len(),
            None => self.inner.size(score_director),
        }
    }

    fn is_never_ending(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::r#move::ChangeMove;
    use crate::heuristic::selector::ChangeMoveSelector;
    use plancraft_test::nqueens::{create_nqueens_director, get_queen_row, set_queen_row};
    use plancraft_test::NQueensSolution;
    use rand::SeedableRng;

    fn change_selector(
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
    fn test_caches_moves_on_first_call() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let caching = CachingMoveSelector::new(change_selector(vec![10, 20, 30]), SelectionCacheType::Step);

        let moves1: Vec<_> = caching.iter_moves(&director, &mut rng).collect();
        let moves2: Vec<_> = caching.iter_moves(&director, &mut rng).collect();
        assert_eq!(moves1.len(), 3);
        assert_eq!(moves2.len(), 3);
        assert_eq!(moves1[0].to_value(), moves2[0].to_value());
    }

    #[test]
    fn test_step_scope_invalidates_at_step_start() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let mut caching =
            CachingMoveSelector::new(change_selector(vec![10, 20]), SelectionCacheType::Step);

        let _ = caching.iter_moves(&director, &mut rng).count();
        assert!(caching.cache.borrow().is_some());

        caching.step_started(&mut rng);
        assert!(caching.cache.borrow().is_none());
    }

    #[test]
    fn test_phase_scope_survives_steps() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let mut caching =
            CachingMoveSelector::new(change_selector(vec![10, 20]), SelectionCacheType::Phase);

        let _ = caching.iter_moves(&director, &mut rng).count();
        caching.step_started(&mut rng);
        assert!(caching.cache.borrow().is_some());

        caching.phase_started(&mut rng);
        assert!(caching.cache.borrow().is_none());
    }

    #[test]
    fn test_run_scope_never_invalidates() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let mut caching =
            CachingMoveSelector::new(change_selector(vec![10]), SelectionCacheType::Run);

        let _ = caching.iter_moves(&director, &mut rng).count();
        caching.step_started(&mut rng);
        caching.phase_started(&mut rng);
        assert!(caching.cache.borrow().is_some());
    }

    #[test]
    fn test_size_uses_cache_when_available() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let caching =
            CachingMoveSelector::new(change_selector(vec![10, 20, 30]), SelectionCacheType::Step);

        assert_eq!(caching.size(&director), 3);
        let _ = caching.iter_moves(&director, &mut rng).count();
        assert_eq!(caching.size(&director), 3);
    }

    #[derive(Debug)]
    struct NeverEndingSelector;

    impl SelectorLifecycle for NeverEndingSelector {}

    impl MoveSelector<NQueensSolution, ChangeMove<NQueensSolution, i64>> for NeverEndingSelector {
        fn iter_moves<'a, D: ScoreDirector<NQueensSolution>>(
            &'a self,
            _score_director: &D,
            _rng: &mut StdRng,
        ) -> Box<dyn Iterator<Item = ChangeMove<NQueensSolution, i64>> + 'a> {
            Box::new(std::iter::repeat(ChangeMove::new(
                0,
                Some(0),
                get_queen_row,
                set_queen_row,
                "row",
                0,
            )))
        }

        fn size<D: ScoreDirector<NQueensSolution>>(&self, _score_director: &D) -> usize {
            usize::MAX
        }

        fn is_never_ending(&self) -> bool {
            true
        }
    }

    #[test]
    #[should_panic(expected = "never-ending")]
    fn test_rejects_never_ending_inner_at_step_scope() {
        let _ = CachingMoveSelector::new(NeverEndingSelector, SelectionCacheType::Step);
    }

    #[test]
    #[should_panic(expected = "never-ending")]
    fn test_rejects_never_ending_inner_at_phase_scope() {
        let _ = CachingMoveSelector::new(NeverEndingSelector, SelectionCacheType::Phase);
    }

    #[test]
    #[should_panic(expected = "never-ending")]
    fn test_rejects_never_ending_inner_at_run_scope() {
        let _ = CachingMoveSelector::new(NeverEndingSelector, SelectionCacheType::Run);
    }
}
