//! Filtering move selector decorator.

use std::fmt::Debug;
use std::marker::PhantomData;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use crate::heuristic::r#move::Move;
use crate::heuristic::selector::move_selector::MoveSelector;
use crate::heuristic::selector::SelectorLifecycle;

/// Yields only the inner selector's moves that pass a predicate.
///
/// Filtering is lazy: moves are tested as they are pulled, so it composes
/// with never-ending inner selectors. `size` reports the unfiltered count
/// because the pass rate is unknown without draining the selection.
pub struct FilteringMoveSelector<S, M, Inner> {
    inner: Inner,
    predicate: fn(&M) -> bool,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, M, Inner> FilteringMoveSelector<S, M, Inner> {
    pub fn new(inner: Inner, predicate: fn(&M) -> bool) -> Self {
        Self {
            inner,
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<S, M, Inner: Debug> Debug for FilteringMoveSelector<S, M, Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteringMoveSelector")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<S, M, Inner> SelectorLifecycle for FilteringMoveSelector<S, M, Inner>
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

impl<S, M, Inner> MoveSelector<S, M> for FilteringMoveSelector<S, M, Inner>
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
        let predicate = self.predicate;
        Box::new(
            self.inner
                .iter_moves(score_director, rng)
                .filter(move |m| predicate(m)),
        )
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        self.inner.size(score_director)
    }

    fn is_never_ending(&self) -> bool {
        self.inner.is_never_ending()
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

    fn even_value(m: &ChangeMove<NQueensSolution, i64>) -> bool {
        m.to_value().is_some_and(|v| v % 2 == 0)
    }

    fn selector(values: Vec<i64>) -> ChangeMoveSelector<
        NQueensSolution,
        i64,
        crate::heuristic::selector::FromSolutionEntitySelector,
        crate::heuristic::selector::StaticValueSelector<NQueensSolution, i64>,
    > {
        ChangeMoveSelector::simple(get_queen_row, set_queen_row, 0, "row", values)
    }

    #[test]
    fn test_drops_rejected_moves() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let filtering = FilteringMoveSelector::new(selector(vec![1, 2, 3, 4, 5]), even_value);

        let values: Vec<_> = filtering
            .iter_moves(&director, &mut rng)
            .filter_map(|m| m.to_value().copied())
            .collect();
        assert_eq!(values, vec![2, 4]);
    }

    #[test]
    fn test_size_reports_unfiltered_count() {
        let director = create_nqueens_director(&[0]);

        let filtering = FilteringMoveSelector::new(selector(vec![1, 2, 3, 4, 5]), even_value);

        assert_eq!(filtering.size(&director), 5);
    }

    #[test]
    fn test_all_rejected() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let filtering = FilteringMoveSelector::new(selector(vec![1, 3, 5]), even_value);

        assert_eq!(filtering.iter_moves(&director, &mut rng).count(), 0);
    }
}
