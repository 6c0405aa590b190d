//! Union move selector decorator.

use std::fmt::Debug;
use std::marker::PhantomData;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use crate::heuristic::r#move::Move;
use crate::heuristic::selector::move_selector::MoveSelector;
use crate::heuristic::selector::SelectorLifecycle;

/// Concatenates two move selectors that produce the same move type.
///
/// Yields all of the first selector's moves, then all of the second's.
/// Wrap in a shuffling decorator to mix the two streams.
pub struct UnionMoveSelector<S, M, A, B> {
    first: A,
    second: B,
    _phantom: PhantomData<fn() -> (S, M)>,
}

impl<S, M, A, B> UnionMoveSelector<S, M, A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            _phantom: PhantomData,
        }
    }
}

impl<S, M, A: Debug, B: Debug> Debug for UnionMoveSelector<S, M, A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionMoveSelector")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<S, M, A, B> SelectorLifecycle for UnionMoveSelector<S, M, A, B>
where
    A: SelectorLifecycle,
    B: SelectorLifecycle,
{
    fn phase_started(&mut self, rng: &mut rand::rngs::StdRng) {
        self.first.phase_started(rng);
        self.second.phase_started(rng);
    }

    fn step_started(&mut self, rng: &mut rand::rngs::StdRng) {
        self.first.step_started(rng);
        self.second.step_started(rng);
    }

    fn step_ended(&mut self) {
        self.first.step_ended();
        self.second.step_ended();
    }

    fn phase_ended(&mut self) {
        self.first.phase_ended();
        self.second.phase_ended();
    }
}

impl<S, M, A, B> MoveSelector<S, M> for UnionMoveSelector<S, M, A, B>
where
    S: PlanningSolution,
    M: Move<S>,
    A: MoveSelector<S, M>,
    B: MoveSelector<S, M>,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        rng: &mut rand::rngs::StdRng,
    ) -> Box<dyn Iterator<Item = M> + 'a> {
        let first = self.first.iter_moves(score_director, rng);
        let second = self.second.iter_moves(score_director, rng);
        Box::new(first.chain(second))
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        self.first.size(score_director) + self.second.size(score_director)
    }

    fn is_never_ending(&self) -> bool {
        self.first.is_never_ending() || self.second.is_never_ending()
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

    fn selector(values: Vec<i64>) -> ChangeMoveSelector<
        NQueensSolution,
        i64,
        crate::heuristic::selector::FromSolutionEntitySelector,
        crate::heuristic::selector::StaticValueSelector<NQueensSolution, i64>,
    > {
        ChangeMoveSelector::simple(get_queen_row, set_queen_row, 0, "row", values)
    }

    #[test]
    fn test_concatenates_both_selections() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let union: UnionMoveSelector<NQueensSolution, ChangeMove<NQueensSolution, i64>, _, _> =
            UnionMoveSelector::new(selector(vec![1, 2]), selector(vec![3, 4, 5]));

        let values: Vec<_> = union
            .iter_moves(&director, &mut rng)
            .filter_map(|m| m.to_value().copied())
            .collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(union.size(&director), 5);
    }

    #[test]
    fn test_empty_first_leg() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let union: UnionMoveSelector<NQueensSolution, ChangeMove<NQueensSolution, i64>, _, _> =
            UnionMoveSelector::new(selector(vec![]), selector(vec![7]));

        let values: Vec<_> = union
            .iter_moves(&director, &mut rng)
            .filter_map(|m| m.to_value().copied())
            .collect();
        assert_eq!(values, vec![7]);
    }

    #[test]
    fn test_finite_when_both_legs_finite() {
        let union: UnionMoveSelector<NQueensSolution, ChangeMove<NQueensSolution, i64>, _, _> =
            UnionMoveSelector::new(selector(vec![1]), selector(vec![2]));

        assert!(!union.is_never_ending());
    }
}
