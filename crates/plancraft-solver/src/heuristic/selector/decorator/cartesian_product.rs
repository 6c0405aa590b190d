//! Cartesian product move selector decorator.

use std::fmt::Debug;
use std::marker::PhantomData;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use crate::heuristic::r#move::{CompositeMove, Move};
use crate::heuristic::selector::move_selector::MoveSelector;
use crate::heuristic::selector::SelectorLifecycle;

/// Pairs every move of the left selector with every move of the right
/// selector into a [`CompositeMove`].
///
/// The right selection is re-drawn for each left move, so right-leg state
/// that depends on the left pull (a replaying selector, for instance) sees
/// the current left candidate.
pub struct CartesianProductMoveSelector<S, M1, M2, A, B> {
    left: A,
    right: B,
    _phantom: PhantomData<fn() -> (S, M1, M2)>,
}

impl<S, M1, M2, A, B> CartesianProductMoveSelector<S, M1, M2, A, B> {
    /// Creates a new cartesian product selector.
    ///
    /// # Panics
    /// Panics if either child is never-ending: the product is materialized
    /// in full, so both legs must terminate.
    pub fn new(left: A, right: B) -> Self
    where
        S: PlanningSolution,
        M1: Move<S>,
        M2: Move<S>,
        A: MoveSelector<S, M1>,
        B: MoveSelector<S, M2>,
    {
        assert!(
            !left.is_never_ending(),
            "cartesian product cannot include the never-ending selector {:?}",
            left
        );
        assert!(
            !right.is_never_ending(),
            "cartesian product cannot include the never-ending selector {:?}",
            right
        );
        Self {
            left,
            right,
            _phantom: PhantomData,
        }
    }
}

impl<S, M1, M2, A: Debug, B: Debug> Debug for CartesianProductMoveSelector<S, M1, M2, A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartesianProductMoveSelector")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<S, M1, M2, A, B> SelectorLifecycle for CartesianProductMoveSelector<S, M1, M2, A, B>
where
    A: SelectorLifecycle,
    B: SelectorLifecycle,
{
    fn phase_started(&mut self, rng: &mut rand::rngs::StdRng) {
        self.left.phase_started(rng);
        self.right.phase_started(rng);
    }

    fn step_started(&mut self, rng: &mut rand::rngs::StdRng) {
        self.left.step_started(rng);
        self.right.step_started(rng);
    }

    fn step_ended(&mut self) {
        self.left.step_ended();
        self.right.step_ended();
    }

    fn phase_ended(&mut self) {
        self.left.phase_ended();
        self.right.phase_ended();
    }
}

impl<S, M1, M2, A, B> MoveSelector<S, CompositeMove<S, M1, M2>>
    for CartesianProductMoveSelector<S, M1, M2, A, B>
where
    S: PlanningSolution,
    M1: Move<S>,
    M2: Move<S>,
    A: MoveSelector<S, M1>,
    B: MoveSelector<S, M2>,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        rng: &mut rand::rngs::StdRng,
    ) -> Box<dyn Iterator<Item = CompositeMove<S, M1, M2>> + 'a> {
        let mut pairs = Vec::new();

        // The left iterator is pulled one move at a time and the right
        // selection is rebuilt after each pull, so a recording left leg has
        // broadcast its current position before the replaying right leg
        // reads it.
        let mut left_iter = self.left.iter_moves(score_director, rng);
        while let Some(left_move) = left_iter.next() {
            for right_move in self.right.iter_moves(score_director, rng) {
                pairs.push(CompositeMove::new(left_move.clone(), right_move));
            }
        }

        Box::new(pairs.into_iter())
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        self.left
            .size(score_director)
            .saturating_mul(self.right.size(score_director))
    }

    fn is_never_ending(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::selector::{
        ChangeMoveSelector, FromSolutionEntitySelector, MimicRecorder,
        MimicRecordingEntitySelector, MimicRecordingValueSelector, StaticValueSelector,
    };
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
    fn test_pairs_every_left_with_every_right() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let product =
            CartesianProductMoveSelector::new(selector(vec![1, 2]), selector(vec![10, 20, 30]));

        let pairs: Vec<_> = product
            .iter_moves(&director, &mut rng)
            .map(|c| {
                (
                    c.first().to_value().copied(),
                    c.second().to_value().copied(),
                )
            })
            .collect();

        assert_eq!(
            pairs,
            vec![
                (Some(1), Some(10)),
                (Some(1), Some(20)),
                (Some(1), Some(30)),
                (Some(2), Some(10)),
                (Some(2), Some(20)),
                (Some(2), Some(30)),
            ]
        );
        assert_eq!(product.size(&director), 6);
    }

    #[test]
    fn test_empty_leg_yields_nothing() {
        let director = create_nqueens_director(&[0]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let product = CartesianProductMoveSelector::new(selector(vec![]), selector(vec![1, 2]));

        assert_eq!(product.iter_moves(&director, &mut rng).count(), 0);
        assert_eq!(product.size(&director), 0);
    }

    #[test]
    fn test_composite_spans_both_entities() {
        let director = create_nqueens_director(&[0, 1]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let product = CartesianProductMoveSelector::new(selector(vec![5]), selector(vec![7]));

        let composites: Vec<_> = product.iter_moves(&director, &mut rng).collect();
        // 2 entities per leg, 1 value per leg
        assert_eq!(composites.len(), 4);
        assert_eq!(composites[0].entity_indices(), &[0, 0]);
        assert_eq!(composites[1].entity_indices(), &[0, 1]);
    }

    #[test]
    fn test_entity_mimic_pair_keeps_both_legs_on_one_entity() {
        let director = create_nqueens_director(&[0, 1]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let recorder = MimicRecorder::new("entity");
        let recording: MimicRecordingEntitySelector<NQueensSolution, _> =
            MimicRecordingEntitySelector::new(FromSolutionEntitySelector::new(0), recorder);
        let replaying = recording.replaying();

        let left = ChangeMoveSelector::<NQueensSolution, i64, _, _>::new(
            recording,
            StaticValueSelector::new(vec![5]),
            get_queen_row,
            set_queen_row,
            0,
            "row",
        );
        let right = ChangeMoveSelector::<NQueensSolution, i64, _, _>::new(
            replaying,
            StaticValueSelector::new(vec![7]),
            get_queen_row,
            set_queen_row,
            0,
            "row",
        );

        let product = CartesianProductMoveSelector::new(left, right);
        let composites: Vec<_> = product.iter_moves(&director, &mut rng).collect();

        // One composite per recorded entity, with both legs on that entity
        assert_eq!(composites.len(), 2);
        assert_eq!(composites[0].entity_indices(), &[0, 0]);
        assert_eq!(composites[1].entity_indices(), &[1, 1]);
    }

    #[test]
    fn test_value_mimic_pair_keeps_both_legs_on_one_value() {
        let director = create_nqueens_director(&[0, 1]);
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        let recorder = MimicRecorder::new("row");
        let recording: MimicRecordingValueSelector<NQueensSolution, i64, _> =
            MimicRecordingValueSelector::new(StaticValueSelector::new(vec![3, 4]), recorder);
        let replaying = recording.replaying();

        let left = ChangeMoveSelector::<NQueensSolution, i64, _, _>::new(
            FromSolutionEntitySelector::new(0),
            recording,
            get_queen_row,
            set_queen_row,
            0,
            "row",
        );
        let right = ChangeMoveSelector::<NQueensSolution, i64, _, _>::new(
            FromSolutionEntitySelector::new(0),
            replaying,
            get_queen_row,
            set_queen_row,
            0,
            "row",
        );

        let product = CartesianProductMoveSelector::new(left, right);
        let composites: Vec<_> = product.iter_moves(&director, &mut rng).collect();

        // 2 entities x 2 recorded values on the left, 2 replay entities on
        // the right, and the right leg always carries the recorded value
        assert_eq!(composites.len(), 8);
        for composite in &composites {
            assert_eq!(
                composite.first().to_value(),
                composite.second().to_value()
            );
        }
    }
}
