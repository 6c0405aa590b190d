//! Composite move: applies two child moves as one atomic candidate.

use std::fmt::Debug;
use std::marker::PhantomData;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;
use smallvec::SmallVec;

use super::Move;

/// A move that applies two child moves back to back.
///
/// Used by cartesian-product selectors to pair candidates from two move
/// streams into one atomic step candidate. The undo move applies the
/// children's inverses in reverse order.
pub struct CompositeMove<S, M1, M2> {
    first: M1,
    second: M2,
    entity_indices: SmallVec<[usize; 4]>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, M1, M2> CompositeMove<S, M1, M2>
where
    S: PlanningSolution,
    M1: Move<S>,
    M2: Move<S>,
{
    /// Creates a composite from two child moves.
    pub fn new(first: M1, second: M2) -> Self {
        let mut entity_indices = SmallVec::new();
        entity_indices.extend_from_slice(first.entity_indices());
        entity_indices.extend_from_slice(second.entity_indices());
        Self {
            first,
            second,
            entity_indices,
            _phantom: PhantomData,
        }
    }

    /// Returns the first child move.
    pub fn first(&self) -> &M1 {
        &self.first
    }

    /// Returns the second child move.
    pub fn second(&self) -> &M2 {
        &self.second
    }
}

impl<S, M1: Clone, M2: Clone> Clone for CompositeMove<S, M1, M2> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            entity_indices: self.entity_indices.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<S, M1: PartialEq, M2: PartialEq> PartialEq for CompositeMove<S, M1, M2> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<S, M1: Eq, M2: Eq> Eq for CompositeMove<S, M1, M2> {}

impl<S, M1: Debug, M2: Debug> Debug for CompositeMove<S, M1, M2> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMove")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<S, M1, M2> Move<S> for CompositeMove<S, M1, M2>
where
    S: PlanningSolution,
    M1: Move<S>,
    M2: Move<S>,
{
    type Undo = CompositeMove<S, M2::Undo, M1::Undo>;

    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        // Both children are applied unconditionally, so both must be doable.
        self.first.is_doable(score_director) && self.second.is_doable(score_director)
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Self::Undo {
        let undo_first = self.first.do_move(score_director);
        let undo_second = self.second.do_move(score_director);
        // Inverses run in reverse application order.
        CompositeMove::new(undo_second, undo_first)
    }

    fn entity_indices(&self) -> &[usize] {
        &self.entity_indices
    }

    fn descriptor_index(&self) -> usize {
        self.first.descriptor_index()
    }
}
