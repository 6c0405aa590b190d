// Move trait definition.

use std::fmt::Debug;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

// An atomic, reversible transformation of the working solution.
//
// A move changes one or more planning variables through the score director,
// so variable-change notifications fire around every mutation. Applying a
// move yields its typed inverse: applying that inverse restores the prior
// state exactly.
//
// Moves are transient. A selector constructs them fresh per candidate, the
// decision loop evaluates them speculatively, and all but the step's winner
// are discarded after their changes have been rolled back.
//
// Equality and hashing cover the move's identity (entities and target
// values), so caching selectors can deduplicate candidates.
pub trait Move<S: PlanningSolution>: Send + Clone + PartialEq + Debug + 'static {
    // The inverse move type returned by `do_move`.
    type Undo: Move<S>;

    // Checks whether this move can and should be applied to the current
    // working solution. A non-doable move is skipped without scoring.
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool;

    // Applies this move through the score director and returns its inverse.
    //
    // Implementations must wrap every variable mutation in
    // `before_variable_changed` / `after_variable_changed` and register an
    // undo closure via `ScoreDirector::register_undo`, so a recording
    // director can roll the change back without the caller touching the
    // returned inverse.
    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Self::Undo;

    // The entity indices this move touches.
    fn entity_indices(&self) -> &[usize];

    // The entity-collection descriptor this move operates on.
    fn descriptor_index(&self) -> usize;
}
