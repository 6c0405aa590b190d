//! Swap move: exchanges the values of two entities' planning variables.

use std::fmt::Debug;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use super::Move;

/// A move that swaps the variable values of two entities.
///
/// Both entities must belong to the same entity collection. A swap is its
/// own inverse: applying the returned undo move exchanges the values back.
pub struct SwapMove<S, V> {
    indices: [usize; 2],
    getter: fn(&S, usize) -> Option<V>,
    setter: fn(&mut S, usize, Option<V>),
    variable_name: &'static str,
    descriptor_index: usize,
}

impl<S, V> SwapMove<S, V> {
    /// Creates a new swap move between two entity indices.
    pub fn new(
        left_index: usize,
        right_index: usize,
        getter: fn(&S, usize) -> Option<V>,
        setter: fn(&mut S, usize, Option<V>),
        variable_name: &'static str,
        descriptor_index: usize,
    ) -> Self {
        Self {
            indices: [left_index, right_index],
            getter,
            setter,
            variable_name,
            descriptor_index,
        }
    }

    /// Returns the left entity index.
    pub fn left_index(&self) -> usize {
        self.indices[0]
    }

    /// Returns the right entity index.
    pub fn right_index(&self) -> usize {
        self.indices[1]
    }
}

impl<S, V> Clone for SwapMove<S, V> {
    fn clone(&self) -> Self {
        Self {
            indices: self.indices,
            getter: self.getter,
            setter: self.setter,
            variable_name: self.variable_name,
            descriptor_index: self.descriptor_index,
        }
    }
}

impl<S, V> Copy for SwapMove<S, V> {}

impl<S, V> PartialEq for SwapMove<S, V> {
    fn eq(&self, other: &Self) -> bool {
        self.indices == other.indices
            && self.descriptor_index == other.descriptor_index
            && self.variable_name == other.variable_name
    }
}

impl<S, V> Eq for SwapMove<S, V> {}

impl<S, V> std::hash::Hash for SwapMove<S, V> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.indices.hash(state);
        self.descriptor_index.hash(state);
        self.variable_name.hash(state);
    }
}

impl<S, V> Debug for SwapMove<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapMove")
            .field("left_index", &self.indices[0])
            .field("right_index", &self.indices[1])
            .field("variable_name", &self.variable_name)
            .finish()
    }
}

impl<S, V> Move<S> for SwapMove<S, V>
where
    S: PlanningSolution,
    V: Clone + PartialEq + Debug + Send + 'static,
{
    type Undo = SwapMove<S, V>;

    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        let [left, right] = self.indices;
        if left == right {
            return false;
        }
        let solution = score_director.working_solution();
        // Swapping equal values changes nothing
        (self.getter)(solution, left) != (self.getter)(solution, right)
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Self::Undo {
        let [left, right] = self.indices;
        let old_left = (self.getter)(score_director.working_solution(), left);
        let old_right = (self.getter)(score_director.working_solution(), right);

        score_director.before_variable_changed(self.descriptor_index, left, self.variable_name);
        score_director.before_variable_changed(self.descriptor_index, right, self.variable_name);

        (self.setter)(score_director.working_solution_mut(), left, old_right.clone());
        (self.setter)(score_director.working_solution_mut(), right, old_left.clone());

        score_director.after_variable_changed(self.descriptor_index, left, self.variable_name);
        score_director.after_variable_changed(self.descriptor_index, right, self.variable_name);

        let setter = self.setter;
        score_director.register_undo(Box::new(move |solution: &mut S| {
            setter(solution, left, old_left);
            setter(solution, right, old_right);
        }));

        *self
    }

    fn entity_indices(&self) -> &[usize] {
        &self.indices
    }

    fn descriptor_index(&self) -> usize {
        self.descriptor_index
    }
}
