//! Change move: assigns one value to one entity's planning variable.

use std::fmt::Debug;
use std::slice;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use super::Move;

/// A move that changes a single planning variable to a new value.
///
/// Uses typed fn-pointer accessors, so the move stays `Copy`-cheap and the
/// undo path needs no downcasting.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `V` - The planning variable value type
pub struct ChangeMove<S, V> {
    entity_index: usize,
    to_value: Option<V>,
    getter: fn(&S, usize) -> Option<V>,
    setter: fn(&mut S, usize, Option<V>),
    variable_name: &'static str,
    descriptor_index: usize,
}

impl<S, V> ChangeMove<S, V> {
    /// Creates a new change move.
    pub fn new(
        entity_index: usize,
        to_value: Option<V>,
        getter: fn(&S, usize) -> Option<V>,
        setter: fn(&mut S, usize, Option<V>),
        variable_name: &'static str,
        descriptor_index: usize,
    ) -> Self {
        Self {
            entity_index,
            to_value,
            getter,
            setter,
            variable_name,
            descriptor_index,
        }
    }

    /// Returns the entity index this move targets.
    pub fn entity_index(&self) -> usize {
        self.entity_index
    }

    /// Returns the value this move assigns.
    pub fn to_value(&self) -> Option<&V> {
        self.to_value.as_ref()
    }

    /// Returns the variable name this move changes.
    pub fn variable_name(&self) -> &'static str {
        self.variable_name
    }
}

impl<S, V: Clone> Clone for ChangeMove<S, V> {
    fn clone(&self) -> Self {
        Self {
            entity_index: self.entity_index,
            to_value: self.to_value.clone(),
            getter: self.getter,
            setter: self.setter,
            variable_name: self.variable_name,
            descriptor_index: self.descriptor_index,
        }
    }
}

impl<S, V: Copy> Copy for ChangeMove<S, V> {}

// Identity covers the target entity, variable, and value. The accessor
// fn pointers are wiring, not identity.
impl<S, V: PartialEq> PartialEq for ChangeMove<S, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entity_index == other.entity_index
            && self.descriptor_index == other.descriptor_index
            && self.variable_name == other.variable_name
            && self.to_value == other.to_value
    }
}

impl<S, V: Eq> Eq for ChangeMove<S, V> {}

impl<S, V: std::hash::Hash> std::hash::Hash for ChangeMove<S, V> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.entity_index.hash(state);
        self.descriptor_index.hash(state);
        self.variable_name.hash(state);
        self.to_value.hash(state);
    }
}

impl<S, V: Debug> Debug for ChangeMove<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeMove")
            .field("entity_index", &self.entity_index)
            .field("variable_name", &self.variable_name)
            .field("to_value", &self.to_value)
            .finish()
    }
}

impl<S, V> Move<S> for ChangeMove<S, V>
where
    S: PlanningSolution,
    V: Clone + PartialEq + Debug + Send + 'static,
{
    type Undo = ChangeMove<S, V>;

    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        let current = (self.getter)(score_director.working_solution(), self.entity_index);
        match (&current, &self.to_value) {
            // Unassigning an unassigned variable is a no-op
            (None, None) => false,
            // Changing to the same value is a no-op
            (Some(cur), Some(target)) => cur != target,
            _ => true,
        }
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Self::Undo {
        let old_value = (self.getter)(score_director.working_solution(), self.entity_index);

        score_director.before_variable_changed(
            self.descriptor_index,
            self.entity_index,
            self.variable_name,
        );
        (self.setter)(
            score_director.working_solution_mut(),
            self.entity_index,
            self.to_value.clone(),
        );
        score_director.after_variable_changed(
            self.descriptor_index,
            self.entity_index,
            self.variable_name,
        );

        let entity_index = self.entity_index;
        let setter = self.setter;
        let undo_value = old_value.clone();
        score_director.register_undo(Box::new(move |solution: &mut S| {
            setter(solution, entity_index, undo_value);
        }));

        ChangeMove::new(
            self.entity_index,
            old_value,
            self.getter,
            self.setter,
            self.variable_name,
            self.descriptor_index,
        )
    }

    fn entity_indices(&self) -> &[usize] {
        slice::from_ref(&self.entity_index)
    }

    fn descriptor_index(&self) -> usize {
        self.descriptor_index
    }
}
