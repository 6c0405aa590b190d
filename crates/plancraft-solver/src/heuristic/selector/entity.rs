//! Entity selectors for iterating over planning entities.

use std::fmt::Debug;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use super::SelectorLifecycle;

/// A reference to an entity within a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityReference {
    /// Index of the entity descriptor.
    pub descriptor_index: usize,
    /// Index of the entity within its collection.
    pub entity_index: usize,
}

impl EntityReference {
    /// Creates a new entity reference.
    pub fn new(descriptor_index: usize, entity_index: usize) -> Self {
        Self {
            descriptor_index,
            entity_index,
        }
    }
}

/// Trait for selecting entities from a planning solution.
///
/// Entity selectors provide an iteration order over the entities that the
/// solver will consider for moves. The director is only borrowed for the
/// duration of the `iter` call; the returned iterator holds a snapshot.
pub trait EntitySelector<S: PlanningSolution>: SelectorLifecycle + Send + Debug {
    /// Returns an iterator over entity references.
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
    ) -> Box<dyn Iterator<Item = EntityReference> + 'a>;

    /// Returns a finite iterator used solely for size queries.
    ///
    /// Recording selectors override this to bypass their side effects.
    fn ending_iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
    ) -> Box<dyn Iterator<Item = EntityReference> + 'a> {
        self.iter(score_director)
    }

    /// Returns the approximate number of entities.
    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize;

    /// Returns true if this selector may yield entities indefinitely.
    fn is_never_ending(&self) -> bool {
        false
    }
}

/// An entity selector that iterates over all entities of one descriptor.
#[derive(Debug, Clone)]
pub struct FromSolutionEntitySelector {
    descriptor_index: usize,
}

impl FromSolutionEntitySelector {
    /// Creates a new entity selector for the given descriptor index.
    pub fn new(descriptor_index: usize) -> Self {
        Self { descriptor_index }
    }

    /// Returns the descriptor index this selector draws from.
    pub fn descriptor_index(&self) -> usize {
        self.descriptor_index
    }
}

impl SelectorLifecycle for FromSolutionEntitySelector {}

impl<S: PlanningSolution> EntitySelector<S> for FromSolutionEntitySelector {
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
    ) -> Box<dyn Iterator<Item = EntityReference> + 'a> {
        let count = score_director
            .entity_count(self.descriptor_index)
            .unwrap_or(0);
        let descriptor_index = self.descriptor_index;

        Box::new((0..count).map(move |i| EntityReference::new(descriptor_index, i)))
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        score_director
            .entity_count(self.descriptor_index)
            .unwrap_or(0)
    }
}

/// An entity selector that iterates over all entities from all descriptors.
#[derive(Debug, Clone, Default)]
pub struct AllEntitiesSelector;

impl AllEntitiesSelector {
    /// Creates a new selector for all entities.
    pub fn new() -> Self {
        Self
    }
}

impl SelectorLifecycle for AllEntitiesSelector {}

impl<S: PlanningSolution> EntitySelector<S> for AllEntitiesSelector {
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
    ) -> Box<dyn Iterator<Item = EntityReference> + 'a> {
        let descriptor_count = score_director.solution_descriptor().entity_descriptors.len();

        let mut refs = Vec::new();
        for descriptor_index in 0..descriptor_count {
            let count = score_director.entity_count(descriptor_index).unwrap_or(0);
            for entity_index in 0..count {
                refs.push(EntityReference::new(descriptor_index, entity_index));
            }
        }

        Box::new(refs.into_iter())
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        score_director.total_entity_count().unwrap_or(0)
    }
}
