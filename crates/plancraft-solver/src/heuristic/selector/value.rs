//! Value selectors for iterating over candidate variable values.

use std::fmt::Debug;
use std::marker::PhantomData;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use super::SelectorLifecycle;

/// A typed value selector that yields candidate values for a variable.
///
/// Values are yielded as `V` directly, with no erasure. The director is
/// borrowed only for the duration of the `iter` call.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `V` - The value type
pub trait ValueSelector<S: PlanningSolution, V>: SelectorLifecycle + Send + Debug {
    /// Returns an iterator over values for the given entity.
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        descriptor_index: usize,
        entity_index: usize,
    ) -> Box<dyn Iterator<Item = V> + 'a>;

    /// Returns a finite iterator used solely for size queries.
    ///
    /// Recording selectors override this to bypass their side effects.
    fn ending_iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        descriptor_index: usize,
        entity_index: usize,
    ) -> Box<dyn Iterator<Item = V> + 'a> {
        self.iter(score_director, descriptor_index, entity_index)
    }

    /// Returns the number of values for the given entity.
    fn size<D: ScoreDirector<S>>(
        &self,
        score_director: &D,
        descriptor_index: usize,
        entity_index: usize,
    ) -> usize;

    /// Returns true if this selector may yield values indefinitely.
    fn is_never_ending(&self) -> bool {
        false
    }

    /// Returns true if the value range does not depend on the entity
    /// the iterator is requested for.
    ///
    /// Entity-dependent implementations must override this; replaying
    /// value selectors refuse entity-dependent children at construction.
    fn is_entity_independent(&self) -> bool {
        true
    }
}

/// A value selector with a static list of values.
pub struct StaticValueSelector<S, V> {
    values: Vec<V>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, V: Clone> Clone for StaticValueSelector<S, V> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<S, V: Debug> Debug for StaticValueSelector<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticValueSelector")
            .field("values", &self.values)
            .finish()
    }
}

impl<S, V: Clone> StaticValueSelector<S, V> {
    /// Creates a new static value selector with the given values.
    pub fn new(values: Vec<V>) -> Self {
        Self {
            values,
            _phantom: PhantomData,
        }
    }

    /// Returns the values.
    pub fn values(&self) -> &[V] {
        &self.values
    }
}

impl<S, V> SelectorLifecycle for StaticValueSelector<S, V> {}

impl<S, V> ValueSelector<S, V> for StaticValueSelector<S, V>
where
    S: PlanningSolution,
    V: Clone + Send + Debug + 'static,
{
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        _score_director: &D,
        _descriptor_index: usize,
        _entity_index: usize,
    ) -> Box<dyn Iterator<Item = V> + 'a> {
        Box::new(self.values.iter().cloned())
    }

    fn size<D: ScoreDirector<S>>(
        &self,
        _score_director: &D,
        _descriptor_index: usize,
        _entity_index: usize,
    ) -> usize {
        self.values.len()
    }
}

/// A value selector that extracts values from the solution with a function
/// pointer, snapshotting them at iteration time.
pub struct FromSolutionValueSelector<S, V> {
    extractor: fn(&S) -> Vec<V>,
    _phantom: PhantomData<(fn() -> S, fn() -> V)>,
}

impl<S, V> Clone for FromSolutionValueSelector<S, V> {
    fn clone(&self) -> Self {
        Self {
            extractor: self.extractor,
            _phantom: PhantomData,
        }
    }
}

impl<S, V> Debug for FromSolutionValueSelector<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromSolutionValueSelector").finish()
    }
}

impl<S, V> FromSolutionValueSelector<S, V> {
    /// Creates a new selector with the given extractor function pointer.
    pub fn new(extractor: fn(&S) -> Vec<V>) -> Self {
        Self {
            extractor,
            _phantom: PhantomData,
        }
    }
}

impl<S, V> SelectorLifecycle for FromSolutionValueSelector<S, V> {}

impl<S, V> ValueSelector<S, V> for FromSolutionValueSelector<S, V>
where
    S: PlanningSolution,
    V: Clone + Send + Debug + 'static,
{
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        _descriptor_index: usize,
        _entity_index: usize,
    ) -> Box<dyn Iterator<Item = V> + 'a> {
        let values = (self.extractor)(score_director.working_solution());
        Box::new(values.into_iter())
    }

    fn size<D: ScoreDirector<S>>(
        &self,
        score_director: &D,
        _descriptor_index: usize,
        _entity_index: usize,
    ) -> usize {
        (self.extractor)(score_director.working_solution()).len()
    }
}

/// A value selector that yields the range `0..count`, with the count read
/// from the solution at iteration time.
pub struct RangeValueSelector<S> {
    count_fn: fn(&S) -> usize,
    _phantom: PhantomData<fn() -> S>,
}

impl<S> Clone for RangeValueSelector<S> {
    fn clone(&self) -> Self {
        Self {
            count_fn: self.count_fn,
            _phantom: PhantomData,
        }
    }
}

impl<S> Debug for RangeValueSelector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeValueSelector").finish()
    }
}

impl<S> RangeValueSelector<S> {
    /// Creates a new range value selector with the given count function.
    pub fn new(count_fn: fn(&S) -> usize) -> Self {
        Self {
            count_fn,
            _phantom: PhantomData,
        }
    }
}

impl<S> SelectorLifecycle for RangeValueSelector<S> {}

impl<S> ValueSelector<S, usize> for RangeValueSelector<S>
where
    S: PlanningSolution,
{
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        _descriptor_index: usize,
        _entity_index: usize,
    ) -> Box<dyn Iterator<Item = usize> + 'a> {
        let count = (self.count_fn)(score_director.working_solution());
        Box::new(0..count)
    }

    fn size<D: ScoreDirector<S>>(
        &self,
        score_director: &D,
        _descriptor_index: usize,
        _entity_index: usize,
    ) -> usize {
        (self.count_fn)(score_director.working_solution())
    }
}
