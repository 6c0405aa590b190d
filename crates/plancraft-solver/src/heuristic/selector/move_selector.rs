//! Move selectors: produce candidate moves for the decision loop.

use std::fmt::Debug;
use std::marker::PhantomData;

use rand::rngs::StdRng;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use crate::heuristic::r#move::{ChangeMove, Move, SwapMove};

use super::entity::{EntityReference, EntitySelector, FromSolutionEntitySelector};
use super::value::{StaticValueSelector, ValueSelector};
use super::SelectorLifecycle;

/// A typed move selector that yields moves of type `M` directly.
///
/// The director and random source are borrowed only for the duration of the
/// `iter_moves` call; the returned iterator borrows neither, so the decision
/// loop can mutate the director speculatively between pulls.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `M` - The move type
pub trait MoveSelector<S: PlanningSolution, M: Move<S>>:
    SelectorLifecycle + Send + Debug
{
    /// Returns an iterator over candidate moves.
    ///
    /// `rng` is the working random source; selectors that randomize their
    /// selection order draw from it here rather than keeping a stream of
    /// their own, so a fixed solver seed reproduces a run exactly.
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        rng: &mut StdRng,
    ) -> Box<dyn Iterator<Item = M> + 'a>;

    /// Returns the approximate number of moves.
    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize;

    /// Returns true if this selector may yield moves indefinitely.
    ///
    /// A never-ending selector requires a forager that can quit early.
    fn is_never_ending(&self) -> bool {
        false
    }
}

/// A move selector that generates [`ChangeMove`]s from an entity selector
/// crossed with a value selector.
///
/// Iteration is lazy: each entity is pulled from the entity selector only
/// when its first move is requested. A recording entity selector therefore
/// broadcasts the current entity before any of its moves are consumed,
/// which is what lets a replaying leg elsewhere in a composite selector
/// observe it in time.
pub struct ChangeMoveSelector<S, V, ES, VS> {
    entity_selector: ES,
    value_selector: VS,
    getter: fn(&S, usize) -> Option<V>,
    setter: fn(&mut S, usize, Option<V>),
    descriptor_index: usize,
    variable_name: &'static str,
    _phantom: PhantomData<(fn() -> S, fn() -> V)>,
}

impl<S, V: Debug, ES: Debug, VS: Debug> Debug for ChangeMoveSelector<S, V, ES, VS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeMoveSelector")
            .field("entity_selector", &self.entity_selector)
            .field("value_selector", &self.value_selector)
            .field("descriptor_index", &self.descriptor_index)
            .field("variable_name", &self.variable_name)
            .finish()
    }
}

impl<S: PlanningSolution, V: Clone, ES, VS> ChangeMoveSelector<S, V, ES, VS> {
    /// Creates a new change move selector.
    pub fn new(
        entity_selector: ES,
        value_selector: VS,
        getter: fn(&S, usize) -> Option<V>,
        setter: fn(&mut S, usize, Option<V>),
        descriptor_index: usize,
        variable_name: &'static str,
    ) -> Self {
        Self {
            entity_selector,
            value_selector,
            getter,
            setter,
            descriptor_index,
            variable_name,
            _phantom: PhantomData,
        }
    }
}

impl<S: PlanningSolution, V: Clone + Send + Debug + 'static>
    ChangeMoveSelector<S, V, FromSolutionEntitySelector, StaticValueSelector<S, V>>
{
    /// Creates a selector over all entities of one descriptor with a static
    /// value list.
    pub fn simple(
        getter: fn(&S, usize) -> Option<V>,
        setter: fn(&mut S, usize, Option<V>),
        descriptor_index: usize,
        variable_name: &'static str,
        values: Vec<V>,
    ) -> Self {
        Self {
            entity_selector: FromSolutionEntitySelector::new(descriptor_index),
            value_selector: StaticValueSelector::new(values),
            getter,
            setter,
            descriptor_index,
            variable_name,
            _phantom: PhantomData,
        }
    }
}

impl<S, V, ES, VS> SelectorLifecycle for ChangeMoveSelector<S, V, ES, VS>
where
    ES: SelectorLifecycle,
    VS: SelectorLifecycle,
{
    fn phase_started(&mut self, rng: &mut StdRng) {
        self.entity_selector.phase_started(rng);
        self.value_selector.phase_started(rng);
    }

    fn step_started(&mut self, rng: &mut StdRng) {
        self.entity_selector.step_started(rng);
        self.value_selector.step_started(rng);
    }

    fn step_ended(&mut self) {
        self.entity_selector.step_ended();
        self.value_selector.step_ended();
    }

    fn phase_ended(&mut self) {
        self.entity_selector.phase_ended();
        self.value_selector.phase_ended();
    }
}

impl<S, V, ES, VS> MoveSelector<S, ChangeMove<S, V>> for ChangeMoveSelector<S, V, ES, VS>
where
    S: PlanningSolution,
    V: Clone + PartialEq + Send + Sync + Debug + 'static,
    ES: EntitySelector<S>,
    VS: ValueSelector<S, V>,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        _rng: &mut StdRng,
    ) -> Box<dyn Iterator<Item = ChangeMove<S, V>> + 'a> {
        // Value iterators are created up front, while the director borrow is
        // live, but creating one has no selection side effect: recording and
        // replaying happen on pull. The zip below pulls the entity first, so
        // a recording entity selector has broadcast the current entity
        // before any of its values are drawn.
        let value_iters: Vec<_> = self
            .entity_selector
            .ending_iter(score_director)
            .map(|entity_ref| {
                self.value_selector.iter(
                    score_director,
                    entity_ref.descriptor_index,
                    entity_ref.entity_index,
                )
            })
            .collect();

        let getter = self.getter;
        let setter = self.setter;
        let variable_name = self.variable_name;
        let descriptor_index = self.descriptor_index;

        let entity_iter = self.entity_selector.iter(score_director);
        Box::new(entity_iter.zip(value_iters).flat_map(
            move |(entity_ref, values)| {
                let entity_index = entity_ref.entity_index;
                values.map(move |value| {
                    ChangeMove::new(
                        entity_index,
                        Some(value),
                        getter,
                        setter,
                        variable_name,
                        descriptor_index,
                    )
                })
            },
        ))
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        let entity_count = self.entity_selector.size(score_director);
        if entity_count == 0 {
            return 0;
        }

        match self.entity_selector.ending_iter(score_director).next() {
            Some(entity_ref) => {
                let value_count = self.value_selector.size(
                    score_director,
                    entity_ref.descriptor_index,
                    entity_ref.entity_index,
                );
                entity_count * value_count
            }
            None => 0,
        }
    }

    fn is_never_ending(&self) -> bool {
        self.entity_selector.is_never_ending() || self.value_selector.is_never_ending()
    }
}

/// A move selector that generates [`SwapMove`]s over pairs of entities.
pub struct SwapMoveSelector<S, V, LES, RES> {
    left_entity_selector: LES,
    right_entity_selector: RES,
    getter: fn(&S, usize) -> Option<V>,
    setter: fn(&mut S, usize, Option<V>),
    descriptor_index: usize,
    variable_name: &'static str,
    _phantom: PhantomData<(fn() -> S, fn() -> V)>,
}

impl<S, V, LES: Debug, RES: Debug> Debug for SwapMoveSelector<S, V, LES, RES> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapMoveSelector")
            .field("left_entity_selector", &self.left_entity_selector)
            .field("right_entity_selector", &self.right_entity_selector)
            .field("descriptor_index", &self.descriptor_index)
            .field("variable_name", &self.variable_name)
            .finish()
    }
}

impl<S: PlanningSolution, V, LES, RES> SwapMoveSelector<S, V, LES, RES> {
    /// Creates a new swap move selector.
    pub fn new(
        left_entity_selector: LES,
        right_entity_selector: RES,
        getter: fn(&S, usize) -> Option<V>,
        setter: fn(&mut S, usize, Option<V>),
        descriptor_index: usize,
        variable_name: &'static str,
    ) -> Self {
        Self {
            left_entity_selector,
            right_entity_selector,
            getter,
            setter,
            descriptor_index,
            variable_name,
            _phantom: PhantomData,
        }
    }
}

impl<S: PlanningSolution, V>
    SwapMoveSelector<S, V, FromSolutionEntitySelector, FromSolutionEntitySelector>
{
    /// Creates a selector swapping within a single entity collection.
    pub fn simple(
        getter: fn(&S, usize) -> Option<V>,
        setter: fn(&mut S, usize, Option<V>),
        descriptor_index: usize,
        variable_name: &'static str,
    ) -> Self {
        Self {
            left_entity_selector: FromSolutionEntitySelector::new(descriptor_index),
            right_entity_selector: FromSolutionEntitySelector::new(descriptor_index),
            getter,
            setter,
            descriptor_index,
            variable_name,
            _phantom: PhantomData,
        }
    }
}

impl<S, V, LES, RES> SelectorLifecycle for SwapMoveSelector<S, V, LES, RES>
where
    LES: SelectorLifecycle,
    RES: SelectorLifecycle,
{
    fn phase_started(&mut self, rng: &mut StdRng) {
        self.left_entity_selector.phase_started(rng);
        self.right_entity_selector.phase_started(rng);
    }

    fn step_started(&mut self, rng: &mut StdRng) {
        self.left_entity_selector.step_started(rng);
        self.right_entity_selector.step_started(rng);
    }

    fn step_ended(&mut self) {
        self.left_entity_selector.step_ended();
        self.right_entity_selector.step_ended();
    }

    fn phase_ended(&mut self) {
        self.left_entity_selector.phase_ended();
        self.right_entity_selector.phase_ended();
    }
}

impl<S, V, LES, RES> MoveSelector<S, SwapMove<S, V>> for SwapMoveSelector<S, V, LES, RES>
where
    S: PlanningSolution,
    V: Clone + PartialEq + Send + Sync + Debug + 'static,
    LES: EntitySelector<S>,
    RES: EntitySelector<S>,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        _rng: &mut StdRng,
    ) -> Box<dyn Iterator<Item = SwapMove<S, V>> + 'a> {
        let left_entities: Vec<EntityReference> =
            self.left_entity_selector.iter(score_director).collect();
        let right_entities: Vec<EntityReference> =
            self.right_entity_selector.iter(score_director).collect();

        // Triangular pairing: each unordered pair once.
        let mut moves = Vec::with_capacity(
            left_entities.len() * left_entities.len().saturating_sub(1) / 2,
        );
        for (i, left) in left_entities.iter().enumerate() {
            for right in right_entities.iter().skip(i + 1) {
                if left.descriptor_index == right.descriptor_index
                    && left.descriptor_index == self.descriptor_index
                {
                    moves.push(SwapMove::new(
                        left.entity_index,
                        right.entity_index,
                        self.getter,
                        self.setter,
                        self.variable_name,
                        self.descriptor_index,
                    ));
                }
            }
        }

        Box::new(moves.into_iter())
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        let left_count = self.left_entity_selector.size(score_director);
        let right_count = self.right_entity_selector.size(score_director);

        if left_count == right_count {
            left_count * left_count.saturating_sub(1) / 2
        } else {
            left_count * right_count / 2
        }
    }

    fn is_never_ending(&self) -> bool {
        self.left_entity_selector.is_never_ending()
            || self.right_entity_selector.is_never_ending()
    }
}
