//! Mimic record/replay for value selectors.
//!
//! The value variant backs cartesian-product move selectors where several
//! legs of a composite move must see the same candidate value. It only
//! supports entity-independent value ranges: the replay contract ignores
//! the entity the iterator is requested for.

use std::fmt::Debug;
use std::marker::PhantomData;

use rand::rngs::StdRng;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use super::mimic::MimicRecorder;
use super::value::ValueSelector;
use super::SelectorLifecycle;

/// A value selector that records each yielded value for replay.
///
/// Construction fails with a descriptive panic if the child's value range
/// is entity-dependent, because replayers ignore the requesting entity.
pub struct MimicRecordingValueSelector<S, V, VS> {
    child: VS,
    recorder: MimicRecorder<V>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, V, VS> MimicRecordingValueSelector<S, V, VS>
where
    S: PlanningSolution,
    V: Clone,
    VS: ValueSelector<S, V>,
{
    /// Creates a new recording selector wrapping the given child selector.
    ///
    /// # Panics
    /// Panics if the child selector's value range is entity-dependent.
    pub fn new(child: VS, recorder: MimicRecorder<V>) -> Self {
        assert!(
            child.is_entity_independent(),
            "mimic recorder '{}' requires an entity-independent value selector, \
             but {:?} is entity-dependent",
            recorder.id(),
            child
        );
        Self {
            child,
            recorder,
            _phantom: PhantomData,
        }
    }

    /// Returns a handle for creating replaying selectors.
    pub fn recorder(&self) -> MimicRecorder<V> {
        self.recorder.clone()
    }

    /// Creates a replaying selector bound to this recorder.
    ///
    /// The replayer carries its own handle on the child selector so size
    /// queries answer from the full value range, not from replay state.
    pub fn replaying(&self) -> MimicReplayingValueSelector<S, V, VS>
    where
        VS: Clone,
    {
        MimicReplayingValueSelector::new(self.child.clone(), self.recorder.clone())
    }
}

impl<S, V, VS: Debug> Debug for MimicRecordingValueSelector<S, V, VS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MimicRecordingValueSelector")
            .field("child", &self.child)
            .field("recorder_id", &self.recorder.id())
            .finish()
    }
}

impl<S, V: Clone, VS: SelectorLifecycle> SelectorLifecycle
    for MimicRecordingValueSelector<S, V, VS>
{
    fn phase_started(&mut self, rng: &mut StdRng) {
        self.recorder.reset();
        self.child.phase_started(rng);
    }

    fn step_started(&mut self, rng: &mut StdRng) {
        // Recorded state survives step boundaries on purpose: a composite
        // move may be assembled across several entity placements.
        self.child.step_started(rng);
    }

    fn step_ended(&mut self) {
        self.child.step_ended();
    }

    fn phase_ended(&mut self) {
        self.child.phase_ended();
    }
}

// V: Sync is needed because the recorder handle is shared through an
// Arc, which the Send supertrait only tolerates for sync payloads.
impl<S, V, VS> ValueSelector<S, V> for MimicRecordingValueSelector<S, V, VS>
where
    S: PlanningSolution,
    V: Clone + Send + Sync + Debug + 'static,
    VS: ValueSelector<S, V>,
{
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        descriptor_index: usize,
        entity_index: usize,
    ) -> Box<dyn Iterator<Item = V> + 'a> {
        let recorder = self.recorder.clone();
        let inner = self.child.iter(score_director, descriptor_index, entity_index);
        Box::new(RecordingValueIter { inner, recorder })
    }

    // Size queries must not disturb the live recording state.
    fn ending_iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        descriptor_index: usize,
        entity_index: usize,
    ) -> Box<dyn Iterator<Item = V> + 'a> {
        self.child
            .ending_iter(score_director, descriptor_index, entity_index)
    }

    fn size<D: ScoreDirector<S>>(
        &self,
        score_director: &D,
        descriptor_index: usize,
        entity_index: usize,
    ) -> usize {
        self.child.size(score_director, descriptor_index, entity_index)
    }

    fn is_never_ending(&self) -> bool {
        self.child.is_never_ending()
    }
}

struct RecordingValueIter<'a, V: Clone> {
    inner: Box<dyn Iterator<Item = V> + 'a>,
    recorder: MimicRecorder<V>,
}

impl<'a, V: Clone> Iterator for RecordingValueIter<'a, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        match self.inner.next() {
            Some(value) => {
                self.recorder.record_next(value.clone());
                Some(value)
            }
            None => {
                self.recorder.record_has_next(false);
                None
            }
        }
    }
}

/// A value selector that replays the value recorded by its recorder.
///
/// Size queries delegate to the recording side's child selector, so the
/// reported count stays authoritative no matter how much has been replayed.
pub struct MimicReplayingValueSelector<S, V, VS> {
    child: VS,
    recorder: MimicRecorder<V>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, V, VS> MimicReplayingValueSelector<S, V, VS> {
    /// Creates a new replaying selector bound to the given recorder.
    ///
    /// `child` must be the recording selector's child selector, or a clone
    /// of it; it answers size queries and is never iterated for selection.
    pub fn new(child: VS, recorder: MimicRecorder<V>) -> Self {
        Self {
            child,
            recorder,
            _phantom: PhantomData,
        }
    }
}

impl<S, V, VS: Debug> Debug for MimicReplayingValueSelector<S, V, VS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MimicReplayingValueSelector")
            .field("child", &self.child)
            .field("recorder_id", &self.recorder.id())
            .finish()
    }
}

// Lifecycle is driven through the recording selector, which owns the live
// child; the replayer's handle is only consulted for size queries.
impl<S, V, VS> SelectorLifecycle for MimicReplayingValueSelector<S, V, VS> {}

// V: Sync for the same reason as on the recording selector.
impl<S, V, VS> ValueSelector<S, V> for MimicReplayingValueSelector<S, V, VS>
where
    S: PlanningSolution,
    V: Clone + Send + Sync + Debug + 'static,
    VS: ValueSelector<S, V>,
{
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        _score_director: &D,
        _descriptor_index: usize,
        _entity_index: usize,
    ) -> Box<dyn Iterator<Item = V> + 'a> {
        Box::new(ReplayingValueIter {
            recorder: self.recorder.clone(),
            returned_position: 0,
        })
    }

    fn ending_iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
        descriptor_index: usize,
        entity_index: usize,
    ) -> Box<dyn Iterator<Item = V> + 'a> {
        self.child
            .ending_iter(score_director, descriptor_index, entity_index)
    }

    fn size<D: ScoreDirector<S>>(
        &self,
        score_director: &D,
        descriptor_index: usize,
        entity_index: usize,
    ) -> usize {
        self.child.size(score_director, descriptor_index, entity_index)
    }
}

struct ReplayingValueIter<V: Clone> {
    recorder: MimicRecorder<V>,
    returned_position: u64,
}

impl<V: Clone> Iterator for ReplayingValueIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.recorder.replay(&mut self.returned_position)
    }
}
