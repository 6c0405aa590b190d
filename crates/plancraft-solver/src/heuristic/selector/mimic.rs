//! Mimic selectors for synchronized selection across multiple selectors.
//!
//! A recording selector wraps a child selector and broadcasts its iteration
//! through a shared recorder, so any number of replaying selectors observe
//! "the same entity being considered right now" without re-running the
//! child. The protocol is strictly record-before-replay: a replayer asked
//! for a value before the recorder produced one fails loudly.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

use rand::rngs::StdRng;

use plancraft_core::domain::PlanningSolution;
use plancraft_scoring::ScoreDirector;

use super::entity::{EntityReference, EntitySelector};
use super::SelectorLifecycle;

/// What the recorder currently knows about the child iteration.
#[derive(Debug, Clone, PartialEq)]
enum Recording<T> {
    /// Nothing recorded yet for this phase.
    NotYetRecorded,
    /// The child's exhaustion state is known but no value was produced.
    HasNextKnown { has_next: bool },
    /// A value was produced at the given position (1-based).
    NextKnown { value: T, position: u64 },
}

#[derive(Debug)]
struct MimicState<T> {
    recording: Recording<T>,
    /// Count of values recorded since the last reset.
    position: u64,
}

impl<T> Default for MimicState<T> {
    fn default() -> Self {
        Self {
            recording: Recording::NotYetRecorded,
            position: 0,
        }
    }
}

/// Shared handle between one recording selector and its replaying selectors.
///
/// Registering a replayer is just cloning this handle; registration order
/// has no effect on correctness.
#[derive(Debug)]
pub struct MimicRecorder<T> {
    state: Arc<RwLock<MimicState<T>>>,
    id: Arc<str>,
}

impl<T> Clone for MimicRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            id: Arc::clone(&self.id),
        }
    }
}

impl<T> MimicRecorder<T> {
    /// Creates a new mimic recorder with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(MimicState::default())),
            id: id.into().into(),
        }
    }

    /// Records the child iterator's exhaustion state.
    pub fn record_has_next(&self, has_next: bool) {
        let mut state = self.state.write().unwrap();
        state.recording = Recording::HasNextKnown { has_next };
    }

    /// Records a value produced by the child iterator.
    pub fn record_next(&self, value: T) {
        let mut state = self.state.write().unwrap();
        state.position += 1;
        let position = state.position;
        state.recording = Recording::NextKnown { value, position };
    }

    /// Returns the identifier of this recorder.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Clears all recorded state. Called at phase boundaries.
    pub fn reset(&self) {
        *self.state.write().unwrap() = MimicState::default();
    }
}

impl<T: Clone> MimicRecorder<T> {
    /// Returns the last recorded value, if any.
    pub fn recorded_value(&self) -> Option<T> {
        let state = self.state.read().unwrap();
        match &state.recording {
            Recording::NextKnown { value, .. } => Some(value.clone()),
            _ => None,
        }
    }

    pub(crate) fn replay(&self, returned_position: &mut u64) -> Option<T> {
        let state = self.state.read().unwrap();
        match &state.recording {
            Recording::NotYetRecorded => panic!(
                "no recording found for mimic recorder '{}': the recording selector \
                 must be iterated before the replaying selector",
                self.id
            ),
            Recording::HasNextKnown { has_next: false } => None,
            Recording::HasNextKnown { has_next: true } => panic!(
                "record_has_next(true) was recorded for mimic recorder '{}' but \
                 record_next was never called: advance the recording iterator before \
                 using the replaying selector",
                self.id
            ),
            Recording::NextKnown { value, position } => {
                // One delivery per recorded position and per replay iterator
                if *returned_position == *position {
                    None
                } else {
                    *returned_position = *position;
                    Some(value.clone())
                }
            }
        }
    }
}

/// Iterator adapter that broadcasts every element to the recorder.
struct RecordingIter<'a, T: Clone> {
    inner: Box<dyn Iterator<Item = T> + 'a>,
    recorder: MimicRecorder<T>,
}

impl<'a, T: Clone> Iterator for RecordingIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
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

/// Iterator that replays the value most recently recorded.
struct ReplayingIter<T: Clone> {
    recorder: MimicRecorder<T>,
    returned_position: u64,
}

impl<T: Clone> Iterator for ReplayingIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.recorder.replay(&mut self.returned_position)
    }
}

/// An entity selector that records each selected entity for replay.
pub struct MimicRecordingEntitySelector<S, ES> {
    child: ES,
    recorder: MimicRecorder<EntityReference>,
    _phantom: PhantomData<fn() -> S>,
}

impl<S, ES> MimicRecordingEntitySelector<S, ES> {
    /// Creates a new recording selector wrapping the given child selector.
    pub fn new(child: ES, recorder: MimicRecorder<EntityReference>) -> Self {
        Self {
            child,
            recorder,
            _phantom: PhantomData,
        }
    }

    /// Returns a handle for creating replaying selectors.
    pub fn recorder(&self) -> MimicRecorder<EntityReference> {
        self.recorder.clone()
    }

    /// Creates a replaying selector bound to this recorder.
    ///
    /// The replayer carries its own handle on the child selector so size
    /// queries answer from the full selection, not from replay state.
    pub fn replaying(&self) -> MimicReplayingEntitySelector<ES>
    where
        ES: Clone,
    {
        MimicReplayingEntitySelector::new(self.child.clone(), self.recorder.clone())
    }
}

impl<S, ES: Debug> Debug for MimicRecordingEntitySelector<S, ES> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MimicRecordingEntitySelector")
            .field("child", &self.child)
            .field("recorder_id", &self.recorder.id())
            .finish()
    }
}

impl<S, ES: SelectorLifecycle> SelectorLifecycle for MimicRecordingEntitySelector<S, ES> {
    fn phase_started(&mut self, rng: &mut StdRng) {
        self.recorder.reset();
        self.child.phase_started(rng);
    }

    fn step_started(&mut self, rng: &mut StdRng) {
        self.child.step_started(rng);
    }

    fn step_ended(&mut self) {
        self.child.step_ended();
    }

    fn phase_ended(&mut self) {
        self.child.phase_ended();
    }
}

impl<S, ES> EntitySelector<S> for MimicRecordingEntitySelector<S, ES>
where
    S: PlanningSolution,
    ES: EntitySelector<S>,
{
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
    ) -> Box<dyn Iterator<Item = EntityReference> + 'a> {
        Box::new(RecordingIter {
            inner: self.child.iter(score_director),
            recorder: self.recorder.clone(),
        })
    }

    // Size queries must not disturb the live recording state.
    fn ending_iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
    ) -> Box<dyn Iterator<Item = EntityReference> + 'a> {
        self.child.ending_iter(score_director)
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        self.child.size(score_director)
    }

    fn is_never_ending(&self) -> bool {
        self.child.is_never_ending()
    }
}

/// An entity selector that replays the entity recorded by its recorder.
///
/// Each `iter` call yields the currently recorded entity exactly once, or
/// nothing if the recording iterator is exhausted. Size queries delegate to
/// the recording side's child selector, so the reported count stays
/// authoritative no matter how much has been replayed.
pub struct MimicReplayingEntitySelector<ES> {
    child: ES,
    recorder: MimicRecorder<EntityReference>,
}

impl<ES> MimicReplayingEntitySelector<ES> {
    /// Creates a new replaying selector bound to the given recorder.
    ///
    /// `child` must be the recording selector's child selector, or a clone
    /// of it; it answers size queries and is never iterated for selection.
    pub fn new(child: ES, recorder: MimicRecorder<EntityReference>) -> Self {
        Self { child, recorder }
    }
}

impl<ES: Debug> Debug for MimicReplayingEntitySelector<ES> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MimicReplayingEntitySelector")
            .field("child", &self.child)
            .field("recorder_id", &self.recorder.id())
            .finish()
    }
}

// Lifecycle is driven through the recording selector, which owns the live
// child; the replayer's handle is only consulted for size queries.
impl<ES> SelectorLifecycle for MimicReplayingEntitySelector<ES> {}

impl<S, ES> EntitySelector<S> for MimicReplayingEntitySelector<ES>
where
    S: PlanningSolution,
    ES: EntitySelector<S>,
{
    fn iter<'a, D: ScoreDirector<S>>(
        &'a self,
        _score_director: &D,
    ) -> Box<dyn Iterator<Item = EntityReference> + 'a> {
        Box::new(ReplayingIter {
            recorder: self.recorder.clone(),
            returned_position: 0,
        })
    }

    fn ending_iter<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &D,
    ) -> Box<dyn Iterator<Item = EntityReference> + 'a> {
        self.child.ending_iter(score_director)
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        self.child.size(score_director)
    }
}
