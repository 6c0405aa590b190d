// Recording score director for automatic undo tracking.
//
// Wraps an existing score director and stores the undo closures that moves
// register while they execute:
//
// ```text
// let mut recording = RecordingScoreDirector::new(&mut inner);
// a_move.do_move(&mut recording);    // move registers its undo closures
// let score = recording.calculate_score();
// recording.undo_changes();          // closures run in reverse order
// ```
//
// Moves capture old values through typed getters, so the undo path needs no
// boxed values and no downcasting.

use std::any::Any;

use plancraft_core::domain::{PlanningSolution, SolutionDescriptor};

use super::ScoreDirector;

// A score director wrapper that stacks undo closures.
//
// # Example
//
// ```
// use plancraft_scoring::{RecordingScoreDirector, SimpleScoreDirector, ScoreDirector};
// use plancraft_core::domain::{PlanningSolution, SolutionDescriptor};
// use plancraft_core::score::SimpleScore;
// use std::any::TypeId;
//
// #[derive(Clone)]
// struct Solution { value: i32, score: Option<SimpleScore> }
//
// impl PlanningSolution for Solution {
//     type Score = SimpleScore;
//     fn score(&self) -> Option<Self::Score> { self.score }
//     fn set_score(&mut self, score: Option<Self::Score>) { self.score = score; }
// }
//
// let mut sd = SimpleScoreDirector::new(
//     Solution { value: 10, score: None },
//     SolutionDescriptor::new("Solution", TypeId::of::<Solution>()),
//     |s: &Solution| SimpleScore::of(s.value as i64),
// );
//
// let mut recording = RecordingScoreDirector::new(&mut sd);
//
// let old_value = recording.working_solution().value;
// recording.working_solution_mut().value = 20;
// recording.register_undo(Box::new(move |s| s.value = old_value));
// assert_eq!(recording.working_solution().value, 20);
//
// recording.undo_changes();
// assert_eq!(recording.working_solution().value, 10);
// ```
pub struct RecordingScoreDirector<'a, S: PlanningSolution> {
    inner: &'a mut dyn ScoreDirector<S>,
    // Undo closures registered by moves, popped LIFO.
    undo_stack: Vec<Box<dyn FnOnce(&mut S) + Send>>,
    // (descriptor_index, entity_index) pairs touched during this step.
    modified_entities: Vec<(usize, usize)>,
}

impl<'a, S: PlanningSolution> RecordingScoreDirector<'a, S> {
    // Creates a recording director wrapping the inner director.
    pub fn new(inner: &'a mut dyn ScoreDirector<S>) -> Self {
        Self {
            inner,
            undo_stack: Vec::with_capacity(16),
            modified_entities: Vec::with_capacity(8),
        }
    }

    // Undoes all recorded changes in reverse order.
    //
    // 1. Retract current contributions from each modified entity
    // 2. Run undo closures LIFO to restore planning variable values
    // 3. Re-notify so shadows and caches see the restored values
    pub fn undo_changes(&mut self) {
        for &(descriptor_idx, entity_idx) in &self.modified_entities {
            self.inner
                .before_variable_changed(descriptor_idx, entity_idx, "");
        }

        while let Some(undo) = self.undo_stack.pop() {
            undo(self.inner.working_solution_mut());
        }

        for (descriptor_idx, entity_idx) in self.modified_entities.drain(..) {
            self.inner
                .after_variable_changed(descriptor_idx, entity_idx, "");
        }
    }

    // Clears the recording state so the Vec allocations can be reused.
    pub fn reset_recording(&mut self) {
        self.undo_stack.clear();
        self.modified_entities.clear();
    }

    // Number of recorded undo closures.
    pub fn change_count(&self) -> usize {
        self.undo_stack.len()
    }

    // True if no changes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

impl<S: PlanningSolution> ScoreDirector<S> for RecordingScoreDirector<'_, S> {
    fn working_solution(&self) -> &S {
        self.inner.working_solution()
    }

    fn working_solution_mut(&mut self) -> &mut S {
        self.inner.working_solution_mut()
    }

    fn calculate_score(&mut self) -> S::Score {
        self.inner.calculate_score()
    }

    fn solution_descriptor(&self) -> &SolutionDescriptor {
        self.inner.solution_descriptor()
    }

    fn clone_working_solution(&self) -> S {
        self.inner.clone_working_solution()
    }

    fn before_variable_changed(
        &mut self,
        descriptor_index: usize,
        entity_index: usize,
        variable_name: &str,
    ) {
        self.inner
            .before_variable_changed(descriptor_index, entity_index, variable_name);
    }

    fn after_variable_changed(
        &mut self,
        descriptor_index: usize,
        entity_index: usize,
        variable_name: &str,
    ) {
        self.inner
            .after_variable_changed(descriptor_index, entity_index, variable_name);

        // Remember the entity for the post-undo refresh, without duplicates.
        let key = (descriptor_index, entity_index);
        if !self.modified_entities.contains(&key) {
            self.modified_entities.push(key);
        }
    }

    fn trigger_variable_listeners(&mut self) {
        self.inner.trigger_variable_listeners();
    }

    fn entity_count(&self, descriptor_index: usize) -> Option<usize> {
        self.inner.entity_count(descriptor_index)
    }

    fn total_entity_count(&self) -> Option<usize> {
        self.inner.total_entity_count()
    }

    fn get_entity(&self, descriptor_index: usize, entity_index: usize) -> Option<&dyn Any> {
        self.inner.get_entity(descriptor_index, entity_index)
    }

    fn is_incremental(&self) -> bool {
        self.inner.is_incremental()
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.undo_stack.clear();
        self.modified_entities.clear();
    }

    fn register_undo(&mut self, undo: Box<dyn FnOnce(&mut S) + Send>) {
        self.undo_stack.push(undo);
    }
}
