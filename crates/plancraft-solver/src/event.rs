//! Event system for solver monitoring.
//!
//! Listeners register on a [`SolverEventSupport`] and receive synchronous
//! notifications about solver, phase, and step lifecycle events. Two
//! reference listeners ship with the crate: [`LoggingEventListener`] emits
//! `tracing` events and [`CountingEventListener`] counts occurrences for
//! tests and statistics.

use std::fmt::Debug;
use std::sync::Arc;

use tracing::debug;

use plancraft_core::domain::PlanningSolution;

/// Listener for solver-level events.
pub trait SolverEventListener<S: PlanningSolution>: Send + Sync + Debug {
    /// Called when a new best solution is found.
    fn on_best_solution_changed(&self, solution: &S, score: &S::Score);

    /// Called when solving starts.
    fn on_solving_started(&self, _solution: &S) {}

    /// Called when solving ends.
    fn on_solving_ended(&self, _solution: &S, _is_terminated_early: bool) {}
}

/// Listener for phase lifecycle events.
pub trait PhaseLifecycleListener<S: PlanningSolution>: Send + Sync + Debug {
    /// Called when a phase starts.
    fn on_phase_started(&self, phase_index: usize, phase_type: &str);

    /// Called when a phase ends.
    fn on_phase_ended(&self, phase_index: usize, phase_type: &str);
}

/// Listener for step-level events within a phase.
pub trait StepLifecycleListener<S: PlanningSolution>: Send + Sync + Debug {
    /// Called when a step starts.
    fn on_step_started(&self, step_index: u64);

    /// Called when a step ends.
    fn on_step_ended(&self, step_index: u64, score: &S::Score);
}

/// Central event broadcaster for solver events.
///
/// All listener methods are called synchronously in registration order.
pub struct SolverEventSupport<S: PlanningSolution> {
    solver_listeners: Vec<Arc<dyn SolverEventListener<S>>>,
    phase_listeners: Vec<Arc<dyn PhaseLifecycleListener<S>>>,
    step_listeners: Vec<Arc<dyn StepLifecycleListener<S>>>,
}

impl<S: PlanningSolution> SolverEventSupport<S> {
    pub fn new() -> Self {
        Self {
            solver_listeners: Vec::new(),
            phase_listeners: Vec::new(),
            step_listeners: Vec::new(),
        }
    }

    pub fn add_solver_listener(&mut self, listener: Arc<dyn SolverEventListener<S>>) {
        self.solver_listeners.push(listener);
    }

    pub fn add_phase_listener(&mut self, listener: Arc<dyn PhaseLifecycleListener<S>>) {
        self.phase_listeners.push(listener);
    }

    pub fn add_step_listener(&mut self, listener: Arc<dyn StepLifecycleListener<S>>) {
        self.step_listeners.push(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.solver_listeners.clear();
        self.phase_listeners.clear();
        self.step_listeners.clear();
    }

    pub fn fire_best_solution_changed(&self, solution: &S, score: &S::Score) {
        for listener in &self.solver_listeners {
            listener.on_best_solution_changed(solution, score);
        }
    }

    pub fn fire_solving_started(&self, solution: &S) {
        for listener in &self.solver_listeners {
            listener.on_solving_started(solution);
        }
    }

    pub fn fire_solving_ended(&self, solution: &S, is_terminated_early: bool) {
        for listener in &self.solver_listeners {
            listener.on_solving_ended(solution, is_terminated_early);
        }
    }

    pub fn fire_phase_started(&self, phase_index: usize, phase_type: &str) {
        for listener in &self.phase_listeners {
            listener.on_phase_started(phase_index, phase_type);
        }
    }

    pub fn fire_phase_ended(&self, phase_index: usize, phase_type: &str) {
        for listener in &self.phase_listeners {
            listener.on_phase_ended(phase_index, phase_type);
        }
    }

    pub fn fire_step_started(&self, step_index: u64) {
        for listener in &self.step_listeners {
            listener.on_step_started(step_index);
        }
    }

    pub fn fire_step_ended(&self, step_index: u64, score: &S::Score) {
        for listener in &self.step_listeners {
            listener.on_step_ended(step_index, score);
        }
    }

    pub fn solver_listener_count(&self) -> usize {
        self.solver_listeners.len()
    }

    pub fn phase_listener_count(&self) -> usize {
        self.phase_listeners.len()
    }

    pub fn step_listener_count(&self) -> usize {
        self.step_listeners.len()
    }

    pub fn has_listeners(&self) -> bool {
        !self.solver_listeners.is_empty()
            || !self.phase_listeners.is_empty()
            || !self.step_listeners.is_empty()
    }
}

impl<S: PlanningSolution> Default for SolverEventSupport<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PlanningSolution> Debug for SolverEventSupport<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverEventSupport")
            .field("solver_listeners", &self.solver_listeners.len())
            .field("phase_listeners", &self.phase_listeners.len())
            .field("step_listeners", &self.step_listeners.len())
            .finish()
    }
}

/// A listener that forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Default)]
pub struct LoggingEventListener;

impl LoggingEventListener {
    pub fn new() -> Self {
        Self
    }
}

impl<S: PlanningSolution> SolverEventListener<S> for LoggingEventListener {
    fn on_best_solution_changed(&self, _solution: &S, score: &S::Score) {
        debug!(event = "best_solution_changed", score = %score);
    }

    fn on_solving_started(&self, _solution: &S) {
        debug!(event = "solving_started");
    }

    fn on_solving_ended(&self, _solution: &S, is_terminated_early: bool) {
        debug!(event = "solving_ended", terminated_early = is_terminated_early);
    }
}

impl<S: PlanningSolution> PhaseLifecycleListener<S> for LoggingEventListener {
    fn on_phase_started(&self, phase_index: usize, phase_type: &str) {
        debug!(event = "phase_started", phase_index, phase_type);
    }

    fn on_phase_ended(&self, phase_index: usize, phase_type: &str) {
        debug!(event = "phase_ended", phase_index, phase_type);
    }
}

impl<S: PlanningSolution> StepLifecycleListener<S> for LoggingEventListener {
    fn on_step_started(&self, step_index: u64) {
        debug!(event = "step_started", step_index);
    }

    fn on_step_ended(&self, step_index: u64, score: &S::Score) {
        debug!(event = "step_ended", step_index, score = %score);
    }
}

/// A listener that counts event occurrences.
#[derive(Debug, Default)]
pub struct CountingEventListener {
    best_solution_count: std::sync::atomic::AtomicUsize,
    solving_started_count: std::sync::atomic::AtomicUsize,
    solving_ended_count: std::sync::atomic::AtomicUsize,
    phase_started_count: std::sync::atomic::AtomicUsize,
    phase_ended_count: std::sync::atomic::AtomicUsize,
    step_started_count: std::sync::atomic::AtomicUsize,
    step_ended_count: std::sync::atomic::AtomicUsize,
}

impl CountingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best_solution_count(&self) -> usize {
        self.best_solution_count
            .load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn solving_started_count(&self) -> usize {
        self.solving_started_count
            .load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn solving_ended_count(&self) -> usize {
        self.solving_ended_count
            .load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn phase_started_count(&self) -> usize {
        self.phase_started_count
            .load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn phase_ended_count(&self) -> usize {
        self.phase_ended_count
            .load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn step_started_count(&self) -> usize {
        self.step_started_count
            .load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn step_ended_count(&self) -> usize {
        self.step_ended_count
            .load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl<S: PlanningSolution> SolverEventListener<S> for CountingEventListener {
    fn on_best_solution_changed(&self, _solution: &S, _score: &S::Score) {
        self.best_solution_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn on_solving_started(&self, _solution: &S) {
        self.solving_started_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn on_solving_ended(&self, _solution: &S, _is_terminated_early: bool) {
        self.solving_ended_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

impl<S: PlanningSolution> PhaseLifecycleListener<S> for CountingEventListener {
    fn on_phase_started(&self, _phase_index: usize, _phase_type: &str) {
        self.phase_started_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn on_phase_ended(&self, _phase_index: usize, _phase_type: &str) {
        self.phase_ended_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

impl<S: PlanningSolution> StepLifecycleListener<S> for CountingEventListener {
    fn on_step_started(&self, _step_index: u64) {
        self.step_started_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn on_step_ended(&self, _step_index: u64, _score: &S::Score) {
        self.step_ended_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
