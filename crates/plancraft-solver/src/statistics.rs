//! Solver statistics collection and reporting.
//!
//! Tracks evaluated/accepted move counts, step counts, timing, and the
//! score-improvement history of a solver run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use plancraft_core::score::Score;

/// Statistics for a single solver phase.
#[derive(Debug, Clone)]
pub struct PhaseStatistics<Sc: Score> {
    /// Index of this phase (0-based).
    pub phase_index: usize,
    /// Type name of the phase (e.g., "LocalSearch").
    pub phase_type: String,
    /// Time spent in this phase.
    pub duration: Duration,
    /// Number of steps taken in this phase.
    pub step_count: u64,
    /// Number of moves evaluated.
    pub moves_evaluated: u64,
    /// Number of moves accepted.
    pub moves_accepted: u64,
    /// Score at the start of the phase.
    pub starting_score: Option<Sc>,
    /// Score at the end of the phase.
    pub ending_score: Option<Sc>,
}

impl<Sc: Score> PhaseStatistics<Sc> {
    pub fn new(phase_index: usize, phase_type: impl Into<String>) -> Self {
        Self {
            phase_index,
            phase_type: phase_type.into(),
            duration: Duration::ZERO,
            step_count: 0,
            moves_evaluated: 0,
            moves_accepted: 0,
            starting_score: None,
            ending_score: None,
        }
    }

    /// Returns the acceptance rate (accepted / evaluated).
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_evaluated == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_evaluated as f64
        }
    }

    /// Returns the average time per step.
    pub fn avg_time_per_step(&self) -> Duration {
        if self.step_count == 0 {
            Duration::ZERO
        } else {
            self.duration / self.step_count as u32
        }
    }
}

/// Record of a score improvement event.
#[derive(Debug, Clone)]
pub struct ScoreImprovement<Sc: Score> {
    /// Time since solving started when the improvement occurred.
    pub time_offset: Duration,
    /// Step number when the improvement occurred.
    pub step_count: u64,
    /// The new (improved) score.
    pub score: Sc,
}

/// Complete statistics for a solver run.
#[derive(Debug, Clone)]
pub struct SolverStatistics<Sc: Score> {
    /// Total time spent solving.
    pub total_duration: Duration,
    /// Total steps taken across all phases.
    pub total_step_count: u64,
    /// Total moves evaluated across all phases.
    pub total_moves_evaluated: u64,
    /// Total moves accepted across all phases.
    pub total_moves_accepted: u64,
    /// Number of score calculations performed.
    pub score_calculation_count: u64,
    /// Statistics for each phase.
    pub phase_statistics: Vec<PhaseStatistics<Sc>>,
    /// History of score improvements.
    pub score_history: Vec<ScoreImprovement<Sc>>,
}

impl<Sc: Score> SolverStatistics<Sc> {
    pub fn new() -> Self {
        Self {
            total_duration: Duration::ZERO,
            total_step_count: 0,
            total_moves_evaluated: 0,
            total_moves_accepted: 0,
            score_calculation_count: 0,
            phase_statistics: Vec::new(),
            score_history: Vec::new(),
        }
    }

    /// Returns the overall acceptance rate.
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_moves_evaluated == 0 {
            0.0
        } else {
            self.total_moves_accepted as f64 / self.total_moves_evaluated as f64
        }
    }

    pub fn phase_count(&self) -> usize {
        self.phase_statistics.len()
    }

    /// Returns the best score achieved (last in history, or None).
    pub fn best_score(&self) -> Option<&Sc> {
        self.score_history.last().map(|s| &s.score)
    }

    pub fn improvement_count(&self) -> usize {
        self.score_history.len()
    }
}

impl<Sc: Score> Default for SolverStatistics<Sc> {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe collector for solver statistics.
///
/// Record counts during solving, then call [`into_statistics`] for the
/// final report or [`snapshot`] for a mid-run view.
///
/// [`into_statistics`]: StatisticsCollector::into_statistics
/// [`snapshot`]: StatisticsCollector::snapshot
pub struct StatisticsCollector<Sc: Score> {
    start_time: Instant,
    moves_evaluated: AtomicU64,
    moves_accepted: AtomicU64,
    step_count: AtomicU64,
    score_calculations: AtomicU64,
    phases: Mutex<Vec<PhaseStatistics<Sc>>>,
    score_history: Mutex<Vec<ScoreImprovement<Sc>>>,
}

impl<Sc: Score> StatisticsCollector<Sc> {
    /// Creates a new collector; the start time is recorded now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            moves_evaluated: AtomicU64::new(0),
            moves_accepted: AtomicU64::new(0),
            step_count: AtomicU64::new(0),
            score_calculations: AtomicU64::new(0),
            phases: Mutex::new(Vec::new()),
            score_history: Mutex::new(Vec::new()),
        }
    }

    pub fn record_move_evaluated(&self) {
        self.moves_evaluated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_move_accepted(&self) {
        self.moves_accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an evaluated move and, when `accepted`, its acceptance.
    pub fn record_move(&self, accepted: bool) {
        self.record_move_evaluated();
        if accepted {
            self.record_move_accepted();
        }
    }

    pub fn record_step(&self) {
        self.step_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_score_calculation(&self) {
        self.score_calculations.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a new best score.
    pub fn record_improvement(&self, score: Sc) {
        let improvement = ScoreImprovement {
            time_offset: self.start_time.elapsed(),
            step_count: self.step_count.load(Ordering::Relaxed),
            score,
        };

        if let Ok(mut history) = self.score_history.lock() {
            history.push(improvement);
        }
    }

    /// Starts a new phase and returns its index.
    pub fn start_phase(&self, phase_type: impl Into<String>) -> usize {
        let mut phases = self.phases.lock().unwrap();
        let index = phases.len();
        phases.push(PhaseStatistics::new(index, phase_type));
        index
    }

    /// Fills in the statistics for a phase started with [`start_phase`].
    ///
    /// [`start_phase`]: StatisticsCollector::start_phase
    #[allow(clippy::too_many_arguments)]
    pub fn end_phase(
        &self,
        phase_index: usize,
        duration: Duration,
        step_count: u64,
        moves_evaluated: u64,
        moves_accepted: u64,
        starting_score: Option<Sc>,
        ending_score: Option<Sc>,
    ) {
        if let Ok(mut phases) = self.phases.lock() {
            if let Some(phase) = phases.get_mut(phase_index) {
                phase.duration = duration;
                phase.step_count = step_count;
                phase.moves_evaluated = moves_evaluated;
                phase.moves_accepted = moves_accepted;
                phase.starting_score = starting_score;
                phase.ending_score = ending_score;
            }
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn current_step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    pub fn current_moves_evaluated(&self) -> u64 {
        self.moves_evaluated.load(Ordering::Relaxed)
    }

    pub fn current_moves_accepted(&self) -> u64 {
        self.moves_accepted.load(Ordering::Relaxed)
    }

    pub fn current_score_calculations(&self) -> u64 {
        self.score_calculations.load(Ordering::Relaxed)
    }

    /// Consumes the collector and returns the complete statistics.
    pub fn into_statistics(self) -> SolverStatistics<Sc> {
        SolverStatistics {
            total_duration: self.start_time.elapsed(),
            total_step_count: self.step_count.load(Ordering::Relaxed),
            total_moves_evaluated: self.moves_evaluated.load(Ordering::Relaxed),
            total_moves_accepted: self.moves_accepted.load(Ordering::Relaxed),
            score_calculation_count: self.score_calculations.load(Ordering::Relaxed),
            phase_statistics: self.phases.into_inner().unwrap(),
            score_history: self.score_history.into_inner().unwrap(),
        }
    }

    /// Takes a snapshot of current statistics without consuming the collector.
    pub fn snapshot(&self) -> SolverStatistics<Sc> {
        SolverStatistics {
            total_duration: self.start_time.elapsed(),
            total_step_count: self.step_count.load(Ordering::Relaxed),
            total_moves_evaluated: self.moves_evaluated.load(Ordering::Relaxed),
            total_moves_accepted: self.moves_accepted.load(Ordering::Relaxed),
            score_calculation_count: self.score_calculations.load(Ordering::Relaxed),
            phase_statistics: self.phases.lock().unwrap().clone(),
            score_history: self.score_history.lock().unwrap().clone(),
        }
    }
}

impl<Sc: Score> Default for StatisticsCollector<Sc> {
    fn default() -> Self {
        Self::new()
    }
}
