//! Score calculation infrastructure for Plancraft.
//!
//! The score director owns the working solution and is the single gateway
//! through which phases read, mutate, and score it:
//! - [`ScoreDirector`] - the director contract
//! - [`SimpleScoreDirector`] - full recalculation through a calculator closure
//! - [`RecordingScoreDirector`] - undo-tracking wrapper for speculative moves

pub mod director;

pub use director::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};
