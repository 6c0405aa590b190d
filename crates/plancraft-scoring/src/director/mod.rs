//! Score director implementations.
//!
//! # Director types
//!
//! - [`SimpleScoreDirector`] - full recalculation (baseline)
//! - [`RecordingScoreDirector`] - automatic undo tracking wrapper

mod recording;
mod simple;
mod traits;

pub use recording::RecordingScoreDirector;
pub use simple::SimpleScoreDirector;
pub use traits::ScoreDirector;
