//! Plancraft Core - Core types and traits for planning optimization
//!
//! This crate provides the fundamental abstractions for Plancraft:
//! - Score types for representing solution quality
//! - Domain traits for defining planning problems
//! - Descriptor types for runtime metadata
//! - Supply types for derived variable state

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{PlanningEntity, PlanningId, PlanningSolution, ProblemFact};
pub use error::PlancraftError;
pub use score::{
    BendableScore, HardMediumSoftScore, HardSoftDecimalScore, HardSoftScore, ParseableScore, Score,
    ScoreParseError, SimpleScore,
};
