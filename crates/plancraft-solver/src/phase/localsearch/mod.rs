//! Local search: iterative improvement through move selection, acceptance,
//! and foraging.
//!
//! Each step pulls candidate moves from a [`MoveSelector`], scores them
//! speculatively, filters them through an [`Acceptor`], and lets a
//! [`LocalSearchForager`] pick the step's winner, which is then committed.
//!
//! [`MoveSelector`]: crate::heuristic::selector::MoveSelector

pub mod acceptor;

mod decider;
mod forager;
mod phase;
mod podium;
mod runtime;

pub use acceptor::{
    Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor, SimulatedAnnealingAcceptor,
};
pub use decider::LocalSearchDecider;
pub use forager::{AcceptedForager, LocalSearchForager, PickEarlyType};
pub use phase::LocalSearchPhase;
pub use podium::{FinalistPodium, HighestScorePodium};
pub use runtime::{LocalSearchRuntimeConfig, RuntimeAcceptor};
