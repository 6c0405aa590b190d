//! Plancraft Solver Engine
//!
//! This crate provides the local search solver implementation including:
//! - The Solver facade
//! - Move system and move selectors
//! - The local search phase (acceptors, foragers, decider)
//! - Termination conditions
//! - Event system for monitoring
//! - Statistics collection

pub mod event;
pub mod heuristic;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod statistics;
pub mod termination;

pub use event::{
    CountingEventListener, LoggingEventListener, PhaseLifecycleListener, SolverEventListener,
    SolverEventSupport, StepLifecycleListener,
};
pub use heuristic::r#move::{ChangeMove, CompositeMove, Move, MoveArena, SwapMove};
pub use heuristic::selector::{
    AllEntitiesSelector, CachingMoveSelector, CartesianProductMoveSelector, ChangeMoveSelector,
    EntityReference, EntitySelector, FilteringMoveSelector, FromSolutionEntitySelector,
    FromSolutionValueSelector, MimicRecorder, MimicRecordingEntitySelector,
    MimicRecordingValueSelector, MimicReplayingEntitySelector, MimicReplayingValueSelector,
    MoveSelector, RangeValueSelector, SelectionCacheType, SelectionOrder, SelectorLifecycle,
    ShufflingMoveSelector, SortingMoveSelector, StaticValueSelector, SwapMoveSelector,
    UnionMoveSelector, ValueSelector,
};
pub use phase::localsearch::{
    AcceptedForager, Acceptor, FinalistPodium, HighestScorePodium, HillClimbingAcceptor,
    LateAcceptanceAcceptor, LocalSearchDecider, LocalSearchForager, LocalSearchPhase,
    LocalSearchRuntimeConfig, PickEarlyType, RuntimeAcceptor, SimulatedAnnealingAcceptor,
};
pub use phase::Phase;
pub use scope::{MoveScope, PhaseScope, SolverScope, StepScope};
pub use solver::{MaybeTermination, Solver};
pub use statistics::{PhaseStatistics, ScoreImprovement, SolverStatistics, StatisticsCollector};
pub use termination::{
    AndTermination, BestScoreFeasibleTermination, BestScoreTermination, NoTermination,
    OrTermination, StepCountTermination, Termination, TimeTermination,
    UnimprovedStepCountTermination, UnimprovedTimeTermination,
};
