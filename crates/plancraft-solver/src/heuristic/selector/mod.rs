//! Selectors: composable producers of entities, values, and moves.
//!
//! A selector borrows the score director only for the duration of an `iter`
//! call and snapshots whatever it needs, so the returned iterator stays live
//! while the decision loop mutates the director between pulls.

pub mod decorator;

mod cache_type;
mod entity;
mod lifecycle;
mod mimic;
mod mimic_value;
mod move_selector;
mod selection_order;
mod value;

pub use cache_type::SelectionCacheType;
pub use decorator::{
    CachingMoveSelector, CartesianProductMoveSelector, FilteringMoveSelector,
    ShufflingMoveSelector, SortingMoveSelector, UnionMoveSelector,
};
pub use entity::{AllEntitiesSelector, EntityReference, EntitySelector, FromSolutionEntitySelector};
pub use lifecycle::SelectorLifecycle;
pub use mimic::{MimicRecorder, MimicRecordingEntitySelector, MimicReplayingEntitySelector};
pub use mimic_value::{MimicRecordingValueSelector, MimicReplayingValueSelector};
pub use move_selector::{ChangeMoveSelector, MoveSelector, SwapMoveSelector};
pub use selection_order::SelectionOrder;
pub use value::{FromSolutionValueSelector, RangeValueSelector, StaticValueSelector, ValueSelector};
