//! Move selector decorators.
//!
//! Wrappers that compose over an inner move selector: caching snapshots,
//! predicate filtering, shuffled or sorted orderings, concatenation, and
//! cartesian pairing of two selectors into composite moves.

mod caching;
mod cartesian_product;
mod filtering;
mod shuffling;
mod sorting;
mod union;

pub use caching::CachingMoveSelector;
pub use cartesian_product::CartesianProductMoveSelector;
pub use filtering::FilteringMoveSelector;
pub use shuffling::ShufflingMoveSelector;
pub use sorting::SortingMoveSelector;
pub use union::UnionMoveSelector;
