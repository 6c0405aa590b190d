//! Moves: atomic, reversible changes to planning variables.

mod arena;
mod change;
mod composite;
mod swap;

mod traits;

pub use arena::MoveArena;
pub use change::ChangeMove;
pub use composite::CompositeMove;
pub use swap::SwapMove;
pub use traits::Move;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
