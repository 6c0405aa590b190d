//! Shared test fixtures for Plancraft crates.
//!
//! - [`minimal`] - a score-only solution for components that need no entities
//! - [`task`] - a small task prioritization domain
//! - [`nqueens`] - the N-Queens problem with a conflict-count calculator
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! plancraft-test = { workspace = true }
//! ```

pub mod minimal;
pub mod nqueens;
pub mod task;

pub use minimal::MinimalSolution;
pub use nqueens::{NQueensSolution, Queen};
pub use task::{Task, TaskSolution};
