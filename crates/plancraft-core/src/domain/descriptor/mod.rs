//! Runtime metadata descriptors for solutions, entities, and variables.
//!
//! Descriptors are resolved once before solving starts and stay read-only
//! afterwards. Selectors and score directors consult them to navigate the
//! domain model without compile-time knowledge of the concrete types.

mod entity;
mod problem_fact;
mod solution;
mod var_descriptor;

pub use entity::EntityDescriptor;
pub use problem_fact::ProblemFactDescriptor;
pub use solution::SolutionDescriptor;
pub use var_descriptor::VariableDescriptor;
