//! Domain model traits for defining planning problems
//!
//! These traits define the structure of a planning problem:
//! - `PlanningSolution`: The container for the complete problem and solution
//! - `PlanningEntity`: Things that can be planned/optimized
//! - `ProblemFact`: Immutable input data
//! - `PlanningId`: Unique identification for entities

mod traits;
mod descriptor;
mod variable;
mod entity_ref;
pub mod supply;

pub use traits::{ListVariableSolution, PlanningEntity, PlanningId, PlanningSolution, ProblemFact};
pub use descriptor::{
    EntityDescriptor, ProblemFactDescriptor, SolutionDescriptor, VariableDescriptor,
};
pub use variable::{ShadowVariableKind, ValueRangeType, VariableType};
pub use entity_ref::{EntityExtractor, EntityRef, TypedEntityExtractor};
pub use supply::{ElementPosition, ListStateSupply, PreviousElementSupply};
