//! Derived state for list planning variables.
//!
//! Supplies cache information that could be recomputed from the solution but
//! would be too expensive to rederive on every lookup:
//! - `ListStateSupply`: element -> (owner entity, list index) positions
//! - `PreviousElementSupply`: previous-element shadow links per list

mod list_state;
mod previous_element;

pub use list_state::{ElementPosition, ListStateSupply};
pub use previous_element::PreviousElementSupply;
