//! Move and selector building blocks shared by solver phases.

pub mod r#move;
pub mod selector;
