//! Domain layer for Skycast
//!
//! Contains the workflow state record and value objects. This layer has no
//! external dependencies and defines the ubiquitous language.

pub mod state;
pub mod value_objects;

pub use state::WorkflowState;
pub use value_objects::*;
