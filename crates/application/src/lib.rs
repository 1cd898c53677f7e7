//! Application layer - Workflow orchestration and port definitions
//!
//! Contains the staged recommendation workflow, the ports it depends on,
//! and application-level errors. Orchestrates domain objects and
//! infrastructure adapters.

pub mod error;
pub mod ports;
pub mod workflow;

pub use error::ApplicationError;
pub use ports::*;
pub use workflow::{Route, WeatherWorkflow, WorkflowStage};
