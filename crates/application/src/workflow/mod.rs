//! Staged weather recommendation workflow
//!
//! A fixed pipeline with one conditional branch:
//!
//! ```text
//! ParseLocation → Geocode → Route ─┬→ FetchWeather → Recommend → Done
//!                                  └→ HandleError ────────────→ Done
//! ```
//!
//! Every stage consumes and returns the [`domain::WorkflowState`] and is
//! total: faults are recorded in-state, never raised across stage
//! boundaries, so the executor always reaches `Done` with a non-empty
//! `final_response`.

mod executor;
mod output_parser;
mod router;
mod stages;

pub use executor::{WeatherWorkflow, WorkflowStage};
pub use output_parser::{extract_json, parse_recommendation};
pub use router::{Route, route};
pub use stages::{fallback_recommendation, parse_location, title_case};
