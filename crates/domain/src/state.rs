//! Workflow state threaded through the recommendation pipeline

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, Recommendation, WeatherData};

/// Mutable record carried through every workflow stage
///
/// Fields are populated monotonically: each stage fills in its own outputs
/// and never erases what an earlier stage wrote. A state is created fresh per
/// invocation, exclusively owned by it, and discarded once `final_response`
/// has been extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    /// Raw user input, untouched
    pub user_input: String,
    /// Location extracted from the input
    pub location: String,
    /// Resolved coordinates; `None` until geocoding succeeds
    pub coordinates: Option<GeoLocation>,
    /// Weather fetch outcome; `None` until the fetch stage ran
    pub weather_data: Option<WeatherData>,
    /// Raw recommendation text (LLM output or a fixed message)
    pub recommendation: String,
    /// Text presented to the user
    pub final_response: String,
    /// Schema-validated recommendation, when parsing succeeded
    pub parsed_recommendation: Option<Recommendation>,
}

impl WorkflowState {
    /// Create a fresh state for one invocation
    #[must_use]
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            location: String::new(),
            coordinates: None,
            weather_data: None,
            recommendation: String::new(),
            final_response: String::new(),
            parsed_recommendation: None,
        }
    }
}
