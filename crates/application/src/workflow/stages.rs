//! Pure workflow stages and text helpers
//!
//! The stages here need no collaborators; the port-backed stages live on
//! [`super::WeatherWorkflow`].

use domain::{Recommendation, WorkflowState};
use tracing::debug;

/// Phrase that introduces a location in free-form input
pub const TRIGGER_PHRASE: &str = "weather in";

/// Apology shown when weather data could not be retrieved
pub const WEATHER_APOLOGY: &str = "Sorry, I couldn't get weather data for that location.";

/// Extract the location from the raw user input
///
/// Matching is case-insensitive on the trigger phrase; everything after its
/// LAST occurrence, trimmed, becomes the location (lowercased, since the
/// match runs on a lowercased copy — display title-cases it later). Without
/// the phrase the whole trimmed input is used. Total, never fails.
pub fn parse_location(state: &mut WorkflowState) {
    let lowered = state.user_input.to_lowercase();
    let location = lowered.rfind(TRIGGER_PHRASE).map_or_else(
        || state.user_input.trim().to_string(),
        |idx| lowered[idx + TRIGGER_PHRASE.len()..].trim().to_string(),
    );

    debug!(location = %location, "Extracted location");
    state.location = location;
}

/// Produce the fixed guidance message for an unresolved location
///
/// Terminal stage of the failure branch; sets both `recommendation` and
/// `final_response`.
pub fn handle_error(state: &mut WorkflowState) {
    let location = &state.location;
    let guidance = format!(
        "Sorry, I couldn't find '{location}'. Please try:\n\
         • A major city name (e.g., 'London')\n\
         • City with country (e.g., 'Paris France')\n\
         • Check spelling and try again"
    );

    debug!(location = %location, "Location not found, returning guidance");
    state.recommendation = guidance.clone();
    state.final_response = guidance;
}

/// Build the recommendation prompt for the language model
///
/// Embeds the title-cased location, the observation, and the format
/// instructions for the four-field output schema.
#[must_use]
pub fn build_prompt(location: &str, temperature: f64, windspeed: f64) -> String {
    let location = title_case(location);
    format!(
        "You are a weather assistant. Analyze the weather and provide a structured recommendation.\n\
         \n\
         Location: {location}\n\
         Temperature: {temperature}°C\n\
         Wind Speed: {windspeed} km/h\n\
         \n\
         Respond with a single JSON object matching this schema:\n\
         {{\"condition_summary\": string, \"activity_suggestion\": string, \
         \"clothing_advice\": string, \"temperature\": number}}\n\
         All four fields are required. Output only the JSON object.\n\
         \n\
         Provide exactly one specific activity suggestion that's perfect for these conditions."
    )
}

/// Deterministic recommendation used when structured output cannot be parsed
///
/// Pure computation from already-known values; must never fail. The
/// temperature passes through unchanged.
#[must_use]
pub fn fallback_recommendation(location: &str, temperature: f64) -> Recommendation {
    let activity = if temperature > 15.0 {
        "Enjoy the outdoors"
    } else {
        "Stay cozy indoors"
    };

    Recommendation {
        condition_summary: format!("Current weather in {}", title_case(location)),
        activity_suggestion: activity.to_string(),
        clothing_advice: "Dress appropriately for the temperature".to_string(),
        temperature,
    }
}

/// Compose the multi-line user-facing summary for a parsed recommendation
#[must_use]
pub fn compose_summary(location: &str, rec: &Recommendation) -> String {
    format!(
        "📍 {} Weather Update:\n\
         🌡️ {} ({:.1}°C)\n\
         🎯 Suggested Activity: {}\n\
         👕 What to Wear: {}",
        title_case(location),
        rec.condition_summary,
        rec.temperature,
        rec.activity_suggestion,
        rec.clothing_advice,
    )
}

/// Compose the compact single-line response for the fallback path
#[must_use]
pub fn compose_fallback_response(rec: &Recommendation) -> String {
    format!(
        "Temperature: {:.1}°C. {}",
        rec.temperature, rec.activity_suggestion
    )
}

/// Capitalize the first letter of each whitespace-separated word
#[must_use]
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
