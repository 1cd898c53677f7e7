//! Structured-output parsing for model responses
//!
//! Language models comply with format instructions on a best-effort basis:
//! the JSON may arrive bare, fenced in markdown, or not at all. Parsing
//! returns a `Result` and the caller branches on it; a failed parse is
//! never an unwind path.

use domain::Recommendation;

/// Parse a model response into a [`Recommendation`]
///
/// # Errors
///
/// Returns a description of the failure when the response carries no JSON
/// object or the object does not satisfy the four-field schema.
pub fn parse_recommendation(response: &str) -> Result<Recommendation, String> {
    let json_str = extract_json(response);
    serde_json::from_str(json_str).map_err(|e| format!("JSON parse error: {e}"))
}

/// Extract JSON from a potentially markdown-wrapped response
#[must_use]
pub fn extract_json(response: &str) -> &str {
    let response = response.trim();

    // Handle ```json ... ``` blocks
    if let Some(start) = response.find("```json") {
        if let Some(end) = response[start + 7..].find("```") {
            return response[start + 7..start + 7 + end].trim();
        }
    }

    // Handle ``` ... ``` blocks
    if let Some(start) = response.find("```") {
        if let Some(end) = response[start + 3..].find("```") {
            return response[start + 3..start + 3 + end].trim();
        }
    }

    // Handle { ... } directly
    // Ensure start < end to avoid panics with malformed input like "} {"
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if start <= end {
                return &response[start..=end];
            }
        }
    }

    response
}
