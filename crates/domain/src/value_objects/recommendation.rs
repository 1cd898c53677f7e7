//! Structured weather recommendation

use serde::{Deserialize, Serialize};

/// A structured recommendation derived from current weather
///
/// This is the fixed output schema requested from the language model. All
/// four fields are required for a response to count as a valid parse;
/// deserialization fails if any is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Short description of the current conditions
    pub condition_summary: String,
    /// One specific activity suited to the conditions
    pub activity_suggestion: String,
    /// What to wear
    pub clothing_advice: String,
    /// Temperature in Celsius the recommendation was made for
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_record() {
        let json = r#"{
            "condition_summary": "Mild and breezy",
            "activity_suggestion": "Go for a walk along the river",
            "clothing_advice": "Light jacket",
            "temperature": 15.0
        }"#;
        let rec: Recommendation = serde_json::from_str(json).expect("valid schema");
        assert_eq!(rec.condition_summary, "Mild and breezy");
        assert!((rec.temperature - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_missing_field() {
        // clothing_advice missing
        let json = r#"{
            "condition_summary": "Mild",
            "activity_suggestion": "Walk",
            "temperature": 15.0
        }"#;
        assert!(serde_json::from_str::<Recommendation>(json).is_err());
    }

    #[test]
    fn tolerates_extra_fields() {
        let json = r#"{
            "condition_summary": "Cold",
            "activity_suggestion": "Museum visit",
            "clothing_advice": "Warm coat",
            "temperature": 2.0,
            "confidence": 0.9
        }"#;
        assert!(serde_json::from_str::<Recommendation>(json).is_ok());
    }

    #[test]
    fn rejects_non_numeric_temperature() {
        let json = r#"{
            "condition_summary": "Cold",
            "activity_suggestion": "Museum visit",
            "clothing_advice": "Warm coat",
            "temperature": "two"
        }"#;
        assert!(serde_json::from_str::<Recommendation>(json).is_err());
    }
}
