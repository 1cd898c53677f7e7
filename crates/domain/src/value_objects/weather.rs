//! Weather observation value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single current-weather observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub windspeed: f64,
}

impl fmt::Display for WeatherObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C, wind {} km/h", self.temperature, self.windspeed)
    }
}

/// Result of the weather-fetch stage: an observation or an error marker
///
/// The two cases are mutually exclusive. A failed fetch is recorded here as
/// data rather than propagated as an error, so later stages stay total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherData {
    /// Weather was retrieved successfully
    Observation(WeatherObservation),
    /// Weather could not be retrieved; carries the failure message
    Unavailable(String),
}

impl WeatherData {
    /// Get the observation, if one was retrieved
    #[must_use]
    pub const fn observation(&self) -> Option<&WeatherObservation> {
        match self {
            Self::Observation(obs) => Some(obs),
            Self::Unavailable(_) => None,
        }
    }

    /// Whether this carries an error marker instead of an observation
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_accessor() {
        let data = WeatherData::Observation(WeatherObservation {
            temperature: 15.0,
            windspeed: 10.0,
        });
        let obs = data.observation().expect("observation present");
        assert!((obs.temperature - 15.0).abs() < f64::EPSILON);
        assert!(!data.is_unavailable());
    }

    #[test]
    fn unavailable_carries_message() {
        let data = WeatherData::Unavailable("connection refused".to_string());
        assert!(data.is_unavailable());
        assert!(data.observation().is_none());
    }

    #[test]
    fn observation_display() {
        let obs = WeatherObservation {
            temperature: 20.5,
            windspeed: 5.0,
        };
        let text = obs.to_string();
        assert!(text.contains("20.5"));
        assert!(text.contains("km/h"));
    }

    #[test]
    fn serde_round_trip() {
        let data = WeatherData::Observation(WeatherObservation {
            temperature: -3.0,
            windspeed: 22.0,
        });
        let json = serde_json::to_string(&data).expect("serialize");
        let back: WeatherData = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(data, back);
    }
}
