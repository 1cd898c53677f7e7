//! Workflow executor
//!
//! Drives the stages through the fixed topology from `ParseLocation` to
//! `Done`. The topology is a linear chain with exactly one binary branch,
//! so it is modelled as a tagged-union state machine rather than a general
//! graph. Collaborators are injected as ports at construction; the
//! executor itself knows nothing about HTTP or model semantics.

use std::sync::Arc;

use domain::{WeatherData, WorkflowState};
use tracing::{debug, instrument, warn};

use super::output_parser::parse_recommendation;
use super::router::{Route, route};
use super::stages::{
    WEATHER_APOLOGY, build_prompt, compose_fallback_response, compose_summary,
    fallback_recommendation, handle_error, parse_location,
};
use crate::ports::{GeocodingPort, InferencePort, WeatherPort};

/// Stages of the recommendation workflow
///
/// Single entry `ParseLocation`, single terminal `Done`, no cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    /// Extract the location from free-form input
    ParseLocation,
    /// Resolve the location to coordinates
    Geocode,
    /// Decide between the weather branch and the error branch
    Route,
    /// Fetch the current weather observation
    FetchWeather,
    /// Generate and parse the recommendation
    Recommend,
    /// Produce guidance for an unresolved location
    HandleError,
    /// Terminal state
    Done,
}

/// The staged weather recommendation workflow
///
/// One instance can serve any number of invocations; each invocation owns
/// its [`WorkflowState`] exclusively, so concurrent runs need no locking.
pub struct WeatherWorkflow {
    geocoding: Arc<dyn GeocodingPort>,
    weather: Arc<dyn WeatherPort>,
    inference: Arc<dyn InferencePort>,
}

impl std::fmt::Debug for WeatherWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherWorkflow").finish_non_exhaustive()
    }
}

impl WeatherWorkflow {
    /// Create a workflow over the given collaborator ports
    #[must_use]
    pub fn new(
        geocoding: Arc<dyn GeocodingPort>,
        weather: Arc<dyn WeatherPort>,
        inference: Arc<dyn InferencePort>,
    ) -> Self {
        Self {
            geocoding,
            weather,
            inference,
        }
    }

    /// Run the workflow to completion
    ///
    /// Stage functions are total, so this always reaches `Done` and the
    /// returned state carries a non-empty `final_response`.
    #[instrument(skip(self, state), fields(input = %state.user_input))]
    pub async fn run(&self, mut state: WorkflowState) -> WorkflowState {
        let mut stage = WorkflowStage::ParseLocation;
        while stage != WorkflowStage::Done {
            stage = self.step(stage, &mut state).await;
        }
        state
    }

    /// Execute one stage and return the next
    async fn step(&self, stage: WorkflowStage, state: &mut WorkflowState) -> WorkflowStage {
        match stage {
            WorkflowStage::ParseLocation => {
                parse_location(state);
                WorkflowStage::Geocode
            },
            WorkflowStage::Geocode => {
                self.geocode(state).await;
                WorkflowStage::Route
            },
            WorkflowStage::Route => match route(state) {
                Route::Proceed => WorkflowStage::FetchWeather,
                Route::Fail => WorkflowStage::HandleError,
            },
            WorkflowStage::FetchWeather => {
                self.fetch_weather(state).await;
                WorkflowStage::Recommend
            },
            WorkflowStage::Recommend => {
                self.recommend(state).await;
                WorkflowStage::Done
            },
            WorkflowStage::HandleError => {
                handle_error(state);
                WorkflowStage::Done
            },
            WorkflowStage::Done => WorkflowStage::Done,
        }
    }

    /// Resolve the extracted location to coordinates
    ///
    /// Both "no match" and a transport failure leave the coordinates
    /// unresolved; the router diverts those to the guidance branch.
    async fn geocode(&self, state: &mut WorkflowState) {
        match self.geocoding.resolve(&state.location).await {
            Ok(Some(coords)) => {
                debug!(%coords, "Resolved coordinates");
                state.coordinates = Some(coords);
            },
            Ok(None) => {
                debug!(location = %state.location, "Location not found");
            },
            Err(e) => {
                warn!(error = %e, location = %state.location, "Geocoding failed");
            },
        }
    }

    /// Fetch the current weather for the resolved coordinates
    async fn fetch_weather(&self, state: &mut WorkflowState) {
        // The router already excludes unresolved coordinates; keep the
        // re-check anyway so this stage stays total on its own.
        let Some(coords) = state.coordinates else {
            state.weather_data = Some(WeatherData::Unavailable(
                "No valid coordinates".to_string(),
            ));
            return;
        };

        match self.weather.current_weather(&coords).await {
            Ok(obs) => {
                debug!(temperature = obs.temperature, windspeed = obs.windspeed, "Retrieved weather");
                state.weather_data = Some(WeatherData::Observation(obs));
            },
            Err(e) => {
                warn!(error = %e, "Weather fetch failed");
                state.weather_data = Some(WeatherData::Unavailable(e.to_string()));
            },
        }
    }

    /// Generate a recommendation from the observation
    ///
    /// Error-marked weather data short-circuits to a fixed apology. A
    /// generation or schema-parse failure falls back to the deterministic
    /// recommendation; neither is surfaced to the user.
    async fn recommend(&self, state: &mut WorkflowState) {
        let Some(obs) = state
            .weather_data
            .as_ref()
            .and_then(WeatherData::observation)
            .copied()
        else {
            state.recommendation = WEATHER_APOLOGY.to_string();
            state.final_response = WEATHER_APOLOGY.to_string();
            return;
        };

        let prompt = build_prompt(&state.location, obs.temperature, obs.windspeed);

        match self.inference.generate(&prompt).await {
            Ok(result) => match parse_recommendation(&result.content) {
                Ok(rec) => {
                    debug!(model = %result.model, latency_ms = result.latency_ms, "Parsed recommendation");
                    state.recommendation = result.content;
                    state.final_response = compose_summary(&state.location, &rec);
                    state.parsed_recommendation = Some(rec);
                },
                Err(e) => {
                    warn!(error = %e, "Structured output parse failed, using fallback");
                    let rec = fallback_recommendation(&state.location, obs.temperature);
                    state.final_response = compose_fallback_response(&rec);
                    state.parsed_recommendation = Some(rec);
                },
            },
            Err(e) => {
                warn!(error = %e, "Inference failed, using fallback");
                let rec = fallback_recommendation(&state.location, obs.temperature);
                state.final_response = compose_fallback_response(&rec);
                state.parsed_recommendation = Some(rec);
            },
        }
    }
}
