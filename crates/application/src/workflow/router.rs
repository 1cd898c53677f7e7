//! Conditional routing after geocoding

use domain::WorkflowState;

/// Outcome of the routing decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Coordinates resolved; continue to the weather fetch
    Proceed,
    /// Location could not be resolved; divert to error guidance
    Fail,
}

/// Pure routing predicate over the workflow state
///
/// Fails iff geocoding left the coordinates unresolved. No coordinate
/// range is treated as invalid here; a real (0.0, 0.0) proceeds.
#[must_use]
pub fn route(state: &WorkflowState) -> Route {
    if state.coordinates.is_some() {
        Route::Proceed
    } else {
        Route::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::GeoLocation;

    #[test]
    fn unresolved_coordinates_fail() {
        let state = WorkflowState::new("weather in Qwertyzzz");
        assert_eq!(route(&state), Route::Fail);
    }

    #[test]
    fn resolved_coordinates_proceed() {
        let mut state = WorkflowState::new("weather in London");
        state.coordinates = Some(GeoLocation::new_unchecked(51.5, -0.12));
        assert_eq!(route(&state), Route::Proceed);
    }

    #[test]
    fn null_island_is_a_real_place() {
        // An explicitly resolved (0.0, 0.0) is not a failure marker
        let mut state = WorkflowState::new("weather in Null Island");
        state.coordinates = Some(GeoLocation::new_unchecked(0.0, 0.0));
        assert_eq!(route(&state), Route::Proceed);
    }

    #[test]
    fn single_zero_axis_proceeds() {
        let mut state = WorkflowState::new("weather in Greenwich");
        state.coordinates = Some(GeoLocation::new_unchecked(51.48, 0.0));
        assert_eq!(route(&state), Route::Proceed);
    }
}
