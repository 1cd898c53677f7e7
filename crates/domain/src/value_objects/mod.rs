//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod recommendation;
mod weather;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use recommendation::Recommendation;
pub use weather::{WeatherData, WeatherObservation};
