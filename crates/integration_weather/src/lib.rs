//! Open-Meteo weather integration
//!
//! HTTP client for the [Open-Meteo](https://open-meteo.com) current-weather
//! API.

mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{ApiResponse, CurrentWeatherData};
