//! Integration tests for the Open-Meteo client using WireMock

use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn config_for_mock(base_url: &str) -> WeatherConfig {
    WeatherConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

fn current_weather_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 51.5,
        "longitude": -0.12,
        "generationtime_ms": 0.3,
        "current_weather": {
            "temperature": 15.0,
            "windspeed": 10.0,
            "winddirection": 230,
            "weathercode": 3,
            "time": "2026-08-27T12:00"
        }
    })
}

#[tokio::test]
async fn get_current_parses_observation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenMeteoClient::new(config_for_mock(&server.uri())).expect("client creation");
    let obs = client.get_current(51.5, -0.12).await.expect("fetch succeeds");

    assert!((obs.temperature - 15.0).abs() < f64::EPSILON);
    assert!((obs.windspeed - 10.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn get_current_rejects_invalid_coordinates_without_request() {
    let server = MockServer::start().await;
    // No mock mounted; a request would fail the test

    let client = OpenMeteoClient::new(config_for_mock(&server.uri())).expect("client creation");
    let err = client.get_current(91.0, 0.0).await.expect_err("invalid");
    assert!(err.to_string().contains("Invalid coordinates"));
}

#[tokio::test]
async fn get_current_maps_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = OpenMeteoClient::new(config_for_mock(&server.uri())).expect("client creation");
    let err = client.get_current(51.5, -0.12).await.expect_err("error");
    assert!(err.to_string().contains("Service unavailable"));
}

#[tokio::test]
async fn get_current_maps_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = OpenMeteoClient::new(config_for_mock(&server.uri())).expect("client creation");
    let err = client.get_current(51.5, -0.12).await.expect_err("error");
    assert!(err.to_string().contains("Rate limit"));
}

#[tokio::test]
async fn get_current_requires_current_weather_block() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 51.5,
            "longitude": -0.12
        })))
        .mount(&server)
        .await;

    let client = OpenMeteoClient::new(config_for_mock(&server.uri())).expect("client creation");
    let err = client.get_current(51.5, -0.12).await.expect_err("error");
    assert!(err.to_string().contains("No current weather data"));
}
