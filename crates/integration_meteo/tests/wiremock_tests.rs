//! Integration tests for the Open-Meteo client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! covering both the raw client API and the `ForecastPort` implementation.

use application::ApplicationError;
use application::ports::ForecastPort;
use domain::value_objects::GeoLocation;
use integration_meteo::{MeteoConfig, MeteoError, OpenMeteoClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample Open-Meteo API response for testing
fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 48.85,
        "longitude": 2.35,
        "generationtime_ms": 0.123,
        "utc_offset_seconds": 3600,
        "timezone": "Europe/Paris",
        "timezone_abbreviation": "CET",
        "elevation": 35.0,
        "current_weather": {
            "time": "2025-01-15T12:00",
            "temperature": 5.5,
            "windspeed": 12.5,
            "winddirection": 225.0,
            "weathercode": 3,
            "is_day": 1
        },
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "humidity_2m": "%",
            "windspeed_10m": "km/h",
            "precipitation": "mm"
        },
        "hourly": {
            "time": (0..24).map(|h| format!("2025-01-15T{h:02}:00")).collect::<Vec<_>>(),
            "temperature_2m": (0..24).map(|h| f64::from(h) * 0.5).collect::<Vec<_>>(),
            "humidity_2m": (0..24).map(|h| 60.0 + f64::from(h)).collect::<Vec<_>>(),
            "windspeed_10m": (0..24).map(|_| 10.0).collect::<Vec<_>>(),
            "precipitation": (0..24).map(|_| 0.0).collect::<Vec<_>>()
        }
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenMeteoClient {
    let config = MeteoConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenMeteoClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /forecast endpoint with the given response
async fn setup_forecast_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_fetch_forecast_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast(48.85, 2.35).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let forecast = result.unwrap();
    assert!((forecast.current.temperature - 5.5).abs() < 0.1);
    assert!((forecast.current.wind_speed - 12.5).abs() < 0.1);
    assert!(forecast.current.pressure.is_none());
    assert_eq!(forecast.hourly.time.len(), 24);
    assert_eq!(forecast.hourly.series.len(), 4);
}

#[tokio::test]
async fn test_fetch_sends_expected_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "48.85"))
        .and(query_param("longitude", "2.35"))
        .and(query_param("current_weather", "true"))
        .and(query_param(
            "hourly",
            "temperature_2m,humidity_2m,windspeed_10m,precipitation",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast(48.85, 2.35).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_forecast_port_fetch_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let location = GeoLocation::new(48.85, 2.35).expect("valid coordinates");
    let result = ForecastPort::fetch(&client, &location).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let forecast = result.unwrap();
    assert_eq!(
        forecast.hourly.get("temperature_2m").map(<[f64]>::len),
        Some(24)
    );
}

#[tokio::test]
async fn test_is_available_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_available().await);
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast(48.85, 2.35).await;

    assert!(
        matches!(result, Err(MeteoError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast(48.85, 2.35).await;

    assert!(
        matches!(result, Err(MeteoError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_client_error_returns_request_failed() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(404)).await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast(48.85, 2.35).await;

    assert!(
        matches!(result, Err(MeteoError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_malformed_body_returns_parse_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast(48.85, 2.35).await;

    assert!(
        matches!(result, Err(MeteoError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_current_weather_returns_parse_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 48.85,
            "longitude": 2.35
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast(48.85, 2.35).await;

    assert!(
        matches!(result, Err(MeteoError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_forecast_port_maps_errors_to_fetch() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(500)).await;

    let client = create_test_client(&mock_server);
    let location = GeoLocation::new(48.85, 2.35).expect("valid coordinates");
    let result = ForecastPort::fetch(&client, &location).await;

    let Err(ApplicationError::Fetch(msg)) = result else {
        unreachable!("Expected ApplicationError::Fetch, got: {result:?}");
    };
    assert!(msg.contains("Service unavailable"));
}

#[tokio::test]
async fn test_is_available_false_when_provider_down() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(500)).await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_available().await);
}
