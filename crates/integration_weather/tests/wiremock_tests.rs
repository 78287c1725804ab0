//! Integration tests for the weather client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_weather::{HttpWeatherClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Create a client pointing at the mock server
fn create_test_client(mock_server: &MockServer) -> HttpWeatherClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    HttpWeatherClient::new(config).expect("Failed to create client")
}

async fn setup_weather_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_returns_raw_body() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"temperature": 25, "description": "Sunny"})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let body = client
        .fetch_raw("San Francisco")
        .await
        .expect("request should succeed")
        .expect("body should be present");

    let parsed: serde_json::Value = serde_json::from_str(&body).expect("body is JSON");
    assert_eq!(parsed["temperature"], 25);
    assert_eq!(parsed["description"], "Sunny");
}

#[tokio::test]
async fn test_body_is_not_interpreted() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let body = client.fetch_raw("Oslo").await.expect("request should succeed");

    assert_eq!(body.as_deref(), Some("not valid json"));
}

#[tokio::test]
async fn test_empty_body_is_none() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(&mock_server, ResponseTemplate::new(200)).await;

    let client = create_test_client(&mock_server);
    let body = client.fetch_raw("Oslo").await.expect("request should succeed");

    assert!(body.is_none(), "Expected no body, got: {body:?}");
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_city_is_sent_as_query_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("city", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_raw("New York").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_reserved_characters_are_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("city", "Saint-Denis & Co?"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_raw("Saint-Denis & Co?").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

// ============================================================================
// Error scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_response() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(503).set_body_string("Service Unavailable"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_raw("Oslo").await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_response() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_raw("Oslo").await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_client_error_response() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(404).set_body_string("Unknown city"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_raw("Atlantis").await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(ref msg)) if msg.contains("404")),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_server() {
    // Nothing listens on port 1
    let client = HttpWeatherClient::new(WeatherConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 1,
    })
    .expect("Failed to create client");
    let result = client.fetch_raw("Oslo").await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_string("{}")
            .set_delay(std::time::Duration::from_secs(3)),
    )
    .await;

    let client = HttpWeatherClient::new(WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 1,
    })
    .expect("Failed to create client");
    let result = client.fetch_raw("Oslo").await;

    assert!(result.is_err(), "Expected timeout, got: {result:?}");
}
