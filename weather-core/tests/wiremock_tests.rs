//! Tests for the HG Brasil client and the lookup screen against a mock HTTP server.

use std::{sync::Arc, time::Duration};

use weather_core::{
    CityQuery, Config, FetchController, FetchError, HgBrasilProvider, Icon, LookupError,
    RequestState, WeatherProvider, WeatherScreen, provider_from_config,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const API_KEY: &str = "test-key";

fn london_body() -> serde_json::Value {
    serde_json::json!({
        "by": "city_name",
        "valid_key": true,
        "results": {
            "city": "London",
            "temp": 18,
            "condition_slug": "cloud",
            "description": "Nublado",
            "forecast": [
                { "date": "today", "max": 20, "min": 12, "condition": "cloud",
                  "description": "Nublado", "rain_probability": 10 },
                { "date": "tomorrow", "max": 22, "min": 13, "condition": "rain",
                  "description": "Chuva", "rain_probability": 80 }
            ]
        }
    })
}

fn provider_for(server: &MockServer, timeout: Duration) -> HgBrasilProvider {
    #[allow(clippy::expect_used)]
    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to build client");
    HgBrasilProvider::new(API_KEY.into(), format!("{}/weather", server.uri()), http)
}

fn city(name: &str) -> CityQuery {
    CityQuery::parse(name).unwrap()
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Provider
// ============================================================================

#[tokio::test]
async fn sends_key_and_city_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("key", API_KEY))
        .and(query_param("city_name", "São Paulo, SP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server, Duration::from_secs(5));
    let result = provider.lookup(&city("  São Paulo, SP ")).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn results_are_returned_as_sent() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(london_body())).await;

    let provider = provider_for(&server, Duration::from_secs(5));
    let result = provider.lookup(&city("London")).await.unwrap();

    assert_eq!(result.city, "London");
    assert_eq!(result.temp, 18.0);
    assert_eq!(result.condition_slug, "cloud");
    assert_eq!(result.forecast.len(), 2);
    assert_eq!(result.forecast[1].rain_probability, 80.0);
}

#[tokio::test]
async fn body_without_results_is_not_found() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(serde_json::json!({}))).await;

    let provider = provider_for(&server, Duration::from_secs(5));
    let err = provider.lookup(&city("Nowhere123")).await.unwrap_err();

    assert!(matches!(err, LookupError::NotFound));
}

#[tokio::test]
async fn falsy_results_are_not_found() {
    for body in [
        serde_json::json!(null),
        serde_json::json!({ "results": null }),
        serde_json::json!({ "results": false }),
        serde_json::json!([]),
    ] {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(200).set_body_json(body.clone())).await;

        let provider = provider_for(&server, Duration::from_secs(5));
        let err = provider.lookup(&city("Nowhere123")).await.unwrap_err();

        assert!(matches!(err, LookupError::NotFound), "body {body}: {err:?}");
        assert_eq!(err.to_string(), "City not found.");
    }
}

#[tokio::test]
async fn non_json_body_is_fetch_failure() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let provider = provider_for(&server, Duration::from_secs(5));
    let err = provider.lookup(&city("London")).await.unwrap_err();

    assert!(matches!(err, LookupError::Fetch(FetchError::Parse(_))));
}

#[tokio::test]
async fn malformed_results_is_fetch_failure() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": { "city": 1 } })),
    )
    .await;

    let provider = provider_for(&server, Duration::from_secs(5));
    let err = provider.lookup(&city("London")).await.unwrap_err();

    assert!(matches!(err, LookupError::Fetch(FetchError::Parse(_))));
}

#[tokio::test]
async fn error_status_is_fetch_failure() {
    for status in [401, 404, 500, 503] {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(status).set_body_string("nope")).await;

        let provider = provider_for(&server, Duration::from_secs(5));
        let err = provider.lookup(&city("London")).await.unwrap_err();

        match err {
            LookupError::Fetch(FetchError::Status { status: got, body }) => {
                assert_eq!(got, status);
                assert_eq!(body, "nope");
            }
            other => panic!("unexpected error for {status}: {other:?}"),
        }
    }
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(london_body())
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let provider = provider_for(&server, Duration::from_millis(100));
    let err = provider.lookup(&city("London")).await.unwrap_err();

    assert!(matches!(err, LookupError::Fetch(FetchError::Transport(_))));
    assert_eq!(err.to_string(), "Failed to fetch weather data.");
}

#[tokio::test]
async fn provider_from_config_uses_configured_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("key", "from-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut cfg = Config::default();
    cfg.set_api_key("from-config".into());
    cfg.endpoint = format!("{}/weather", server.uri());

    let provider = provider_from_config(&cfg).unwrap();
    assert!(provider.lookup(&city("London")).await.is_ok());
}

// ============================================================================
// Screen end to end
// ============================================================================

#[tokio::test]
async fn london_end_to_end() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(london_body())).await;
    let provider = provider_for(&server, Duration::from_secs(5));

    let mut screen = WeatherScreen::new();
    screen.set_query("London");
    screen.submit(&provider).await;

    let view = screen.view();
    assert!(!view.loading);
    assert!(view.error.is_none());

    let current = view.current.as_ref().unwrap();
    assert_eq!(current.city, "London");
    assert_eq!(current.temperature, "18°C");
    assert_eq!(current.icon, Icon::Cloud);

    let rows = &view.forecast.as_ref().unwrap().rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "tomorrow");
    assert_eq!(rows[0].rain_probability, "80% chance de chuva");
    assert_eq!(rows[0].rain_icon, Icon::Rain);
}

#[tokio::test]
async fn nowhere_end_to_end() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(serde_json::json!({}))).await;
    let provider = provider_for(&server, Duration::from_secs(5));

    let mut screen = WeatherScreen::new();
    screen.set_query("Nowhere123");
    screen.submit(&provider).await;

    let view = screen.view();
    assert_eq!(view.error.as_deref(), Some("City not found."));
    assert!(view.current.is_none());
    assert!(!view.loading);
}

#[tokio::test]
async fn paris_connection_refused_end_to_end() {
    // Bind then release a port so nothing is listening on it.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let provider = HgBrasilProvider::new(
        API_KEY.into(),
        format!("http://{addr}/weather"),
        reqwest::Client::new(),
    );

    let mut screen = WeatherScreen::new();
    screen.set_query("Paris");
    screen.submit(&provider).await;

    assert_eq!(
        screen.state(),
        &RequestState::Error("Failed to fetch weather data.".into())
    );
    assert!(!screen.view().loading);
}

#[tokio::test]
async fn controller_round_trip() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_json(london_body())).await;
    let provider: Arc<dyn WeatherProvider> =
        Arc::new(provider_for(&server, Duration::from_secs(5)));

    let mut ctl = FetchController::new(provider);
    let mut screen = WeatherScreen::new();
    screen.set_query("London");

    assert!(ctl.submit(&mut screen));
    assert!(screen.view().loading);

    ctl.settle(&mut screen).await;
    assert_eq!(screen.state().result().map(|r| r.city.as_str()), Some("London"));
}
