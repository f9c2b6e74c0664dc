//! Forecast client tests against a mock HTTP server

use city_weather::action::Action;
use city_weather::api::{ApiConfig, WeatherApiError, WeatherClient};
use city_weather::effect::fetch_weather;
use pretty_assertions::assert_eq;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn sample_response() -> serde_json::Value {
    serde_json::json!({
        "location": {"name": "London", "region": "City of London", "country": "UK"},
        "current": {
            "temp_c": 15.0,
            "is_day": 1,
            "condition": {"text": "Cloudy", "icon": "//x/icon.png", "code": 1006}
        },
        "forecast": {"forecastday": [
            {"date": "2024-01-01", "day": {"avgtemp_c": 14.0, "condition": {"text": "Cloudy", "icon": "//x/i1.png"}}},
            {"date": "2024-01-02", "day": {"avgtemp_c": 12.5, "condition": {"text": "Rain", "icon": "//x/i2.png"}}}
        ]}
    })
}

fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::new(ApiConfig {
        base_url: server.uri(),
        api_key: "test-key".into(),
        api_host: "weatherapi-com.p.rapidapi.com".into(),
    })
}

#[tokio::test]
async fn test_fetch_sends_city_days_and_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "London"))
        .and(query_param("days", "4"))
        .and(header("x-rapidapi-key", "test-key"))
        .and(header("x-rapidapi-host", "weatherapi-com.p.rapidapi.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client_for(&server).fetch_forecast("London").await.unwrap();

    assert_eq!(snapshot.location, "London");
    assert_eq!(snapshot.temp_c, 15.0);
    assert_eq!(snapshot.condition.text, "Cloudy");
    assert_eq!(snapshot.condition.icon.url(), "https://x/icon.png");
    assert_eq!(snapshot.forecast.len(), 2);
    assert_eq!(snapshot.forecast[0].weekday(), "Monday");
    assert_eq!(snapshot.forecast[1].avg_temp_c, 12.5);
}

#[tokio::test]
async fn test_city_with_spaces_is_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_forecast("New York").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_forecast("London").await;

    assert!(matches!(result, Err(WeatherApiError::Status(403))));
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"location": {"name": "London"}})),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_forecast("London").await;

    assert!(matches!(result, Err(WeatherApiError::Parse(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_a_request_error() {
    // Reserve a free port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = WeatherClient::new(ApiConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        api_key: "test-key".into(),
        api_host: "weatherapi-com.p.rapidapi.com".into(),
    });

    let result = client.fetch_forecast("London").await;

    assert!(matches!(result, Err(WeatherApiError::Request(_))));
}

#[tokio::test]
async fn test_fetch_weather_settles_with_load() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .mount(&server)
        .await;

    let action = fetch_weather(&client_for(&server), "London".into(), 7).await;

    match action {
        Action::WeatherDidLoad { seq, snapshot } => {
            assert_eq!(seq, 7);
            assert_eq!(snapshot.location, "London");
        }
        other => panic!("expected WeatherDidLoad, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_weather_settles_with_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let action = fetch_weather(&client_for(&server), "London".into(), 3).await;

    assert_eq!(
        action,
        Action::WeatherDidError {
            seq: 3,
            message: "weather service returned HTTP 500".into(),
        }
    );
}
