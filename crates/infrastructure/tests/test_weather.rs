use common::NetworkError;
use domain::Coordinates;
use infrastructure::{OpenMeteoClient, WeatherSource};
use mockito::{Matcher, Server};

fn coords() -> Coordinates {
    Coordinates::new(55.7512, 37.6184)
}

#[tokio::test]
async fn test_lookup_maps_code_and_rounds_temperature() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/forecast")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("latitude".into(), "55.7512".into()),
            Matcher::UrlEncoded("longitude".into(), "37.6184".into()),
            Matcher::UrlEncoded("current".into(), "temperature_2m,weather_code".into()),
            Matcher::UrlEncoded("wind_speed_unit".into(), "ms".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"latitude":55.75,"current":{"time":"2024-05-01T12:00","temperature_2m":12.6,"weather_code":63}}"#)
        .create_async()
        .await;

    let client = OpenMeteoClient::new(server.url(), 5).unwrap();
    let state = client.current(coords()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(state.location, "Коорд: 55.75, 37.62");
    assert_eq!(state.temperature, 13);
    assert_eq!(state.condition, "Дождь");
    assert!(state.is_cold());
}

#[tokio::test]
async fn test_missing_current_block_is_a_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1/forecast")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"latitude":55.75,"longitude":37.62}"#)
        .create_async()
        .await;

    let client = OpenMeteoClient::new(server.url(), 5).unwrap();
    let err = client.current(coords()).await.unwrap_err();
    assert!(matches!(err, NetworkError::InvalidBody(_)));
}

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v1/forecast")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let client = OpenMeteoClient::new(server.url(), 5).unwrap();
    let err = client.current(coords()).await.unwrap_err();
    assert_eq!(
        err,
        NetworkError::Status {
            code: 503,
            body: "unavailable".into()
        }
    );
}
