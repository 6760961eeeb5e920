use chrono::NaiveDate;
use httpmock::prelude::*;
use skycast_core::{FetchError, ServiceError, UnitSystem, WeatherClient, WeatherQuery};

const SUCCESS_BODY: &str = r#"{
    "resolvedAddress": "Pszczyna, Woj. Śląskie, Polska",
    "timezone": "Europe/Warsaw",
    "currentConditions": { "temp": 4.5, "feelslike": 1.9, "humidity": 87.2 },
    "days": [
        { "datetime": "2023-11-20", "temp": 3.1 },
        { "datetime": "2023-11-21", "temp": 5.8 },
        { "datetime": "2023-11-22", "temp": 6.0 }
    ]
}"#;

fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::with_base_url("TESTKEY".to_owned(), server.base_url())
}

fn query(location: &str) -> WeatherQuery {
    WeatherQuery {
        location: location.to_owned(),
        unit: UnitSystem::Metric,
    }
}

#[tokio::test]
async fn fetch_decodes_success_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/services/timeline/pszczyna")
            .query_param("unitGroup", "metric")
            .query_param("key", "TESTKEY")
            .query_param("contentType", "json");
        then.status(200).body(SUCCESS_BODY);
    });

    let response = client_for(&server)
        .fetch(&query("pszczyna"))
        .await
        .expect("fetch must succeed");

    mock.assert();
    assert_eq!(response.resolved_address, "Pszczyna, Woj. Śląskie, Polska");
    assert_eq!(response.timezone, "Europe/Warsaw");
    assert_eq!(response.current_conditions.temp, 4.5);
    assert_eq!(response.days.len(), 3);
    assert_eq!(
        response.days[2].datetime,
        NaiveDate::from_ymd_opt(2023, 11, 22).unwrap()
    );
    assert_eq!(response.days[0].weekday(&response.timezone), "Monday");
}

#[tokio::test]
async fn fetch_classifies_invalid_location_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/services/timeline/nowhere");
        then.status(400)
            .body("Bad API Request:Invalid location parameter value.");
    });

    let outcome = client_for(&server).fetch(&query("nowhere")).await;

    match outcome {
        Err(FetchError::Service(ServiceError::InvalidLocation)) => {}
        other => panic!("expected InvalidLocation, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_collapses_unrecognized_body_to_unknown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/services/timeline/pszczyna");
        then.status(500).body("<html>Internal Server Error</html>");
    });

    let outcome = client_for(&server).fetch(&query("pszczyna")).await;

    match outcome {
        Err(FetchError::Service(ServiceError::Unknown)) => {}
        other => panic!("expected Unknown, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_treats_undecodable_success_body_as_unknown() {
    // a 200 whose body is not the expected payload shape still goes
    // through error-body classification
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/rest/services/timeline/pszczyna");
        then.status(200).body(r#"{"unexpected": true}"#);
    });

    let outcome = client_for(&server).fetch(&query("pszczyna")).await;

    match outcome {
        Err(FetchError::Service(ServiceError::Unknown)) => {}
        other => panic!("expected Unknown, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_is_idempotent_against_deterministic_stub() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/rest/services/timeline/pszczyna");
        then.status(200).body(SUCCESS_BODY);
    });

    let client = client_for(&server);
    let first = client
        .fetch(&query("pszczyna"))
        .await
        .expect("first fetch must succeed");
    let second = client
        .fetch(&query("pszczyna"))
        .await
        .expect("second fetch must succeed");

    assert_eq!(first, second);
    // one network call per invocation, no caching
    mock.assert_hits(2);
}

#[tokio::test]
async fn fetch_percent_encodes_location_path_segment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/services/timeline/New%20York%2C%20NY")
            .query_param("unitGroup", "metric");
        then.status(200).body(SUCCESS_BODY);
    });

    client_for(&server)
        .fetch(&query("New York, NY"))
        .await
        .expect("fetch must succeed");

    mock.assert();
}

#[tokio::test]
async fn fetch_surfaces_transport_errors_unmodified() {
    // nothing listens here; the connection error must come through as
    // a transport failure, not a service classification
    let client = WeatherClient::with_base_url(
        "TESTKEY".to_owned(),
        "http://127.0.0.1:9".to_owned(),
    );

    let outcome = client.fetch(&query("pszczyna")).await;

    match outcome {
        Err(FetchError::Transport(error)) => assert!(error.is_connect()),
        other => panic!("expected Transport, got {other:?}"),
    }
}
