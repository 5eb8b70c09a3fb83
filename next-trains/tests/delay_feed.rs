//! Delay feed client against a mock open data API.

use chrono::{Duration, NaiveDate, NaiveTime};
use next_trains::domain::RailTime;
use next_trains::projection::{ProjectionConfig, rank_departures};
use next_trains::realtime::{DEFAULT_RAILWAY, DelayFeedClient, DelayFeedConfig, FeedError};
use next_trains::timetable::Timetable;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, token: &str) -> DelayFeedClient {
    let config = DelayFeedConfig::new(token)
        .with_base_url(format!("{}/odpt:Train", server.uri()))
        .with_timeout(5);
    DelayFeedClient::new(config).unwrap()
}

fn record(number: &str, delay: i64) -> serde_json::Value {
    json!({
        "@type": "odpt:Train",
        "odpt:railway": DEFAULT_RAILWAY,
        "odpt:trainNumber": number,
        "odpt:delay": delay,
        "odpt:railDirection": "odpt.RailDirection:Inbound",
        "odpt:fromStation": "odpt.Station:JR-East.ChuoRapid.Hachioji",
        "odpt:toStation": "odpt.Station:JR-East.ChuoRapid.Hino"
    })
}

#[tokio::test]
async fn sends_query_and_parses_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/odpt:Train"))
        .and(query_param("odpt:railway", DEFAULT_RAILWAY))
        .and(query_param("odpt:operator", "odpt.Operator:JR-East"))
        .and(query_param("acl:consumerKey", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            record("807T", 180),
            record("810T", 0),
            { "odpt:railway": "odpt.Railway:JR-East.Ome", "odpt:trainNumber": "811T", "odpt:delay": 600 },
            { "odpt:delay": 60 },
            "not a record"
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server, "secret").fetch().await;

    let observations = result.live().unwrap();
    assert_eq!(observations.len(), 2);
    assert_eq!(observations.get("807T"), Some(Duration::seconds(180)));
    assert_eq!(observations.get("810T"), Some(Duration::zero()));
    assert_eq!(observations.get("811T"), None);
}

#[tokio::test]
async fn empty_array_is_live_and_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = client_for(&server, "secret").fetch().await;

    assert!(!result.is_unavailable());
    assert!(result.live().unwrap().is_empty());
}

#[tokio::test]
async fn unauthorized_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let result = client_for(&server, "").fetch().await;

    assert!(result.is_unavailable());
    assert!(matches!(result.error(), Some(FeedError::Unauthorized)));
    assert!(result.into_data().is_empty());
}

#[tokio::test]
async fn server_error_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = client_for(&server, "secret");
    match client.try_fetch().await {
        Err(FeedError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
    assert!(client.fetch().await.is_unavailable());
}

#[tokio::test]
async fn malformed_body_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server, "secret").fetch().await;

    assert!(matches!(result.error(), Some(FeedError::Json { .. })));
}

#[tokio::test]
async fn unreachable_host_degrades() {
    let config = DelayFeedConfig::new("secret")
        .with_base_url("http://127.0.0.1:9/odpt:Train")
        .with_timeout(2);
    let result = DelayFeedClient::new(config).unwrap().fetch().await;

    assert!(matches!(result.error(), Some(FeedError::Http(_))));
}

#[tokio::test]
async fn failed_feed_ranks_like_an_empty_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let timetable = Timetable::builtin().unwrap();
    let now = RailTime::new(
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    );
    let config = ProjectionConfig::default();

    let degraded = client_for(&server, "secret").fetch().await.into_data();
    let from_failure = rank_departures(timetable.entries(), &degraded, now, &config);
    let from_empty = rank_departures(timetable.entries(), &Default::default(), now, &config);

    assert_eq!(from_failure, from_empty);
    assert!(from_failure.iter().all(|d| d.is_on_time()));
}

#[tokio::test]
async fn live_delay_reorders_the_board() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([record("803K", 600)])))
        .mount(&server)
        .await;

    let timetable = Timetable::builtin().unwrap();
    let now = RailTime::new(
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
    );

    let observations = client_for(&server, "secret").fetch().await.into_data();
    let board = rank_departures(
        timetable.entries(),
        &observations,
        now,
        &ProjectionConfig::default(),
    );

    // 803K leaves at 08:13 with its delay, level with 813T but listed first.
    let ids: Vec<_> = board.iter().map(|d| d.entry.trip_id.as_str()).collect();
    assert_eq!(ids, vec!["807T", "810T", "803K"]);
    assert_eq!(board[2].delay_minutes(), 10);
    assert_eq!(board[2].effective.to_string(), "08:13");
}
