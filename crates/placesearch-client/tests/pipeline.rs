//! End-to-end tests of both pipelines against wiremock HTTP mocks.

use std::cell::RefCell;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use placesearch_client::{
    DetailQuery, ErrorKind, PlacesClient, PlacesError, PlacesService, PredictionQuery,
    ServiceStatus, TaskState, TransportError,
};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_service(base_url: &str) -> PlacesService {
    PlacesService::new(
        PlacesClient::with_base_url("test-key", "de", base_url)
            .expect("client construction should not fail"),
    )
}

fn png_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([200, 30, 30, 255])))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}

#[tokio::test]
async fn karlsruhe_search_returns_translated_predictions() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "predictions": [
            {
                "description": "Karlsruhe, Deutschland",
                "id": "a1",
                "place_id": "ChIJCXjgokgGl0cRf-63XSNbJRk",
                "reference": "ref-a1",
                "types": ["locality", "political", "geocode"]
            },
            {
                "description": "Karlsruher Straße, Berlin, Deutschland",
                "id": "b2",
                "place_id": "ChIJbyKdVUpOqEcR",
                "reference": "ref-b2",
                "types": ["route", "geocode"]
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .and(query_param("input", "Karlsruhe"))
        .and(query_param("components", "country:de"))
        .and(query_param_is_missing("types"))
        .and(query_param("language", "de"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let service = test_service(&server.uri());
    let query = PredictionQuery::new("Karlsruhe")
        .unwrap()
        .with_type_filter("all")
        .with_region_filter("country:de");

    let events = RefCell::new(Vec::new());
    let mut received = None;
    let state = service
        .search_predictions(
            query,
            || events.borrow_mut().push("began"),
            |outcome| {
                events.borrow_mut().push("complete");
                received = Some(outcome);
            },
        )
        .await;

    assert_eq!(state, TaskState::Delivered);
    assert_eq!(events.into_inner(), vec!["began", "complete"]);

    let records = received
        .expect("complete fired")
        .expect("should parse predictions");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].description, "Karlsruhe, Deutschland");
    assert_eq!(
        records[0].types,
        vec!["Gegend", "political", "Geografischer Punkt"]
    );
    assert_eq!(records[1].place_id, "ChIJbyKdVUpOqEcR");
    assert_eq!(records[1].types, vec!["route", "Geografischer Punkt"]);
}

#[tokio::test]
async fn type_filter_is_sent_when_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .and(query_param("types", "(cities)"))
        .and(query_param_is_missing("components"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "OK", "predictions": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let query = PredictionQuery::new("Karl")
        .unwrap()
        .with_type_filter("(cities)")
        .with_region_filter("all");
    let records = test_service(&server.uri())
        .spawn_predictions(query)
        .outcome()
        .await
        .expect("empty result is a success");
    assert!(records.is_empty());
}

#[tokio::test]
async fn over_query_limit_is_reported_as_remote_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "OVER_QUERY_LIMIT" })),
        )
        .mount(&server)
        .await;

    let mut began = 0;
    let mut outcome = None;
    test_service(&server.uri())
        .search_predictions(
            PredictionQuery::new("Karlsruhe").unwrap(),
            || began += 1,
            |o| outcome = Some(o),
        )
        .await;

    assert_eq!(began, 1);
    match outcome.expect("complete fired") {
        Err(PlacesError::RemoteStatus { status, message }) => {
            assert_eq!(status, ServiceStatus::OverQueryLimit);
            assert_eq!(
                message,
                "You have exceeded your daily quota for the given API key."
            );
        }
        other => panic!("expected RemoteStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_status_is_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_service(&server.uri())
        .spawn_predictions(PredictionQuery::new("Karlsruhe").unwrap())
        .outcome()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_service(&server.uri())
        .spawn_detail(DetailQuery::new("ChIJ123").unwrap())
        .outcome()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn unreachable_server_is_transport_failure() {
    // Nothing listens on port 1.
    let service = test_service("http://127.0.0.1:1");
    let mut events = Vec::new();
    let mut outcome = None;
    service
        .fetch_detail(
            DetailQuery::new("ChIJ123").unwrap(),
            || events.push("began"),
            |o| outcome = Some(o),
        )
        .await;

    assert_eq!(events, vec!["began"]);
    let err = outcome.expect("complete fired").unwrap_err();
    assert!(matches!(err, PlacesError::Transport(TransportError::Http(_))));
}

#[tokio::test]
async fn detail_with_icon_downloads_and_decodes_it() {
    let server = MockServer::start().await;
    let icon_url = format!("{}/icons/museum-71.png", server.uri());

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "name": "Badisches Landesmuseum",
            "url": "https://maps.google.com/?cid=42",
            "website": "https://www.landesmuseum.de/",
            "formatted_address": "Schlossbezirk 10, 76131 Karlsruhe, Deutschland",
            "formatted_phone_number": "0721 9266514",
            "icon": icon_url,
            "geometry": { "location": { "lat": 49.0135, "lng": 8.4044 } }
        }
    });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("placeid", "ChIJ-museum"))
        .and(query_param("language", "de"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/icons/museum-71.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(png_bytes()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let detail = test_service(&server.uri())
        .spawn_detail(DetailQuery::new("ChIJ-museum").unwrap())
        .outcome()
        .await
        .expect("detail should resolve");

    assert_eq!(detail.name.as_deref(), Some("Badisches Landesmuseum"));
    assert_eq!(detail.website.as_deref(), Some("https://www.landesmuseum.de/"));
    assert_eq!(detail.phone_number.as_deref(), Some("0721 9266514"));
    assert_eq!(detail.lat, Some(49.0135));
    assert_eq!(detail.lng, Some(8.4044));
    let icon = detail.icon.expect("icon should be fetched");
    assert_eq!(icon.url, icon_url);
    assert_eq!((icon.image.width(), icon.image.height()), (4, 4));
}

#[tokio::test]
async fn unreachable_icon_fails_the_whole_detail() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "name": "Schloss Karlsruhe",
            "icon": "http://127.0.0.1:1/icons/generic.png"
        }
    });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let err = test_service(&server.uri())
        .spawn_detail(DetailQuery::new("ChIJ-schloss").unwrap())
        .outcome()
        .await
        .expect_err("no partial detail without its icon");
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn undecodable_icon_fails_the_whole_detail() {
    let server = MockServer::start().await;
    let icon_url = format!("{}/icons/broken.png", server.uri());

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "result": { "icon": icon_url }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/icons/broken.png"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not a png"))
        .mount(&server)
        .await;

    let err = test_service(&server.uri())
        .spawn_detail(DetailQuery::new("ChIJ-broken").unwrap())
        .outcome()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PlacesError::Transport(TransportError::ImageDecode { .. })
    ));
}

#[tokio::test]
async fn detail_without_icon_makes_a_single_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "OK", "result": {} })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let detail = test_service(&server.uri())
        .spawn_detail(DetailQuery::new("ChIJ-empty").unwrap())
        .outcome()
        .await
        .expect("empty result is a success");
    assert!(detail.name.is_none());
    assert!(detail.icon.is_none());
    assert_eq!((detail.lat, detail.lng), (None, None));
}
