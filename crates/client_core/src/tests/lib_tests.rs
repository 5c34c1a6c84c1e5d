use super::*;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::json;
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Clone)]
struct ServerState {
    tx: Arc<Mutex<Option<oneshot::Sender<TravelQuery>>>>,
}

async fn handle_extract(
    State(state): State<ServerState>,
    Json(query): Json<TravelQuery>,
) -> Json<Value> {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(query);
    }
    Json(json!({
        "location": "Paris",
        "date": "2023-06-01",
        "weather_summary": "Sunny"
    }))
}

async fn handle_accommodation_error() -> Json<Value> {
    Json(json!({ "error": "Could not determine city" }))
}

async fn handle_full_guide_server_error() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "LLM quota exceeded" })),
    )
}

async fn spawn_travel_server() -> anyhow::Result<(String, oneshot::Receiver<TravelQuery>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel();
    let state = ServerState {
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/extract_location_date", post(handle_extract))
        .route("/travel_guide", post(handle_accommodation_error))
        .route("/full_travel_guide", post(handle_full_guide_server_error))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), rx))
}

async fn spawn_raw_server(route: &'static str, status: StatusCode, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route(route, post(move || async move { (status, body) }));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn extract_posts_message_and_decodes_result() {
    let (server_url, query_rx) = spawn_travel_server().await.expect("spawn server");
    let client = HttpTravelClient::new(&server_url).expect("client");

    let result = client
        .extract_location_date("Weather in Paris on 2023-06-01?")
        .await
        .expect("extract");

    assert_eq!(result.location.as_deref(), Some("Paris"));
    assert_eq!(result.date.as_deref(), Some("2023-06-01"));
    assert_eq!(result.weather_summary.as_deref(), Some("Sunny"));

    let query = query_rx.await.expect("captured query");
    assert_eq!(query.message, "Weather in Paris on 2023-06-01?");
}

#[tokio::test]
async fn error_field_in_ok_response_is_remote_error() {
    let (server_url, _rx) = spawn_travel_server().await.expect("spawn server");
    let client = HttpTravelClient::new(&server_url).expect("client");

    let err = client
        .accommodation_guide("Rome next week")
        .await
        .expect_err("remote error");

    assert!(err.is_remote());
    assert_eq!(err.user_message(Flow::Accommodation), "Could not determine city");
}

#[tokio::test]
async fn error_field_wins_over_failing_status() {
    let (server_url, _rx) = spawn_travel_server().await.expect("spawn server");
    let client = HttpTravelClient::new(&server_url).expect("client");

    let err = client
        .submit(Flow::FullGuide, "Plan three days in Lisbon")
        .await
        .expect_err("remote error");

    assert_eq!(err.user_message(Flow::FullGuide), "LLM quota exceeded");
}

#[tokio::test]
async fn submit_dispatches_to_flow_endpoint() {
    let (server_url, _rx) = spawn_travel_server().await.expect("spawn server");
    let client = HttpTravelClient::new(&server_url).expect("client");

    let response = client
        .submit(Flow::Extraction, "Paris")
        .await
        .expect("submit");

    assert_eq!(response.flow(), Flow::Extraction);
}

#[tokio::test]
async fn non_json_body_maps_to_generic_message() {
    let server_url =
        spawn_raw_server("/travel_guide", StatusCode::OK, "<html>gateway</html>").await;
    let client = HttpTravelClient::new(&server_url).expect("client");

    let err = client
        .accommodation_guide("Rome")
        .await
        .expect_err("decode failure");

    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(
        err.user_message(Flow::Accommodation),
        "Failed to get accommodation guide"
    );
}

#[tokio::test]
async fn itinerary_with_non_list_day_is_decode_error() {
    let server_url = spawn_raw_server(
        "/full_travel_guide",
        StatusCode::OK,
        r#"{"formatted_response": "Guide", "itinerary": {"day1": "Beach"}}"#,
    )
    .await;
    let client = HttpTravelClient::new(&server_url).expect("client");

    let err = client.full_travel_guide("Lisbon").await.expect_err("decode");
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn full_guide_days_follow_wire_order() {
    let server_url = spawn_raw_server(
        "/full_travel_guide",
        StatusCode::OK,
        r#"{"formatted_response": "Guide", "itinerary": {"itinerary": {"day3": ["Harbour"], "day1": ["Old town"], "arrival": []}}}"#,
    )
    .await;
    let client = HttpTravelClient::new(&server_url).expect("client");

    let guide = client.full_travel_guide("Lisbon").await.expect("guide");

    let itinerary = guide.itinerary.expect("itinerary");
    let names: Vec<_> = itinerary.days.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["day3", "day1", "arrival"]);
    assert_eq!(itinerary.days[1].activities, ["Old town"]);
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = HttpTravelClient::new(&format!("http://{addr}")).expect("client");
    let err = client
        .extract_location_date("Paris")
        .await
        .expect_err("transport failure");

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(
        err.user_message(Flow::Extraction),
        "Failed to extract location and date"
    );
}

#[test]
fn normalizes_trailing_slashes_on_base_url() {
    assert_eq!(
        normalize_base_url(" http://127.0.0.1:5000/ ").expect("valid"),
        "http://127.0.0.1:5000"
    );
    assert_eq!(DEFAULT_API_BASE, normalize_base_url(DEFAULT_API_BASE).expect("valid"));
}

#[test]
fn rejects_non_http_base_url() {
    assert!(matches!(
        normalize_base_url("ftp://example.com"),
        Err(ClientError::InvalidBaseUrl { .. })
    ));
    assert!(normalize_base_url("not a url").is_err());
}

#[test]
fn decode_flow_body_prefers_error_field() {
    let err = decode_flow_body::<ExtractionResult>(
        br#"{"location": "Paris", "error": "ambiguous date"}"#,
    )
    .expect_err("remote");
    assert_eq!(err.user_message(Flow::Extraction), "ambiguous date");

    let ok: ExtractionResult =
        decode_flow_body(br#"{"location": "Paris", "error": null}"#).expect("decode");
    assert_eq!(ok.location.as_deref(), Some("Paris"));
}

#[test]
fn decode_flow_body_keeps_itinerary_wire_order() {
    let guide: FullGuideResult = decode_flow_body(
        br#"{"formatted_response": "x", "itinerary": {"saturday": ["a"], "sunday": ["b"], "monday": ["c"]}}"#,
    )
    .expect("decode");

    let itinerary = guide.itinerary.expect("itinerary");
    let names: Vec<_> = itinerary.days.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["saturday", "sunday", "monday"]);
}
