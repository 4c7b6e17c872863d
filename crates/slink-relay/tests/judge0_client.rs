use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use slink_core::SubmissionRequest;
use slink_relay::{Judge, Judge0Client, Judge0Settings, JudgeError};

/// What the stub judge saw on its last submission.
#[derive(Clone, Default)]
struct Seen {
    api_key: Arc<Mutex<Option<String>>>,
    api_host: Arc<Mutex<Option<String>>>,
    query: Arc<Mutex<HashMap<String, String>>>,
    body: Arc<Mutex<Value>>,
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

async fn accept_submission(
    State(seen): State<Seen>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *seen.api_key.lock().unwrap() = header(&headers, "x-rapidapi-key");
    *seen.api_host.lock().unwrap() = header(&headers, "x-rapidapi-host");
    *seen.query.lock().unwrap() = query;
    *seen.body.lock().unwrap() = body;
    (
        StatusCode::CREATED,
        Json(json!({ "token": "d85cd024-1548-4165-96c7-7bc88673f194" })),
    )
}

async fn show_submission(Path(token): Path<String>) -> Json<Value> {
    Json(json!({
        "token": token,
        "status": { "id": 3, "description": "Accepted" },
        "stdout": "MQo=",
        "stderr": null,
        "time": "0.011",
        "memory": 3300
    }))
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn stub_judge() -> (String, Seen) {
    let seen = Seen::default();
    let router = Router::new()
        .route("/submissions", post(accept_submission))
        .route("/submissions/{token}", get(show_submission))
        .with_state(seen.clone());
    (spawn(router).await, seen)
}

fn request() -> SubmissionRequest {
    SubmissionRequest {
        language_id: "71".to_string(),
        source_code: "cHJpbnQoMSk=".to_string(),
        stdin: "".to_string(),
    }
}

#[tokio::test]
async fn submit_posts_payload_and_returns_token() {
    let (base_url, seen) = stub_judge().await;
    let client = Judge0Client::new(Judge0Settings::builder().base_url(base_url).build()).unwrap();

    let token = client.submit(&request()).await.unwrap();

    assert_eq!(token, "d85cd024-1548-4165-96c7-7bc88673f194");
    assert_eq!(
        *seen.body.lock().unwrap(),
        json!({ "language_id": "71", "source_code": "cHJpbnQoMSk=", "stdin": "" })
    );
    assert_eq!(
        seen.query.lock().unwrap().get("base64_encoded").map(String::as_str),
        Some("true")
    );
    assert!(seen.api_key.lock().unwrap().is_none());
    assert!(seen.api_host.lock().unwrap().is_none());
}

#[tokio::test]
async fn configured_key_is_sent_with_host() {
    let (base_url, seen) = stub_judge().await;
    let client = Judge0Client::new(
        Judge0Settings::builder()
            .base_url(base_url)
            .api_key(Some("secret-key".to_string()))
            .build(),
    )
    .unwrap();

    client.submit(&request()).await.unwrap();

    assert_eq!(seen.api_key.lock().unwrap().as_deref(), Some("secret-key"));
    assert_eq!(seen.api_host.lock().unwrap().as_deref(), Some("127.0.0.1"));
}

#[tokio::test]
async fn execution_decodes_result() {
    let (base_url, _) = stub_judge().await;
    let client = Judge0Client::new(Judge0Settings::builder().base_url(base_url).build()).unwrap();

    let result = client.execution("tok-1").await.unwrap();

    assert_eq!(result.token.as_deref(), Some("tok-1"));
    assert_eq!(result.status.unwrap().id, 3);
    assert_eq!(result.stdout.as_deref(), Some("MQo="));
    assert_eq!(result.time.as_deref(), Some("0.011"));
    assert_eq!(result.memory, Some(3300));
}

#[tokio::test]
async fn error_status_is_reported() {
    let router = Router::new().route(
        "/submissions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
    );
    let base_url = spawn(router).await;
    let client = Judge0Client::new(Judge0Settings::builder().base_url(base_url).build()).unwrap();

    let err = client.submit(&request()).await.unwrap_err();

    match err {
        JudgeError::Status { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "quota exceeded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route(
        "/submissions",
        post(|| async { (StatusCode::CREATED, "<html>oops</html>") }),
    );
    let base_url = spawn(router).await;
    let client = Judge0Client::new(Judge0Settings::builder().base_url(base_url).build()).unwrap();

    let err = client.submit(&request()).await.unwrap_err();
    assert!(matches!(err, JudgeError::Decode(_)));
}

#[tokio::test]
async fn slow_judge_times_out() {
    let router = Router::new().route(
        "/submissions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "token": "late" }))
        }),
    );
    let base_url = spawn(router).await;
    let client = Judge0Client::new(
        Judge0Settings::builder()
            .base_url(base_url)
            .timeout(Duration::from_millis(200))
            .build(),
    )
    .unwrap();

    let err = client.submit(&request()).await.unwrap_err();
    assert!(matches!(err, JudgeError::Timeout(_)));
}

#[tokio::test]
async fn unreachable_judge_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Judge0Client::new(
        Judge0Settings::builder()
            .base_url(format!("http://{addr}"))
            .build(),
    )
    .unwrap();

    let err = client.submit(&request()).await.unwrap_err();
    assert!(matches!(err, JudgeError::Transport(_)));
}
