use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use kidtrack_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let config = Config::default();
    let state = build_state(&config).unwrap();
    app_router(state, &config)
}

fn visit(date: &str, weight: f64, height: f64) -> Value {
    json!({
        "childSex": "female",
        "childBirthDate": "2024-01-15",
        "date": date,
        "weight": weight,
        "height": height,
        "ageInMonths": 6
    })
}

async fn post_json(uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn healthz_works() {
    let response = app()
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn analyze_returns_three_normal_indicators() {
    let (status, body) = post_json("/api/v1/growth/analyze", &visit("2024-07-15", 7.3, 65.0)).await;
    assert_eq!(status, StatusCode::OK);

    let indicators = body["indicators"].as_array().unwrap();
    assert_eq!(indicators.len(), 3);
    for indicator in indicators {
        assert_eq!(indicator["status"]["code"], "normal");
    }
    assert_eq!(indicators[2]["indicator"], "weight-for-height");
    assert_eq!(body["alerts"], json!([]));
}

#[tokio::test]
async fn out_of_range_age_is_unprocessable() {
    let mut old = visit("2024-07-15", 55.0, 170.0);
    old["childBirthDate"] = json!("2008-01-01");

    let (status, body) = post_json("/api/v1/growth/analyze", &old).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("weight-for-age"));
    assert!(message.contains("0 to 60 months"));
}

#[tokio::test]
async fn invalid_measurement_is_bad_request() {
    let (status, _) = post_json("/api/v1/growth/analyze", &visit("2024-07-15", 0.0, 65.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json("/api/v1/growth/analyze", &visit("2024-01-01", 3.0, 50.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (status, body) =
        post_json("/api/v1/growth/analyze", &json!({ "childSex": "female" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn batch_and_trend() {
    let history = json!([
        visit("2024-06-15", 6.8, 63.5),
        visit("2024-07-15", 7.3, 65.0)
    ]);

    let (status, body) = post_json("/api/v1/growth/analyze/batch", &history).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = post_json("/api/v1/growth/trend", &history).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weight"], "increasing");
    assert_eq!(body["height"], "increasing");
    assert_eq!(body["latestDate"], "2024-07-15");
}

#[tokio::test]
async fn reference_endpoints() {
    let (status, body) = get_json("/api/v1/growth/reference/wfa/female/curves").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["indicator"], "weight-for-age");
    assert_eq!(body["sdLines"].as_array().unwrap().len(), 7);

    let (status, _) = get_json("/api/v1/growth/reference/bmi/female/curves").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get_json("/api/v1/growth/reference/coverage").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["series"].as_array().unwrap().len(), 8);
}

#[test]
fn invalid_reference_file_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, "indicator,sex,index,l,m,s\nwfa,female,0,1,3.2,0.14\n").unwrap();

    let config = Config {
        reference_path: Some(path),
        ..Config::default()
    };
    assert!(build_state(&config).is_err());
}
