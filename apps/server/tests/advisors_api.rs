use advisor_server::{api::app_router, build_state, config::Config};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

async fn build_test_router(config: Config) -> Router {
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

async fn in_memory_router() -> Router {
    build_test_router(Config::default()).await
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn john_doe() -> String {
    json!({
        "fullName": "John Doe",
        "sin": "123456789",
        "address": "123 Main St",
        "phoneNumber": "1234567890"
    })
    .to_string()
}

async fn create(app: &Router, full_name: &str, sin: &str) -> Value {
    let body = json!({ "fullName": full_name, "sin": sin }).to_string();
    let response = send(app, Method::POST, "/api/v1/advisors", Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}

#[tokio::test]
async fn create_returns_created_with_location_and_masked_fields() {
    let app = in_memory_router().await;

    let response = send(&app, Method::POST, "/api/v1/advisors", Some(john_doe())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(response.headers().contains_key("x-request-id"));

    let body = json_body(response).await;
    let id = body["id"].as_str().unwrap();
    assert_eq!(location, format!("/api/v1/advisors/{id}"));
    assert_eq!(body["fullName"], "John Doe");
    assert_eq!(body["sin"], "***-**-6789");
    assert_eq!(body["phoneNumber"], "***-***-7890");
    assert!(["Green", "Yellow", "Red"].contains(&body["healthStatus"].as_str().unwrap()));

    let fetched = send(&app, Method::GET, &location, None).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(json_body(fetched).await["id"], id);
}

#[tokio::test]
async fn duplicate_sin_is_unprocessable() {
    let app = in_memory_router().await;
    send(&app, Method::POST, "/api/v1/advisors", Some(john_doe())).await;

    let response = send(&app, Method::POST, "/api/v1/advisors", Some(john_doe())).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "application/problem+json"
    );
    let body = json_body(response).await;
    assert_eq!(body["title"], "Validation Error");
    assert_eq!(body["status"], 422);
    assert_eq!(
        body["detail"],
        "SIN must be unique. An advisor with this SIN already exists."
    );
}

#[tokio::test]
async fn invalid_and_missing_fields_are_unprocessable() {
    let app = in_memory_router().await;

    let short_sin = json!({ "fullName": "John Doe", "sin": "1234" }).to_string();
    let response = send(&app, Method::POST, "/api/v1/advisors", Some(short_sin)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await["detail"],
        "SIN is required, must be exactly 9 digits."
    );

    let missing_name = json!({ "sin": "123456789" }).to_string();
    let response = send(&app, Method::POST, "/api/v1/advisors", Some(missing_name)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await["detail"],
        "FullName is required and must be less than 255 characters."
    );

    let null_name = json!({ "fullName": null, "sin": "123456789" }).to_string();
    let response = send(&app, Method::POST, "/api/v1/advisors", Some(null_name)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await["detail"],
        "FullName is required and must be less than 255 characters."
    );

    let null_sin = json!({ "fullName": "John Doe", "sin": null }).to_string();
    let response = send(&app, Method::POST, "/api/v1/advisors", Some(null_sin)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await["detail"],
        "SIN is required, must be exactly 9 digits."
    );
}

#[tokio::test]
async fn null_and_malformed_bodies_are_bad_requests() {
    let app = in_memory_router().await;

    let response = send(&app, Method::POST, "/api/v1/advisors", Some("null".into())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["title"], "Request Error");
    assert_eq!(body["detail"], "AdvisorProfile cannot be null.");

    let response = send(&app, Method::POST, "/api/v1/advisors", Some("{not json".into())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/advisors")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from(john_doe()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let app = in_memory_router().await;
    let missing = "/api/v1/advisors/00000000-0000-4000-8000-000000000000";

    let response = send(&app, Method::GET, missing, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["title"], "Not Found");

    let response = send(&app, Method::PUT, missing, Some(john_doe())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for _ in 0..2 {
        let response = send(&app, Method::DELETE, missing, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let response = send(&app, Method::GET, "/api/v1/advisors/not-a-uuid", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_health_status() {
    let app = in_memory_router().await;
    let created = create(&app, "John Doe", "123456789").await;
    let uri = format!("/api/v1/advisors/{}", created["id"].as_str().unwrap());

    let body = json!({
        "id": "00000000-0000-4000-8000-000000000000",
        "fullName": "John Q. Doe",
        "sin": "123456789",
        "phoneNumber": "4165550100"
    })
    .to_string();
    let response = send(&app, Method::PUT, &uri, Some(body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["fullName"], "John Q. Doe");
    assert_eq!(updated["phoneNumber"], "***-***-0100");
    assert_eq!(updated["healthStatus"], created["healthStatus"]);
}

#[tokio::test]
async fn update_onto_another_advisors_sin_is_unprocessable() {
    let app = in_memory_router().await;
    let first = create(&app, "John Doe", "123456789").await;
    create(&app, "Jane Smith", "987654321").await;

    let uri = format!("/api/v1/advisors/{}", first["id"].as_str().unwrap());
    let body = json!({ "fullName": "John Doe", "sin": "987654321" }).to_string();
    let response = send(&app, Method::PUT, &uri, Some(body)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_returns_the_removed_advisor() {
    let app = in_memory_router().await;
    let created = create(&app, "John Doe", "123456789").await;
    let uri = format!("/api/v1/advisors/{}", created["id"].as_str().unwrap());

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["id"], created["id"]);

    let response = send(&app, Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_with_and_without_paging() {
    let app = in_memory_router().await;
    for i in 1..=5 {
        create(&app, &format!("E{i}"), &format!("{i:09}")).await;
    }

    let response = send(&app, Method::GET, "/api/v1/advisors", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 5);

    let response = send(&app, Method::GET, "/api/v1/advisors?pageNumber=1&pageSize=2", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = json_body(response).await;
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(page["totalRecords"], 5);
    assert_eq!(page["pageNumber"], 1);
    assert_eq!(page["pageSize"], 2);

    let response = send(&app, Method::GET, "/api/v1/advisors?pageNumber=3&pageSize=2", None).await;
    let page = json_body(response).await;
    let names: Vec<&str> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["fullName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["E5"]);

    let response = send(&app, Method::GET, "/api/v1/advisors?pageNumber=9", None).await;
    let page = json_body(response).await;
    assert!(page["items"].as_array().unwrap().is_empty());
    assert_eq!(page["pageSize"], 10);
    assert_eq!(page["totalRecords"], 5);
}

#[tokio::test]
async fn bad_paging_parameters() {
    let app = in_memory_router().await;

    let response = send(&app, Method::GET, "/api/v1/advisors?pageNumber=0&pageSize=2", None).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response).await["detail"],
        "pageNumber must be greater than 0."
    );

    let response = send(&app, Method::GET, "/api/v1/advisors?pageSize=101", None).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send(&app, Method::GET, "/api/v1/advisors?pageNumber=abc", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_endpoints_and_openapi_document() {
    let app = in_memory_router().await;

    for uri in ["/api/v1/healthz", "/api/v1/readyz"] {
        let response = send(&app, Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = send(&app, Method::GET, "/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = json_body(response).await;
    assert!(doc["paths"]["/api/v1/advisors"].is_object());
    assert!(doc["paths"]["/api/v1/advisors/{id}"].is_object());
}

#[tokio::test]
async fn sqlite_backend_serves_the_same_routes() {
    let tmp = tempdir().unwrap();
    let config = Config {
        db_path: Some(tmp.path().join("advisors.db").to_string_lossy().into_owned()),
        ..Config::default()
    };
    let app = build_test_router(config).await;

    let created = create(&app, "John Doe", "123456789").await;
    assert_eq!(created["sin"], "***-**-6789");

    let response = send(&app, Method::POST, "/api/v1/advisors", Some(john_doe())).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let long_phone =
        json!({ "fullName": "Jane Smith", "sin": "987654321", "phoneNumber": "12345678901" })
            .to_string();
    let response = send(&app, Method::POST, "/api/v1/advisors", Some(long_phone)).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = send(&app, Method::GET, "/api/v1/advisors?pageNumber=1&pageSize=2", None).await;
    let page = json_body(response).await;
    assert_eq!(page["totalRecords"], 1);

    let uri = format!("/api/v1/advisors/{}", created["id"].as_str().unwrap());
    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
