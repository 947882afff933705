use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;

use rental_search::config::environment::EnvironmentConfig;
use rental_search::models::search::SearchParams;
use rental_search::models::vehicle::Vehicle;
use rental_search::routes::create_router;
use rental_search::services::search_service::{SearchError, VehicleSearch};
use rental_search::state::AppState;

struct Unreachable;

#[async_trait::async_trait]
impl VehicleSearch for Unreachable {
    async fn search(&self, _params: &SearchParams) -> Result<Vec<Vehicle>, SearchError> {
        Err(SearchError::Transport("connection refused".to_string()))
    }
}

fn create_test_app() -> Router {
    create_router(AppState::new(EnvironmentConfig::default()))
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn ids(body: &serde_json::Value) -> Vec<String> {
    body["cars"]
        .as_array()
        .unwrap()
        .iter()
        .map(|car| car["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(create_test_app(), Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_search_cars_miami() {
    let (status, body) = send(
        create_test_app(),
        Method::GET,
        "/api/search-cars?city=Miami%2C%20Florida&pickupDate=2024-01-01&dropoffDate=2024-01-04",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["1", "2", "3", "4"]);
    assert_eq!(body["cars"][0]["pricePerDay"], 45.99);
    assert_eq!(body["cars"][0]["currency"], "USD");
}

#[tokio::test]
async fn test_search_cars_no_vehicles_in_city() {
    let (status, body) = send(
        create_test_app(),
        Method::GET,
        "/api/search-cars?city=Chicago%2C%20Illinois&pickupDate=2024-01-01&dropoffDate=2024-01-04",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn test_search_cars_missing_params() {
    let (status, body) = send(
        create_test_app(),
        Method::GET,
        "/api/search-cars?city=Miami&pickupDate=2024-01-01",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "cars": [] }));

    let (status, _) = send(
        create_test_app(),
        Method::GET,
        "/api/search-cars?city=&pickupDate=2024-01-01&dropoffDate=2024-01-04",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_cars_malformed_query() {
    let (status, body) = send(
        create_test_app(),
        Method::GET,
        "/api/search-cars?city=Miami&city=Orlando&pickupDate=2024-01-01&dropoffDate=2024-01-04",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "cars": [] }));
}

#[tokio::test]
async fn test_search_cars_rejects_other_methods() {
    let (status, body) = send(create_test_app(), Method::POST, "/api/search-cars").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, serde_json::json!({ "cars": [] }));
}

#[tokio::test]
async fn test_locations_autocomplete() {
    let (status, body) = send(create_test_app(), Method::GET, "/api/locations?q=mia").await;

    assert_eq!(status, StatusCode::OK);
    let locations = body["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 2);
    assert!(locations.iter().any(|l| l["type"] == "airport" && l["code"] == "MIA"));
    assert!(locations.iter().any(|l| l["type"] == "city"));

    let (_, body) = send(create_test_app(), Method::GET, "/api/locations?q=%20%20").await;
    assert!(body["locations"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_location_lookup() {
    let (status, body) = send(
        create_test_app(),
        Method::GET,
        "/api/locations/lookup?name=Miami%2C%20Florida",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "city");

    let (status, body) = send(
        create_test_app(),
        Method::GET,
        "/api/locations/lookup?name=Atlantis",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = send(create_test_app(), Method::GET, "/api/locations/lookup").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_results_redirects_without_params() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/results?city=Miami")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_results_payload() {
    let (status, body) = send(
        create_test_app(),
        Method::GET,
        "/results?city=Los%20Angeles%2C%20California&pickupDate=2024-03-10&dropoffDate=2024-03-12",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["5", "6"]);
    assert_eq!(body["params"]["city"], "Los Angeles, California");
    assert_eq!(body["params"]["pickupDate"], "2024-03-10");
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn test_search_failure_maps_to_bad_gateway() {
    let state = AppState::new(EnvironmentConfig::default()).with_search(Arc::new(Unreachable));
    let (status, body) = send(
        create_router(state),
        Method::GET,
        "/api/search-cars?city=Miami&pickupDate=2024-01-01&dropoffDate=2024-01-04",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["message"].as_str().unwrap().starts_with("Error al buscar vehículos"));
}

#[tokio::test]
async fn test_results_render_search_failure() {
    let state = AppState::new(EnvironmentConfig::default()).with_search(Arc::new(Unreachable));
    let (status, body) = send(
        create_router(state),
        Method::GET,
        "/results?city=Miami&pickupDate=2024-01-01&dropoffDate=2024-01-04",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["cars"].as_array().unwrap().is_empty());
    assert!(body["error"].as_str().unwrap().starts_with("Error al buscar vehículos"));
}
