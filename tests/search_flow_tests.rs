use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use rust_decimal::Decimal;

use rental_search::client::results_session::{ClickTarget, ResultsSession, ResultsView};
use rental_search::client::search_form::SearchForm;
use rental_search::config::environment::EnvironmentConfig;
use rental_search::controllers::results_controller::{ResultsController, ResultsOutcome};
use rental_search::models::search::{SearchParams, SearchQuery};
use rental_search::repositories::{FleetRepository, LocationRepository};
use rental_search::routes::create_router;
use rental_search::services::search_service::{
    DirectInvocationStrategy, RemoteCallStrategy, SearchError, VehicleSearch,
};
use rental_search::state::AppState;
use rental_search::store::search_store::{FetchStatus, SearchStore};

/// Levanta un servidor en un puerto efímero y devuelve su URL base
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn query(city: &str, pickup: &str, dropoff: &str) -> SearchQuery {
    SearchQuery {
        city: Some(city.to_string()),
        pickup_date: Some(pickup.to_string()),
        dropoff_date: Some(dropoff.to_string()),
    }
}

#[tokio::test]
async fn test_remote_and_direct_strategies_agree() {
    let base_url = spawn_server(create_router(AppState::new(EnvironmentConfig::default()))).await;

    let remote = RemoteCallStrategy::new(&base_url, Duration::from_secs(5)).unwrap();
    let direct = DirectInvocationStrategy::new(Arc::new(FleetRepository::default()));

    for city in ["Miami, Florida", "Aeropuerto Internacional de Los Angeles (LAX)", "Chicago, Illinois"] {
        let params = SearchParams::new(city, "2024-01-01", "2024-01-04");
        let from_remote = remote.search(&params).await.unwrap();
        let from_direct = direct.search(&params).await.unwrap();
        assert_eq!(from_remote, from_direct, "city: {}", city);
    }
}

#[tokio::test]
async fn test_remote_strategy_maps_error_status() {
    let app = Router::new().route(
        "/api/search-cars",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_server(app).await;
    let remote = RemoteCallStrategy::new(&base_url, Duration::from_secs(5)).unwrap();

    let result = remote
        .search(&SearchParams::new("Miami, Florida", "2024-01-01", "2024-01-04"))
        .await;

    match result {
        Err(SearchError::Status(code)) => assert_eq!(code, 500),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_store_fetch_failure_keeps_message() {
    let app = Router::new().route(
        "/api/search-cars",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let base_url = spawn_server(app).await;
    let remote = RemoteCallStrategy::new(&base_url, Duration::from_secs(5)).unwrap();

    let mut store = SearchStore::new();
    let status = store
        .fetch(&remote, SearchParams::new("Miami, Florida", "2024-01-01", "2024-01-04"))
        .await;

    assert_eq!(status, FetchStatus::Failure);
    assert!(!store.state().loading);
    let message = store.state().error.clone().unwrap();
    assert!(message.starts_with("Error al buscar vehículos"));
}

#[tokio::test]
async fn test_search_to_summary_flow() {
    // Formulario: sugerencias y envío
    let directory = LocationRepository::new();
    let mut form = SearchForm::new();
    let suggestions = form.type_city("miami", &directory).to_vec();
    let city = suggestions
        .into_iter()
        .find(|location| location.name == "Miami, Florida")
        .unwrap();
    form.pick(city);
    form.set_dates("2024-01-01", "2024-01-04");

    let mut store = SearchStore::new();
    let url = form.submit(&mut store).unwrap();
    assert_eq!(
        url,
        "/results?city=Miami%2C%20Florida&pickupDate=2024-01-01&dropoffDate=2024-01-04"
    );

    // Servidor: búsqueda directa y payload
    let search: Arc<dyn VehicleSearch> =
        Arc::new(DirectInvocationStrategy::new(Arc::new(FleetRepository::default())));
    let controller = ResultsController::new(search);
    let payload = match controller
        .prepare(query("Miami, Florida", "2024-01-01", "2024-01-04"))
        .await
    {
        ResultsOutcome::Render(payload) => payload,
        ResultsOutcome::Redirect(path) => panic!("unexpected redirect to {}", path),
    };

    // Cliente: hidratación, selección y resumen
    let mut session = ResultsSession::with_store(store);
    assert!(session.hydrate(payload.clone()));
    assert!(!session.hydrate(payload));

    match session.view() {
        ResultsView::Listing { cars, selected_id } => {
            let ids: Vec<&str> = cars.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3", "4"]);
            assert_eq!(selected_id, None);
        }
        other => panic!("unexpected view: {:?}", other),
    }

    assert!(session.select_by_id("1"));
    assert!(!session.click(ClickTarget::VehicleList));
    assert_eq!(session.store().selected_vehicle_price(), Decimal::new(4599, 2));

    let summary = session.summary().unwrap();
    assert_eq!(summary.quote.days, 3);
    assert_eq!(summary.quote.total, Decimal::new(13797, 2));
    assert_eq!(summary.quote.formatted_total(), "USD 137.97");

    assert!(session.click(ClickTarget::Outside));
    assert!(session.summary().is_none());

    assert_eq!(session.new_search(), "/");
    assert!(session.store().state().results.is_empty());
}

#[tokio::test]
async fn test_results_for_unknown_city_render_empty() {
    let search: Arc<dyn VehicleSearch> =
        Arc::new(DirectInvocationStrategy::new(Arc::new(FleetRepository::default())));
    let controller = ResultsController::new(search);

    let payload = match controller
        .prepare(query("Atlantis", "2024-01-01", "2024-01-04"))
        .await
    {
        ResultsOutcome::Render(payload) => payload,
        ResultsOutcome::Redirect(path) => panic!("unexpected redirect to {}", path),
    };

    let mut session = ResultsSession::new();
    session.hydrate(payload);
    assert_eq!(
        session.view(),
        ResultsView::Empty {
            city: "Atlantis".to_string()
        }
    );
}
