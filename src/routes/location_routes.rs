use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::dto::search_dto::{LocationLookupQuery, LocationSearchQuery, LocationsResponse};
use crate::models::location::Location;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use crate::utils::validation::validate_not_empty;

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/locations", get(search_locations))
        .route("/locations/lookup", get(lookup_location))
}

/// Autocompletado de ciudades y aeropuertos
async fn search_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationSearchQuery>,
) -> Json<LocationsResponse> {
    let term = query.q.unwrap_or_default();
    Json(LocationsResponse {
        locations: state.locations.search(&term),
    })
}

/// Lookup exacto por nombre
async fn lookup_location(
    State(state): State<AppState>,
    Query(query): Query<LocationLookupQuery>,
) -> AppResult<Json<Location>> {
    query.validate()?;
    let name = query.name.unwrap_or_default();
    validate_not_empty(&name).map_err(|_| bad_request_error("name must not be blank"))?;

    state
        .locations
        .find_by_name(&name)
        .map(Json)
        .ok_or_else(|| not_found_error("Location", &name))
}
