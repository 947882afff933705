use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::dto::search_dto::SearchCarsResponse;
use crate::models::search::SearchQuery;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_search_router() -> Router<AppState> {
    Router::new().route("/search-cars", get(search_cars).fallback(method_not_allowed))
}

async fn search_cars(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<SearchCarsResponse>), AppError> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(e) => {
            log::warn!("⚠️ search-cars con query inválida: {}", e);
            return Ok((StatusCode::BAD_REQUEST, Json(SearchCarsResponse::empty())));
        }
    };

    let params = match query.into_params() {
        Ok(params) => params,
        Err(e) => {
            log::warn!("⚠️ search-cars sin parámetros requeridos: {}", e);
            return Ok((StatusCode::BAD_REQUEST, Json(SearchCarsResponse::empty())));
        }
    };

    let cars = state.search.search(&params).await?;
    Ok((StatusCode::OK, Json(SearchCarsResponse { cars })))
}

async fn method_not_allowed() -> (StatusCode, Json<SearchCarsResponse>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(SearchCarsResponse::empty()))
}
