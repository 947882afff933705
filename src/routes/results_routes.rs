use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};

use crate::controllers::results_controller::{ResultsController, ResultsOutcome};
use crate::models::search::SearchQuery;
use crate::state::AppState;

pub fn create_results_router() -> Router<AppState> {
    Router::new().route("/results", get(results_page))
}

/// Página de resultados: payload de hidratación o redirección al formulario
async fn results_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let controller = ResultsController::new(state.search.clone());

    match controller.prepare(query).await {
        ResultsOutcome::Redirect(path) => Redirect::temporary(path).into_response(),
        ResultsOutcome::Render(payload) => Json(payload).into_response(),
    }
}
