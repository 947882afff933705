use std::sync::Arc;

use crate::client::results_session::SEARCH_ENTRY_PATH;
use crate::dto::search_dto::ResultsPayload;
use crate::models::search::SearchQuery;
use crate::services::search_service::VehicleSearch;

/// Resultado de preparar la página de resultados
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsOutcome {
    /// Faltan parámetros: volver al formulario sin mostrar error técnico
    Redirect(&'static str),
    Render(ResultsPayload),
}

pub struct ResultsController {
    search: Arc<dyn VehicleSearch>,
}

impl ResultsController {
    pub fn new(search: Arc<dyn VehicleSearch>) -> Self {
        Self { search }
    }

    /// Carga en tiempo de petición. Un fallo de búsqueda se convierte en
    /// payload renderizable con la lista vacía y el mensaje de error.
    pub async fn prepare(&self, query: SearchQuery) -> ResultsOutcome {
        let params = match query.into_params() {
            Ok(params) => params,
            Err(e) => {
                log::info!("↩️ Parámetros incompletos, redirigiendo a {}: {}", SEARCH_ENTRY_PATH, e);
                return ResultsOutcome::Redirect(SEARCH_ENTRY_PATH);
            }
        };

        match self.search.search(&params).await {
            Ok(cars) => {
                log::info!("✅ {} vehículos para la página de resultados", cars.len());
                ResultsOutcome::Render(ResultsPayload::success(cars, params))
            }
            Err(e) => {
                log::error!("❌ Error en la búsqueda de resultados: {}", e);
                ResultsOutcome::Render(ResultsPayload::failure(params, e.to_string()))
            }
        }
    }
}
