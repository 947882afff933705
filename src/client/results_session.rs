//! Sesión de la página de resultados
//!
//! Lado cliente del flujo de resultados: hidrata el store con el payload del
//! servidor una sola vez por payload distinto, gestiona la selección y el
//! click fuera de la lista y del resumen, y deriva la vista a mostrar.

use crate::dto::search_dto::ResultsPayload;
use crate::models::search::SearchParams;
use crate::models::vehicle::Vehicle;
use crate::services::pricing_service::{PricingService, RentalSummary};
use crate::services::search_service::VehicleSearch;
use crate::store::search_store::{FetchStatus, SearchStore};

/// Punto de entrada de la búsqueda
pub const SEARCH_ENTRY_PATH: &str = "/";

/// Destino de un click en la página
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    VehicleList,
    SummaryPanel,
    /// Botones y otros controles interactivos
    Control,
    Outside,
}

/// Vista derivada del estado
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    Loading,
    Error { message: String },
    Empty { city: String },
    Listing { cars: Vec<Vehicle>, selected_id: Option<String> },
}

#[derive(Default)]
pub struct ResultsSession {
    store: SearchStore,
    payload: Option<ResultsPayload>,
    hydrated: Option<String>,
}

impl ResultsSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: SearchStore) -> Self {
        Self {
            store,
            payload: None,
            hydrated: None,
        }
    }

    pub fn store(&self) -> &SearchStore {
        &self.store
    }

    /// Hidrata el store con el payload del servidor. Devuelve `false` si ese
    /// mismo payload ya se había aplicado.
    pub fn hydrate(&mut self, payload: ResultsPayload) -> bool {
        let fingerprint = payload.fingerprint();
        if self.hydrated.as_deref() == Some(fingerprint.as_str()) {
            log::debug!("💧 Payload {} ya hidratado", fingerprint);
            return false;
        }

        self.store.hydrate(
            payload.cars.clone(),
            payload.params.clone(),
            payload.error.clone(),
        );
        log::debug!("💧 Store hidratado con payload {}", fingerprint);
        self.hydrated = Some(fingerprint);
        self.payload = Some(payload);
        true
    }

    pub fn select(&mut self, vehicle: Vehicle) {
        self.store.select_vehicle(vehicle);
    }

    /// Selecciona por id entre los vehículos visibles
    pub fn select_by_id(&mut self, id: &str) -> bool {
        let found = self.visible_cars().into_iter().find(|car| car.id == id);
        match found {
            Some(car) => {
                self.store.select_vehicle(car);
                true
            }
            None => false,
        }
    }

    pub fn cancel_selection(&mut self) {
        self.store.clear_selection();
    }

    /// Un click fuera de la lista y del resumen cancela la selección.
    /// Devuelve `true` si se canceló.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if !self.store.has_selected_vehicle() {
            return false;
        }
        match target {
            ClickTarget::Outside => {
                self.store.clear_selection();
                true
            }
            ClickTarget::VehicleList | ClickTarget::SummaryPanel | ClickTarget::Control => false,
        }
    }

    /// Abandona la búsqueda actual y devuelve la ruta de entrada
    pub fn new_search(&mut self) -> &'static str {
        self.store.clear_results();
        self.hydrated = None;
        self.payload = None;
        SEARCH_ENTRY_PATH
    }

    /// Nueva búsqueda desde el cliente, sin recargar la página
    /// El payload hidratado deja de ser la fuente de la vista
    pub async fn refresh(&mut self, search: &dyn VehicleSearch, params: SearchParams) -> FetchStatus {
        self.payload = None;
        self.store.fetch(search, params).await
    }

    /// Parámetros mostrados: los últimos del store, o los del payload
    pub fn params(&self) -> Option<&SearchParams> {
        self.store
            .state()
            .last_search_params
            .as_ref()
            .or(self.payload.as_ref().map(|payload| &payload.params))
    }

    /// Coches del store; los del payload sólo mientras el store no se ha
    /// hidratado ni buscado
    fn visible_cars(&self) -> Vec<Vehicle> {
        if self.store.status() != FetchStatus::Idle {
            return self.store.state().results.clone();
        }
        self.payload
            .as_ref()
            .map(|payload| payload.cars.clone())
            .unwrap_or_default()
    }

    pub fn view(&self) -> ResultsView {
        let state = self.store.state();
        if state.loading {
            return ResultsView::Loading;
        }
        if let Some(message) = &state.error {
            return ResultsView::Error {
                message: message.clone(),
            };
        }

        let cars = self.visible_cars();
        if cars.is_empty() {
            return ResultsView::Empty {
                city: self.params().map(|p| p.city.clone()).unwrap_or_default(),
            };
        }

        ResultsView::Listing {
            cars,
            selected_id: state.selected_vehicle.as_ref().map(|car| car.id.clone()),
        }
    }

    /// Resumen de reserva; requiere vehículo seleccionado y parámetros
    pub fn summary(&self) -> Option<RentalSummary> {
        let vehicle = self.store.state().selected_vehicle.as_ref()?;
        let params = self.params()?;
        Some(PricingService::summarize(vehicle, params))
    }
}
