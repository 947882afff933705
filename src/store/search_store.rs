//! Store de búsqueda
//!
//! Fuente única de verdad para resultados y selección. Toda mutación pasa
//! por las operaciones nombradas; el ciclo asíncrono de la búsqueda se
//! expresa con `FetchOutcome` (Pending | Ok | Err).
//!
//! Máquina de estados por sesión: `Idle → Loading → {Success, Failure}`.
//! `clear_results` vuelve a `Idle` desde cualquier estado; `hydrate` entra
//! directamente en `Success`/`Failure`. La selección es ortogonal.

use rust_decimal::Decimal;

use crate::models::search::SearchParams;
use crate::models::vehicle::Vehicle;
use crate::services::search_service::VehicleSearch;
use crate::store::selectors::SearchSelectors;

/// Estado de búsqueda
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub results: Vec<Vehicle>,
    pub selected_vehicle: Option<Vehicle>,
    pub loading: bool,
    pub error: Option<String>,
    pub last_search_params: Option<SearchParams>,
}

/// Fase de una búsqueda asíncrona
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Pending,
    Ok(Vec<Vehicle>, SearchParams),
    Err(String),
}

/// Estado derivado del ciclo de búsqueda
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Default)]
pub struct SearchStore {
    state: SearchState,
    selectors: SearchSelectors,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Selección incondicional, sin comprobar pertenencia a `results`
    pub fn select_vehicle(&mut self, vehicle: Vehicle) {
        log::debug!("🚗 Vehículo seleccionado: {}", vehicle.id);
        self.state.selected_vehicle = Some(vehicle);
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_vehicle = None;
    }

    pub fn clear_results(&mut self) {
        self.state.results.clear();
        self.state.selected_vehicle = None;
        self.state.last_search_params = None;
        self.state.error = None;
    }

    /// Copia un payload obtenido por otro canal (render en servidor).
    /// No toca la selección.
    pub fn hydrate(&mut self, cars: Vec<Vehicle>, params: SearchParams, error: Option<String>) {
        self.state.results = cars;
        self.state.last_search_params = Some(params);
        self.state.loading = false;
        self.state.error = error;
    }

    pub fn begin_fetch(&mut self) {
        self.state.loading = true;
        self.state.error = None;
    }

    pub fn complete_fetch(&mut self, cars: Vec<Vehicle>, params: SearchParams) {
        self.state.loading = false;
        self.state.results = cars;
        self.state.last_search_params = Some(params);
        self.state.error = None;
    }

    pub fn fail_fetch(&mut self, message: String) {
        self.state.loading = false;
        self.state.error = Some(message);
        self.state.results.clear();
    }

    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Pending => self.begin_fetch(),
            FetchOutcome::Ok(cars, params) => self.complete_fetch(cars, params),
            FetchOutcome::Err(message) => self.fail_fetch(message),
        }
    }

    /// Búsqueda completa: Pending, espera de la estrategia y Ok/Err.
    /// Búsquedas solapadas no se cancelan: gana la última en resolverse.
    pub async fn fetch(&mut self, search: &dyn VehicleSearch, params: SearchParams) -> FetchStatus {
        self.apply(FetchOutcome::Pending);

        let outcome = match search.search(&params).await {
            Ok(cars) => FetchOutcome::Ok(cars, params),
            Err(e) => FetchOutcome::Err(e.to_string()),
        };

        self.apply(outcome);
        self.status()
    }

    pub fn status(&self) -> FetchStatus {
        if self.state.loading {
            FetchStatus::Loading
        } else if self.state.error.is_some() {
            FetchStatus::Failure
        } else if self.state.last_search_params.is_some() {
            FetchStatus::Success
        } else {
            FetchStatus::Idle
        }
    }

    pub fn selected_vehicle_price(&self) -> Decimal {
        self.selectors.selected_vehicle_price(&self.state)
    }

    pub fn has_selected_vehicle(&self) -> bool {
        self.selectors.has_selected_vehicle(&self.state)
    }

    pub fn selectors(&self) -> &SearchSelectors {
        &self.selectors
    }
}
