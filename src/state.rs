//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los catálogos son inmutables; la búsqueda
//! del servidor usa la estrategia de invocación directa.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{FleetRepository, LocationRepository};
use crate::services::search_service::{DirectInvocationStrategy, VehicleSearch};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub locations: Arc<LocationRepository>,
    pub search: Arc<dyn VehicleSearch>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let locations = LocationRepository::new();
        let fleet = Arc::new(FleetRepository::new(locations.clone()));
        let search: Arc<dyn VehicleSearch> = Arc::new(DirectInvocationStrategy::new(fleet));

        Self {
            config,
            locations: Arc::new(locations),
            search,
        }
    }

    /// Sustituir la estrategia de búsqueda del servidor
    pub fn with_search(mut self, search: Arc<dyn VehicleSearch>) -> Self {
        self.search = search;
        self
    }
}
