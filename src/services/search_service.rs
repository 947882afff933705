//! Servicio de búsqueda de vehículos
//!
//! Abstracción sobre el contexto de ejecución: `DirectInvocationStrategy`
//! consulta el Fleet Provider en proceso (render en servidor) y
//! `RemoteCallStrategy` llama al endpoint `/api/search-cars` (cliente).
//! Ambas devuelven el mismo resultado para los mismos parámetros; el
//! llamador elige la estrategia según su propio contexto.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::dto::search_dto::SearchCarsResponse;
use crate::models::search::SearchParams;
use crate::models::vehicle::Vehicle;
use crate::repositories::fleet_repository::FleetRepository;

/// Mensaje genérico de fallo de búsqueda
pub const SEARCH_FAILED_MESSAGE: &str = "Error al buscar vehículos";

/// Errores de la búsqueda
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Error al buscar vehículos (HTTP {0})")]
    Status(u16),

    #[error("Error al buscar vehículos: {0}")]
    Transport(String),

    #[error("Error al buscar vehículos: respuesta inválida ({0})")]
    Decode(String),
}

/// Estrategia de búsqueda
#[async_trait]
pub trait VehicleSearch: Send + Sync {
    async fn search(&self, params: &SearchParams) -> Result<Vec<Vehicle>, SearchError>;
}

/// Invocación directa del Fleet Provider, sin salto de red
#[derive(Debug, Clone)]
pub struct DirectInvocationStrategy {
    fleet: Arc<FleetRepository>,
}

impl DirectInvocationStrategy {
    pub fn new(fleet: Arc<FleetRepository>) -> Self {
        Self { fleet }
    }
}

#[async_trait]
impl VehicleSearch for DirectInvocationStrategy {
    async fn search(&self, params: &SearchParams) -> Result<Vec<Vehicle>, SearchError> {
        log::debug!("🔍 Búsqueda directa: {:?}", params);
        Ok(self.fleet.find_available(params))
    }
}

/// Llamada HTTP al endpoint de búsqueda del servidor
#[derive(Debug, Clone)]
pub struct RemoteCallStrategy {
    client: Client,
    base_url: String,
}

impl RemoteCallStrategy {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL completa de búsqueda con los parámetros codificados
    pub fn search_url(&self, params: &SearchParams) -> String {
        format!(
            "{}/api/search-cars?city={}&pickupDate={}&dropoffDate={}",
            self.base_url,
            urlencoding::encode(&params.city),
            urlencoding::encode(&params.pickup_date),
            urlencoding::encode(&params.dropoff_date),
        )
    }
}

#[async_trait]
impl VehicleSearch for RemoteCallStrategy {
    async fn search(&self, params: &SearchParams) -> Result<Vec<Vehicle>, SearchError> {
        let url = self.search_url(params);
        log::info!("🌐 Búsqueda remota: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("❌ Búsqueda remota falló con estado {}", status);
            return Err(SearchError::Status(status.as_u16()));
        }

        let body: SearchCarsResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        log::info!("✅ {} vehículos recibidos", body.cars.len());
        Ok(body.cars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_direct_strategy_uses_fleet() {
        let strategy = DirectInvocationStrategy::new(Arc::new(FleetRepository::default()));
        let params = SearchParams::new("Los Angeles, California", "2024-01-01", "2024-01-04");

        let cars = strategy.search(&params).await.unwrap();
        let ids: Vec<&str> = cars.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6"]);
    }

    #[test]
    fn test_search_url_encodes_params() {
        let strategy =
            RemoteCallStrategy::new("http://localhost:3000/", Duration::from_secs(5)).unwrap();
        let params = SearchParams::new("Miami, Florida", "2024-01-01", "2024-01-04");

        assert_eq!(
            strategy.search_url(&params),
            "http://localhost:3000/api/search-cars?city=Miami%2C%20Florida&pickupDate=2024-01-01&dropoffDate=2024-01-04"
        );
    }

    #[test]
    fn test_error_messages_are_human_readable() {
        assert!(SearchError::Status(400).to_string().starts_with(SEARCH_FAILED_MESSAGE));
        assert!(SearchError::Transport("timeout".into())
            .to_string()
            .starts_with(SEARCH_FAILED_MESSAGE));
    }
}
