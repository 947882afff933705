//! Formulario de búsqueda
//!
//! Estado del formulario de entrada: texto de ciudad con sugerencias del
//! Location Directory, fechas, y el envío que limpia el store y produce la
//! URL de resultados.

use crate::models::location::Location;
use crate::models::search::SearchParams;
use crate::repositories::location_repository::LocationRepository;
use crate::store::search_store::SearchStore;

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    city: String,
    pickup_date: String,
    dropoff_date: String,
    picked: Option<Location>,
    suggestions: Vec<Location>,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texto tecleado: descarta la sugerencia elegida y recalcula sugerencias
    pub fn type_city(&mut self, text: &str, directory: &LocationRepository) -> &[Location] {
        self.city = text.to_string();
        self.picked = None;
        self.suggestions = if text.is_empty() {
            Vec::new()
        } else {
            directory.search(text)
        };
        &self.suggestions
    }

    pub fn pick(&mut self, location: Location) {
        self.city = location.name.clone();
        self.picked = Some(location);
        self.suggestions.clear();
    }

    pub fn set_dates(&mut self, pickup_date: &str, dropoff_date: &str) {
        self.pickup_date = pickup_date.to_string();
        self.dropoff_date = dropoff_date.to_string();
    }

    pub fn suggestions(&self) -> &[Location] {
        &self.suggestions
    }

    /// Parámetros finales: el nombre de la sugerencia elegida o el texto
    /// tecleado; `None` si falta algún campo
    pub fn params(&self) -> Option<SearchParams> {
        let city = self
            .picked
            .as_ref()
            .map(|location| location.name.as_str())
            .unwrap_or(self.city.as_str());

        if city.is_empty() || self.pickup_date.is_empty() || self.dropoff_date.is_empty() {
            return None;
        }
        Some(SearchParams::new(city, &self.pickup_date, &self.dropoff_date))
    }

    /// Envío: limpia el estado previo y devuelve la URL de resultados
    pub fn submit(&self, store: &mut SearchStore) -> Option<String> {
        let params = self.params()?;
        store.clear_results();
        Some(results_url(&params))
    }
}

/// `/results?city=…&pickupDate=…&dropoffDate=…`
pub fn results_url(params: &SearchParams) -> String {
    format!(
        "/results?city={}&pickupDate={}&dropoffDate={}",
        urlencoding::encode(&params.city),
        urlencoding::encode(&params.pickup_date),
        urlencoding::encode(&params.dropoff_date),
    )
}
