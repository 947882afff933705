//! Parámetros de búsqueda
//!
//! `SearchQuery` es la forma cruda que llega por query string (todos los
//! campos opcionales); `SearchParams` es la tupla ya validada que recorre
//! todo el ciclo de resultados.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Tupla (ciudad, recogida, devolución) de una búsqueda
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub city: String,
    pub pickup_date: String,
    pub dropoff_date: String,
}

impl SearchParams {
    pub fn new(city: &str, pickup_date: &str, dropoff_date: &str) -> Self {
        Self {
            city: city.to_string(),
            pickup_date: pickup_date.to_string(),
            dropoff_date: dropoff_date.to_string(),
        }
    }
}

/// Query string de `/api/search-cars` y `/results`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[validate(required, length(min = 1))]
    pub city: Option<String>,

    #[validate(required, length(min = 1))]
    pub pickup_date: Option<String>,

    #[validate(required, length(min = 1))]
    pub dropoff_date: Option<String>,
}

impl SearchQuery {
    /// Validar presencia de los tres parámetros y construir `SearchParams`
    pub fn into_params(self) -> Result<SearchParams, ValidationErrors> {
        self.validate()?;

        match (self.city, self.pickup_date, self.dropoff_date) {
            (Some(city), Some(pickup_date), Some(dropoff_date)) => Ok(SearchParams {
                city,
                pickup_date,
                dropoff_date,
            }),
            _ => Err(ValidationErrors::new()),
        }
    }
}
