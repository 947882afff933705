use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::location::Location;
use crate::models::search::SearchParams;
use crate::models::vehicle::Vehicle;

// Response de /api/search-cars
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCarsResponse {
    pub cars: Vec<Vehicle>,
}

impl SearchCarsResponse {
    pub fn empty() -> Self {
        Self { cars: Vec::new() }
    }
}

// Payload servidor -> cliente para hidratar el store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsPayload {
    pub cars: Vec<Vehicle>,
    pub params: SearchParams,
    pub error: Option<String>,
}

impl ResultsPayload {
    pub fn success(cars: Vec<Vehicle>, params: SearchParams) -> Self {
        Self { cars, params, error: None }
    }

    pub fn failure(params: SearchParams, message: String) -> Self {
        Self {
            cars: Vec::new(),
            params,
            error: Some(message),
        }
    }

    /// Huella MD5 del payload serializado; identifica payloads distintos
    pub fn fingerprint(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        format!("{:x}", md5::compute(bytes))
    }
}

// Query de autocompletado
#[derive(Debug, Default, Deserialize)]
pub struct LocationSearchQuery {
    pub q: Option<String>,
}

// Query de lookup exacto
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LocationLookupQuery {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}

// Response de autocompletado
#[derive(Debug, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
}
