//! Modelo de Vehicle
//!
//! Vehículo de la flota de alquiler tal como lo entrega el Fleet Provider.
//! Los nombres de campo en JSON siguen camelCase (`pricePerDay`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vehículo disponible para alquiler
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_day: Decimal,
    pub currency: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    /// Ciudad o aeropuerto, texto libre comparado contra el Location Directory
    pub location: String,
}

impl Vehicle {
    /// Coincidencia de localidad: igualdad o substring en cualquier dirección,
    /// sin distinguir mayúsculas, contra el texto buscado completo o contra su
    /// localidad (lo anterior a la primera coma), de modo que "Miami, Florida"
    /// también cubre "Aeropuerto Internacional de Miami (MIA)".
    pub fn matches_location(&self, city: &str) -> bool {
        let wanted = city.trim().to_lowercase();
        if wanted.is_empty() {
            return false;
        }
        let own = self.location.to_lowercase();
        let locality = wanted.split(',').next().unwrap_or("").trim();

        let overlaps = |needle: &str| {
            !needle.is_empty() && (own == needle || own.contains(needle) || needle.contains(&own))
        };
        overlaps(&wanted) || overlaps(locality)
    }
}
