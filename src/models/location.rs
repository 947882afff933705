//! Modelo de Location
//!
//! Puntos de atención (ciudades y aeropuertos) del catálogo estático.

use serde::{Deserialize, Serialize};

/// Tipo de localidad
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    City,
    Airport,
}

impl LocationKind {
    pub fn label(&self) -> &'static str {
        match self {
            LocationKind::City => "Ciudad",
            LocationKind::Airport => "Aeropuerto",
        }
    }
}

/// Localidad del directorio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    /// Código IATA, solo aeropuertos (ej: MIA, LAX)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Location {
    pub fn city(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: LocationKind::City,
            code: None,
        }
    }

    pub fn airport(id: &str, name: &str, code: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: LocationKind::Airport,
            code: Some(code.to_string()),
        }
    }

    /// `term` ya viene normalizado (trim + minúsculas)
    pub fn matches_term(&self, term: &str) -> bool {
        let name_match = self.name.to_lowercase().contains(term);
        let code_match = self
            .code
            .as_ref()
            .map(|code| code.to_lowercase().contains(term))
            .unwrap_or(false);
        name_match || code_match
    }
}
