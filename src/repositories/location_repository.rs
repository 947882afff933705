//! Repositorio de localidades
//!
//! Location Directory: catálogo estático de ciudades y aeropuertos.
//! Expone búsqueda por substring (nombre o código) y lookup exacto por nombre.

use lazy_static::lazy_static;

use crate::models::location::Location;

lazy_static! {
    static ref LOCATIONS: Vec<Location> = vec![
        // Ciudades
        Location::city("1", "Miami, Florida"),
        Location::city("2", "Los Angeles, California"),
        Location::city("3", "New York, New York"),
        Location::city("4", "Orlando, Florida"),
        Location::city("5", "Las Vegas, Nevada"),
        Location::city("6", "Chicago, Illinois"),
        Location::city("7", "San Francisco, California"),
        Location::city("8", "Houston, Texas"),
        Location::city("9", "Phoenix, Arizona"),
        Location::city("10", "Dallas, Texas"),
        // Aeropuertos
        Location::airport("11", "Aeropuerto Internacional de Miami (MIA)", "MIA"),
        Location::airport("12", "Aeropuerto Internacional de Los Angeles (LAX)", "LAX"),
        Location::airport("13", "Aeropuerto Internacional John F. Kennedy (JFK)", "JFK"),
        Location::airport("14", "Aeropuerto Internacional de Orlando (MCO)", "MCO"),
        Location::airport("15", "Aeropuerto Internacional McCarran (LAS)", "LAS"),
        Location::airport("16", "Aeropuerto Internacional O'Hare (ORD)", "ORD"),
        Location::airport("17", "Aeropuerto Internacional de San Francisco (SFO)", "SFO"),
        Location::airport("18", "Aeropuerto Intercontinental George Bush (IAH)", "IAH"),
        Location::airport("19", "Aeropuerto Internacional Sky Harbor (PHX)", "PHX"),
        Location::airport("20", "Aeropuerto Internacional de Dallas/Fort Worth (DFW)", "DFW"),
        Location::airport("21", "Aeropuerto Internacional de la Ciudad de Kansas (MCI)", "MCI"),
    ];
}

/// Directorio de localidades de solo lectura
#[derive(Debug, Clone)]
pub struct LocationRepository {
    locations: &'static [Location],
}

impl Default for LocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationRepository {
    pub fn new() -> Self {
        Self {
            locations: LOCATIONS.as_slice(),
        }
    }

    /// Búsqueda por nombre o código IATA, sin distinguir mayúsculas.
    /// Un término vacío o de solo espacios devuelve una lista vacía.
    pub fn search(&self, term: &str) -> Vec<Location> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        let matches: Vec<Location> = self
            .locations
            .iter()
            .filter(|location| location.matches_term(&term))
            .cloned()
            .collect();

        log::debug!("🔍 {} localidades para '{}'", matches.len(), term);
        matches
    }

    /// Lookup exacto por nombre
    pub fn find_by_name(&self, name: &str) -> Option<Location> {
        self.locations.iter().find(|loc| loc.name == name).cloned()
    }

    pub fn all(&self) -> &[Location] {
        self.locations
    }
}
