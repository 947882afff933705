//! Repositorio de flota
//!
//! Fleet Provider: catálogo en memoria de vehículos con su localidad.
//! Filtra por localidad y disponibilidad; una ciudad desconocida o fechas
//! ilegibles devuelven una lista vacía (no es un error).

use lazy_static::lazy_static;
use rust_decimal::Decimal;

use crate::models::search::SearchParams;
use crate::models::vehicle::Vehicle;
use crate::repositories::location_repository::LocationRepository;
use crate::utils::validation::{parse_rental_instant, validate_positive};

fn vehicle(
    id: &str,
    name: &str,
    cents_per_day: i64,
    category: &str,
    features: &[&str],
    location: &str,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        price_per_day: Decimal::new(cents_per_day, 2),
        currency: "USD".to_string(),
        available: true,
        image: None,
        category: Some(category.to_string()),
        features: Some(features.iter().map(|f| f.to_string()).collect()),
        location: location.to_string(),
    }
}

lazy_static! {
    static ref FLEET: Vec<Vehicle> = vec![
        vehicle(
            "1",
            "Toyota Corolla 2024",
            4599,
            "Económico",
            &["Aire acondicionado", "Bluetooth", "4 puertas"],
            "Miami, Florida",
        ),
        vehicle(
            "2",
            "Honda Civic 2024",
            4999,
            "Económico",
            &["Aire acondicionado", "Bluetooth", "Cámara de reversa"],
            "Miami, Florida",
        ),
        vehicle(
            "3",
            "Nissan Sentra 2024",
            4799,
            "Económico",
            &["Aire acondicionado", "Bluetooth", "Sistema de navegación"],
            "Miami, Florida",
        ),
        vehicle(
            "4",
            "Chevrolet Malibu 2024",
            5299,
            "Intermedio",
            &["Aire acondicionado", "Bluetooth", "Cámara de reversa", "Sistema de navegación"],
            "Aeropuerto Internacional de Miami (MIA)",
        ),
        vehicle(
            "5",
            "Ford Fusion 2024",
            5499,
            "Intermedio",
            &["Aire acondicionado", "Bluetooth", "Cámara de reversa"],
            "Los Angeles, California",
        ),
        vehicle(
            "6",
            "Hyundai Elantra 2024",
            4899,
            "Económico",
            &["Aire acondicionado", "Bluetooth", "4 puertas"],
            "Aeropuerto Internacional de Los Angeles (LAX)",
        ),
    ];
}

/// Proveedor de flota sobre un catálogo fijo
#[derive(Debug, Clone)]
pub struct FleetRepository {
    vehicles: Vec<Vehicle>,
    locations: LocationRepository,
}

impl Default for FleetRepository {
    fn default() -> Self {
        Self::new(LocationRepository::new())
    }
}

impl FleetRepository {
    pub fn new(locations: LocationRepository) -> Self {
        Self::with_vehicles(locations, FLEET.clone())
    }

    /// Catálogo explícito; los vehículos con precio no positivo se descartan
    pub fn with_vehicles(locations: LocationRepository, vehicles: Vec<Vehicle>) -> Self {
        let vehicles = vehicles
            .into_iter()
            .filter(|v| match validate_positive(v.price_per_day) {
                Ok(()) => true,
                Err(_) => {
                    log::warn!("⚠️ Vehículo {} descartado: precio por día no positivo", v.id);
                    false
                }
            })
            .collect();

        Self { vehicles, locations }
    }

    /// Vehículos disponibles en la localidad buscada
    pub fn find_available(&self, params: &SearchParams) -> Vec<Vehicle> {
        if self.locations.find_by_name(&params.city).is_none() {
            log::info!("📍 Localidad desconocida: '{}'", params.city);
            return Vec::new();
        }

        if parse_rental_instant(&params.pickup_date).is_err()
            || parse_rental_instant(&params.dropoff_date).is_err()
        {
            log::info!(
                "📅 Fechas inválidas: {} - {}",
                params.pickup_date,
                params.dropoff_date
            );
            return Vec::new();
        }

        let cars: Vec<Vehicle> = self
            .vehicles
            .iter()
            .filter(|car| car.available && car.matches_location(&params.city))
            .cloned()
            .collect();

        log::info!("🚗 {} vehículos disponibles en '{}'", cars.len(), params.city);
        cars
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }
}
