//! Servicio de precios
//!
//! Duración del alquiler y precio total a partir del vehículo seleccionado
//! y el rango de fechas. Función pura, sin conversión de divisas.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::search::SearchParams;
use crate::models::vehicle::Vehicle;
use crate::utils::validation::{format_display_date, parse_rental_instant};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Cotización de un alquiler
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalQuote {
    pub days: i64,
    /// La duración calculada era cero o negativa y se aplicó el mínimo de 1 día
    pub minimum_applied: bool,
    pub price_per_day: Decimal,
    pub total: Decimal,
    pub currency: String,
}

impl RentalQuote {
    /// Total con dos decimales en la divisa del vehículo (ej: "USD 150.00")
    pub fn formatted_total(&self) -> String {
        format!("{} {:.2}", self.currency, self.total)
    }
}

/// Resumen de reserva mostrado junto a la lista
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalSummary {
    pub vehicle_name: String,
    pub category: Option<String>,
    pub vehicle_location: String,
    pub city: String,
    pub pickup: String,
    pub dropoff: String,
    pub quote: RentalQuote,
}

pub struct PricingService;

impl PricingService {
    /// Días de alquiler: techo de (devolución - recogida) en días, con mínimo 1.
    /// Devuelve `(días, mínimo_aplicado)`.
    pub fn rental_days(pickup_date: &str, dropoff_date: &str) -> (i64, bool) {
        let calculated = match (
            parse_rental_instant(pickup_date),
            parse_rental_instant(dropoff_date),
        ) {
            (Ok(pickup), Ok(dropoff)) => {
                let seconds = (dropoff - pickup).num_seconds();
                if seconds > 0 {
                    (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
                } else {
                    0
                }
            }
            _ => 0,
        };

        if calculated <= 0 {
            (1, true)
        } else {
            (calculated, false)
        }
    }

    pub fn quote(vehicle: &Vehicle, params: &SearchParams) -> RentalQuote {
        let (days, minimum_applied) = Self::rental_days(&params.pickup_date, &params.dropoff_date);
        let total = (vehicle.price_per_day * Decimal::from(days)).round_dp(2);

        RentalQuote {
            days,
            minimum_applied,
            price_per_day: vehicle.price_per_day,
            total,
            currency: vehicle.currency.clone(),
        }
    }

    pub fn summarize(vehicle: &Vehicle, params: &SearchParams) -> RentalSummary {
        RentalSummary {
            vehicle_name: vehicle.name.clone(),
            category: vehicle.category.clone(),
            vehicle_location: vehicle.location.clone(),
            city: params.city.clone(),
            pickup: format_display_date(&params.pickup_date),
            dropoff: format_display_date(&params.dropoff_date),
            quote: Self::quote(vehicle, params),
        }
    }
}
