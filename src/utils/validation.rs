//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de fechas de alquiler.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use validator::ValidationError;

/// Validar y convertir string a fecha de calendario (YYYY-MM-DD)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Convertir una fecha de alquiler a instante UTC.
///
/// Acepta fechas de calendario (medianoche UTC), RFC3339 y fecha-hora sin
/// zona (`2024-01-01T10:30`, interpretada en UTC).
pub fn parse_rental_instant(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();

    if let Ok(date) = validate_date(value) {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    let mut error = ValidationError::new("datetime");
    error.add_param("value".into(), &value.to_string());
    error.add_param("format".into(), &"YYYY-MM-DD | RFC3339".to_string());
    Err(error)
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Formatear una fecha de alquiler como dd/mm/yyyy; devuelve el texto
/// original si no se puede interpretar
pub fn format_display_date(value: &str) -> String {
    parse_rental_instant(value)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rust_decimal::Decimal;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024/01/15").is_err());
    }

    #[test]
    fn test_parse_rental_instant_formats() {
        let midnight = parse_rental_instant("2024-01-01").unwrap();
        assert_eq!(midnight.hour(), 0);

        let rfc = parse_rental_instant("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(rfc.hour(), 10);

        let local = parse_rental_instant("2024-01-01T08:30").unwrap();
        assert_eq!(local.minute(), 30);

        assert!(parse_rental_instant("mañana").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Miami").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(Decimal::new(4599, 2)).is_ok());
        assert!(validate_positive(Decimal::ZERO).is_err());
        assert!(validate_positive(-5).is_err());
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2024-01-04"), "04/01/2024");
        assert_eq!(format_display_date("sin fecha"), "sin fecha");
    }
}
