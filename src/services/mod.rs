//! Services module
//!
//! Lógica de negocio: búsqueda de vehículos (estrategias directa y remota)
//! y cálculo de precios del alquiler.

pub mod pricing_service;
pub mod search_service;

pub use pricing_service::*;
pub use search_service::*;
