//! Store de estado de búsqueda
//!
//! Contenedor explícito de resultados y selección, con selectores derivados.

pub mod search_store;
pub mod selectors;

pub use search_store::*;
