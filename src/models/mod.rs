//! Modelos del sistema
//!
//! Vehículos, localidades y parámetros de búsqueda.

pub mod location;
pub mod search;
pub mod vehicle;

pub use location::*;
pub use search::*;
pub use vehicle::*;
