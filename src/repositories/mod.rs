//! Repositorios
//!
//! Catálogos en memoria: Location Directory y Fleet Provider.

pub mod fleet_repository;
pub mod location_repository;

pub use fleet_repository::FleetRepository;
pub use location_repository::LocationRepository;
