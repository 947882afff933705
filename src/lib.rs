//! Búsqueda y reserva de coches de alquiler
//!
//! Servicio HTTP con catálogo de localidades, búsqueda de vehículos
//! disponibles y la capa cliente (formulario, store y sesión de resultados).

pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;
