//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del entorno del servicio.

pub mod environment;

pub use environment::*;
