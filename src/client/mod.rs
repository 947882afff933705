//! Lado cliente
//!
//! Formulario de búsqueda y sesión de la página de resultados sobre el store.

pub mod results_session;
pub mod search_form;

pub use results_session::*;
pub use search_form::*;
