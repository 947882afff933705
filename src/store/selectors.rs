//! Selectores derivados del estado de búsqueda
//!
//! Funciones puras sobre `SearchState` y una envoltura memoizada que solo
//! recalcula cuando cambia su entrada.

use std::cell::{Cell, RefCell};

use rust_decimal::Decimal;

use crate::models::vehicle::Vehicle;
use crate::store::search_store::SearchState;

/// Precio por día del vehículo seleccionado, 0 si no hay selección
pub fn selected_vehicle_price(state: &SearchState) -> Decimal {
    price_of(&state.selected_vehicle)
}

/// Hay un vehículo seleccionado
pub fn has_selected_vehicle(state: &SearchState) -> bool {
    state.selected_vehicle.is_some()
}

fn price_of(selected: &Option<Vehicle>) -> Decimal {
    selected
        .as_ref()
        .map(|car| car.price_per_day)
        .unwrap_or(Decimal::ZERO)
}

/// Selector memoizado sobre una sola entrada
pub struct Memoized<I, O> {
    compute: fn(&I) -> O,
    cache: RefCell<Option<(I, O)>>,
    recomputations: Cell<usize>,
}

impl<I: PartialEq + Clone, O: Clone> Memoized<I, O> {
    pub fn new(compute: fn(&I) -> O) -> Self {
        Self {
            compute,
            cache: RefCell::new(None),
            recomputations: Cell::new(0),
        }
    }

    pub fn select(&self, input: &I) -> O {
        {
            let cache = self.cache.borrow();
            if let Some((cached_input, output)) = cache.as_ref() {
                if cached_input == input {
                    return output.clone();
                }
            }
        }

        let output = (self.compute)(input);
        self.recomputations.set(self.recomputations.get() + 1);
        *self.cache.borrow_mut() = Some((input.clone(), output.clone()));
        output
    }

    /// Veces que se ejecutó `compute`
    pub fn recomputations(&self) -> usize {
        self.recomputations.get()
    }
}

/// Selectores del store, memoizados sobre el vehículo seleccionado
pub struct SearchSelectors {
    price: Memoized<Option<Vehicle>, Decimal>,
    has_selection: Memoized<Option<Vehicle>, bool>,
}

impl Default for SearchSelectors {
    fn default() -> Self {
        Self {
            price: Memoized::new(price_of),
            has_selection: Memoized::new(Option::is_some),
        }
    }
}

impl SearchSelectors {
    pub fn selected_vehicle_price(&self, state: &SearchState) -> Decimal {
        self.price.select(&state.selected_vehicle)
    }

    pub fn has_selected_vehicle(&self, state: &SearchState) -> bool {
        self.has_selection.select(&state.selected_vehicle)
    }

    pub fn price_recomputations(&self) -> usize {
        self.price.recomputations()
    }
}
