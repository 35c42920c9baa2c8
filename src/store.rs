//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::routes::{self, Route};

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Recipes in the shopping cart (header badge, download button)
    pub orders: u32,
    /// Page currently shown
    pub route: Route,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            orders: 0,
            route: routes::current(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_orders(store: &AppStore, orders: u32) {
    *store.orders().write() = orders;
}

pub fn store_increment_orders(store: &AppStore) {
    *store.orders().write() += 1;
}

pub fn store_decrement_orders(store: &AppStore) {
    let field = store.orders();
    let mut orders = field.write();
    *orders = orders.saturating_sub(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_counter_never_goes_negative() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState { orders: 1, route: Route::Cart });
            store_decrement_orders(&store);
            store_decrement_orders(&store);
            assert_eq!(store.orders().get_untracked(), 0);
            store_increment_orders(&store);
            store_set_orders(&store, 5);
            store_decrement_orders(&store);
            assert_eq!(store.orders().get_untracked(), 4);
        });
    }
}
