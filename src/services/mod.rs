//! Core services: catalog queries, cart mutations, and checkout.

use std::sync::Arc;

use crate::events::EventSender;
use crate::store::{CartStore, CatalogStore, MemoryStore, OrderStore};

pub mod cart;
pub mod catalog;
pub mod orders;

pub use cart::CartService;
pub use catalog::CatalogService;
pub use orders::OrderService;

/// Aggregates the services handed to HTTP handlers through `AppState`.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: CatalogService,
    pub cart: CartService,
    pub orders: OrderService,
}

impl AppServices {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        carts: Arc<dyn CartStore>,
        orders: Arc<dyn OrderStore>,
        events: EventSender,
    ) -> Self {
        Self {
            catalog: CatalogService::new(catalog.clone()),
            cart: CartService::new(catalog, carts.clone(), events.clone()),
            orders: OrderService::new(carts, orders, events),
        }
    }

    /// Wires every service to one shared in-memory store.
    pub fn with_memory_store(store: Arc<MemoryStore>, events: EventSender) -> Self {
        Self::new(store.clone(), store.clone(), store, events)
    }
}
