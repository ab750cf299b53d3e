//! Document store collaborator contract.
//!
//! The core treats persistence as an external collaborator with per-document
//! operations: catalog reads, whole-cart get/put/delete, and append-only
//! order writes. Cart mutation is fetch-then-replace of the full document,
//! so concurrent writers to one session race (last writer wins); a
//! conditional-update backend can be introduced behind `CartStore` without
//! touching the services.

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{Cart, Category, Material, Order, Supplier};

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;

/// Material-field predicates pushed down to the store. Everything here can
/// be evaluated on a raw material row, before the supplier join.
#[derive(Debug, Clone, Default)]
pub struct MaterialFilter {
    /// Category equality; `None` means all categories.
    pub category: Option<String>,
    /// Keep only in-stock materials.
    pub in_stock: bool,
    /// Keep only materials whose group price undercuts the regular price.
    pub group_deal: bool,
    /// Case-insensitive substring match against name or description.
    pub search: Option<String>,
}

impl MaterialFilter {
    pub fn matches(&self, material: &Material) -> bool {
        if let Some(category) = &self.category {
            if material.category != *category {
                return false;
            }
        }
        if self.in_stock && !material.in_stock {
            return false;
        }
        if self.group_deal && !material.has_group_deal() {
            return false;
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let in_name = material.name.to_lowercase().contains(&term);
            let in_description = material.description.to_lowercase().contains(&term);
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }
}

/// Read-only access to suppliers, categories, and materials.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, StoreError>;
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
    async fn get_supplier(&self, id: i64) -> Result<Option<Supplier>, StoreError>;
    async fn get_material(&self, id: i64) -> Result<Option<Material>, StoreError>;
    /// Pre-join, pre-sort raw rows matching the filter, in insertion order.
    async fn list_materials(&self, filter: &MaterialFilter) -> Result<Vec<Material>, StoreError>;
}

/// Whole-document cart persistence keyed by session id.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn get_cart(&self, session_id: &str) -> Result<Option<Cart>, StoreError>;
    /// Full replace; creates the document if absent.
    async fn put_cart(&self, cart: Cart) -> Result<(), StoreError>;
    /// Idempotent; deleting an absent cart is not an error.
    async fn delete_cart(&self, session_id: &str) -> Result<(), StoreError>;
}

/// Append-only order persistence.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert_order(&self, order: Order) -> Result<(), StoreError>;
    async fn list_orders(&self, session_id: &str) -> Result<Vec<Order>, StoreError>;
}
