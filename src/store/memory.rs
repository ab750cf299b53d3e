//! In-memory document store used by the server binary and the test suite.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::StoreError;
use crate::models::{Cart, Category, Material, Order, Supplier};
use crate::store::{CartStore, CatalogStore, MaterialFilter, OrderStore};

/// DashMap-backed store implementing all three collaborator traits.
///
/// Catalog listings are returned in ascending id order, which for seeded
/// data equals insertion order; that is the stable input order the query
/// engine's tie-breaking relies on.
#[derive(Debug, Default)]
pub struct MemoryStore {
    suppliers: DashMap<i64, Supplier>,
    categories: DashMap<String, Category>,
    materials: DashMap<i64, Material>,
    carts: DashMap<String, Cart>,
    orders: DashMap<String, Vec<Order>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_supplier(&self, supplier: Supplier) {
        self.suppliers.insert(supplier.id, supplier);
    }

    pub fn insert_category(&self, category: Category) {
        self.categories.insert(category.id.clone(), category);
    }

    pub fn insert_material(&self, material: Material) {
        self.materials.insert(material.id, material);
    }

    pub fn is_empty_catalog(&self) -> bool {
        self.suppliers.is_empty() && self.materials.is_empty()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, StoreError> {
        let mut suppliers: Vec<Supplier> =
            self.suppliers.iter().map(|entry| entry.value().clone()).collect();
        suppliers.sort_by_key(|supplier| supplier.id);
        Ok(suppliers)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories: Vec<Category> =
            self.categories.iter().map(|entry| entry.value().clone()).collect();
        categories.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(categories)
    }

    async fn get_supplier(&self, id: i64) -> Result<Option<Supplier>, StoreError> {
        Ok(self.suppliers.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_material(&self, id: i64) -> Result<Option<Material>, StoreError> {
        Ok(self.materials.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_materials(&self, filter: &MaterialFilter) -> Result<Vec<Material>, StoreError> {
        let mut materials: Vec<Material> = self
            .materials
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        materials.sort_by_key(|material| material.id);
        Ok(materials)
    }
}

#[async_trait]
impl CartStore for MemoryStore {
    async fn get_cart(&self, session_id: &str) -> Result<Option<Cart>, StoreError> {
        Ok(self.carts.get(session_id).map(|entry| entry.value().clone()))
    }

    async fn put_cart(&self, cart: Cart) -> Result<(), StoreError> {
        self.carts.insert(cart.session_id.clone(), cart);
        Ok(())
    }

    async fn delete_cart(&self, session_id: &str) -> Result<(), StoreError> {
        self.carts.remove(session_id);
        Ok(())
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn insert_order(&self, order: Order) -> Result<(), StoreError> {
        self.orders
            .entry(order.session_id.clone())
            .or_default()
            .push(order);
        Ok(())
    }

    async fn list_orders(&self, session_id: &str) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .orders
            .get(session_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
