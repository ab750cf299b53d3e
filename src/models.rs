//! Domain types shared by the store, services, and HTTP boundary.
//!
//! Wire field names (`inStock`, `groupPrice`, `minGroupQuantity`) follow the
//! established frontend contract, so the serde renames here are load-bearing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supplier reference data. Immutable; no mutation endpoints exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub verified: bool,
    pub location: String,
}

/// Category reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// Raw material row as stored, referencing its supplier by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub unit: String,
    pub supplier_id: i64,
    pub image: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    pub description: String,
    #[serde(rename = "groupPrice")]
    pub group_price: Decimal,
    #[serde(rename = "minGroupQuantity")]
    pub min_group_quantity: i64,
}

impl Material {
    /// A material has a group deal only when the group price undercuts the
    /// regular price.
    pub fn has_group_deal(&self) -> bool {
        self.group_price < self.price
    }
}

/// A material joined with its full supplier record; the wire shape of the
/// materials listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialWithSupplier {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub unit: String,
    pub supplier: Supplier,
    pub image: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    pub description: String,
    #[serde(rename = "groupPrice")]
    pub group_price: Decimal,
    #[serde(rename = "minGroupQuantity")]
    pub min_group_quantity: i64,
}

impl MaterialWithSupplier {
    pub fn join(material: Material, supplier: Supplier) -> Self {
        Self {
            id: material.id,
            name: material.name,
            category: material.category,
            price: material.price,
            unit: material.unit,
            supplier,
            image: material.image,
            in_stock: material.in_stock,
            description: material.description,
            group_price: material.group_price,
            min_group_quantity: material.min_group_quantity,
        }
    }
}

/// One cart line. `id` is unique within its cart only. The price and the
/// denormalized material/supplier fields are snapshots taken at add time and
/// deliberately do not track later catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub material_id: i64,
    pub material_name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub unit: String,
    pub is_group: bool,
    pub supplier_name: String,
    pub image: String,
}

/// Cart document, keyed by the client-supplied session id. Read and replaced
/// whole; deleted on clear and after a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub session_id: String,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Next line id, unique within this cart. `max + 1` stays unique even
    /// after earlier lines were removed.
    pub fn next_item_id(&self) -> i64 {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }
}

/// Read model for a cart: items plus totals recomputed from the items on
/// every read, so they can never drift from line contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub session_id: String,
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub count: i64,
}

impl CartView {
    pub fn from_cart(cart: Cart) -> Self {
        let total = cart
            .items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum();
        let count = cart.items.iter().map(|item| i64::from(item.quantity)).sum();
        Self {
            session_id: cart.session_id,
            items: cart.items,
            total,
            count,
        }
    }

    /// The view of a session that has no cart document yet: absence is a
    /// valid state, not an error.
    pub fn empty(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            items: Vec::new(),
            total: Decimal::ZERO,
            count: 0,
        }
    }
}

/// Immutable order line, copied from a cart line at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub material_id: i64,
    pub material_name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub unit: String,
    pub is_group: bool,
    pub supplier_name: String,
    pub total: Decimal,
}

impl OrderItem {
    pub fn from_cart_item(item: &CartItem) -> Self {
        Self {
            material_id: item.material_id,
            material_name: item.material_name.clone(),
            quantity: item.quantity,
            price: item.price,
            unit: item.unit.clone(),
            is_group: item.is_group,
            supplier_name: item.supplier_name.clone(),
            total: item.price * Decimal::from(item.quantity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
}

/// Order record. Append-only: never mutated or deleted by this service.
/// Status progression past `Confirmed` belongs to external fulfillment
/// tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub session_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
