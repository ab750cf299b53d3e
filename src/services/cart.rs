//! Cart engine: per-session line items with merge semantics.
//!
//! Every mutation is a fetch-then-replace of the whole cart document, per
//! the store contract. Two concurrent mutations of one session race and the
//! last writer wins.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{Cart, CartItem, CartView};
use crate::store::{CartStore, CatalogStore};

/// Input for adding an item to a cart.
#[derive(Debug, Clone, Deserialize)]
pub struct AddToCartInput {
    pub material_id: i64,
    pub quantity: i32,
    pub is_group: bool,
}

#[derive(Clone)]
pub struct CartService {
    catalog: Arc<dyn CatalogStore>,
    carts: Arc<dyn CartStore>,
    events: EventSender,
}

impl CartService {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        carts: Arc<dyn CartStore>,
        events: EventSender,
    ) -> Self {
        Self {
            catalog,
            carts,
            events,
        }
    }

    /// Returns the cart view for a session. A session without a cart
    /// document gets the synthesized empty view; absence is a valid state,
    /// never an error.
    pub async fn get_cart(&self, session_id: &str) -> Result<CartView, ServiceError> {
        Ok(match self.carts.get_cart(session_id).await? {
            Some(cart) => CartView::from_cart(cart),
            None => CartView::empty(session_id),
        })
    }

    /// Adds a material to the cart, creating the cart document on first add.
    ///
    /// The charged unit price is the group price when `is_group` is set,
    /// otherwise the regular price, snapshotted at add time. A line with the
    /// same `(material_id, is_group)` pair accumulates quantity instead of
    /// duplicating; group and non-group purchases of one material are
    /// distinct lines.
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        session_id: &str,
        input: AddToCartInput,
    ) -> Result<CartView, ServiceError> {
        if input.quantity < 1 {
            return Err(ServiceError::ValidationError(
                "quantity must be at least 1".to_string(),
            ));
        }

        let material = self
            .catalog
            .get_material(input.material_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Material {} not found", input.material_id))
            })?;

        // Single-item lookup; a missing supplier is an error here, not a
        // join drop.
        let supplier = self
            .catalog
            .get_supplier(material.supplier_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Supplier {} not found", material.supplier_id))
            })?;

        let price = if input.is_group {
            material.group_price
        } else {
            material.price
        };

        let mut cart = self
            .carts
            .get_cart(session_id)
            .await?
            .unwrap_or_else(|| Cart::new(session_id));

        match cart
            .items
            .iter_mut()
            .find(|item| item.material_id == input.material_id && item.is_group == input.is_group)
        {
            Some(item) => {
                item.quantity = item.quantity.checked_add(input.quantity).ok_or_else(|| {
                    ServiceError::ValidationError("quantity too large".to_string())
                })?;
            }
            None => {
                let item = CartItem {
                    id: cart.next_item_id(),
                    material_id: material.id,
                    material_name: material.name,
                    quantity: input.quantity,
                    price,
                    unit: material.unit,
                    is_group: input.is_group,
                    supplier_name: supplier.name,
                    image: material.image,
                };
                cart.items.push(item);
            }
        }

        cart.updated_at = Utc::now();
        self.carts.put_cart(cart.clone()).await?;

        self.events
            .send_or_log(Event::CartItemAdded {
                session_id: session_id.to_string(),
                material_id: input.material_id,
                is_group: input.is_group,
            })
            .await;

        info!(
            session_id,
            material_id = input.material_id,
            quantity = input.quantity,
            "added item to cart"
        );
        Ok(CartView::from_cart(cart))
    }

    /// Replaces a line's quantity. Quantity zero or below deletes the line;
    /// that is the deletion path, not an error. Fails with NotFound when the
    /// cart or the line is absent.
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        session_id: &str,
        item_id: i64,
        quantity: i32,
    ) -> Result<CartView, ServiceError> {
        let mut cart = self
            .carts
            .get_cart(session_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Cart not found".to_string()))?;

        let position = cart
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| ServiceError::NotFound("Item not found in cart".to_string()))?;

        if quantity <= 0 {
            cart.items.remove(position);
        } else {
            cart.items[position].quantity = quantity;
        }

        cart.updated_at = Utc::now();
        self.carts.put_cart(cart.clone()).await?;

        self.events
            .send_or_log(Event::CartItemUpdated {
                session_id: session_id.to_string(),
                item_id,
            })
            .await;

        Ok(CartView::from_cart(cart))
    }

    /// Removes a line. Fails with NotFound when the cart is absent, but an
    /// absent line in an existing cart is a silent no-op, asymmetric with
    /// `update_item`.
    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        session_id: &str,
        item_id: i64,
    ) -> Result<CartView, ServiceError> {
        let mut cart = self
            .carts
            .get_cart(session_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Cart not found".to_string()))?;

        cart.items.retain(|item| item.id != item_id);
        cart.updated_at = Utc::now();
        self.carts.put_cart(cart.clone()).await?;

        self.events
            .send_or_log(Event::CartItemRemoved {
                session_id: session_id.to_string(),
                item_id,
            })
            .await;

        Ok(CartView::from_cart(cart))
    }

    /// Deletes the whole cart document. A subsequent get returns the
    /// synthesized empty view.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self, session_id: &str) -> Result<(), ServiceError> {
        self.carts.delete_cart(session_id).await?;

        self.events
            .send_or_log(Event::CartCleared {
                session_id: session_id.to_string(),
            })
            .await;

        info!(session_id, "cleared cart");
        Ok(())
    }
}
