//! Order engine: converts a session's cart into an immutable order.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{Order, OrderItem, OrderStatus};
use crate::store::{CartStore, OrderStore};

#[derive(Clone)]
pub struct OrderService {
    carts: Arc<dyn CartStore>,
    orders: Arc<dyn OrderStore>,
    events: EventSender,
}

impl OrderService {
    pub fn new(
        carts: Arc<dyn CartStore>,
        orders: Arc<dyn OrderStore>,
        events: EventSender,
    ) -> Self {
        Self {
            carts,
            orders,
            events,
        }
    }

    /// Converts the session's cart into a confirmed order.
    ///
    /// The empty-cart check runs before anything is written. The cart is
    /// deleted only after the order insert is acknowledged; a failed insert
    /// leaves the cart intact, and a failed delete after a successful insert
    /// is logged and swallowed.
    #[instrument(skip(self))]
    pub async fn checkout(&self, session_id: &str) -> Result<Order, ServiceError> {
        let cart = self
            .carts
            .get_cart(session_id)
            .await?
            .filter(|cart| !cart.items.is_empty())
            .ok_or_else(|| ServiceError::InvalidState("Cart is empty".to_string()))?;

        let items: Vec<OrderItem> = cart.items.iter().map(OrderItem::from_cart_item).collect();
        let total_amount: Decimal = items.iter().map(|item| item.total).sum();

        let order = Order {
            id: Uuid::new_v4(),
            session_id: session_id.to_string(),
            items,
            total_amount,
            status: OrderStatus::Confirmed,
            created_at: Utc::now(),
        };

        self.orders.insert_order(order.clone()).await?;

        // Best-effort cleanup: the order is already durable.
        if let Err(err) = self.carts.delete_cart(session_id).await {
            warn!(session_id, "failed to clear cart after checkout: {}", err);
        }

        self.events
            .send_or_log(Event::OrderCreated {
                order_id: order.id,
                session_id: session_id.to_string(),
            })
            .await;

        info!(
            session_id,
            order_id = %order.id,
            total = %order.total_amount,
            "order placed"
        );
        Ok(order)
    }

    /// Lists a session's orders, oldest first.
    pub async fn list_orders(&self, session_id: &str) -> Result<Vec<Order>, ServiceError> {
        Ok(self.orders.list_orders(session_id).await?)
    }
}
