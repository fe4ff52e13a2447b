use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Order, OrderItem};

/// Status given to an order when the caller does not supply one.
pub const DEFAULT_ORDER_STATUS: &str = "Pending";

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: i32,
    /// Defaults to the creation time.
    pub order_date: Option<DateTime<Utc>>,
    /// Defaults to [`DEFAULT_ORDER_STATUS`].
    pub status: Option<String>,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderRequest {
    pub customer_id: Option<i32>,
    pub order_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub total_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderItemRequest {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price_per_unit: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderItemRequest {
    pub product_id: Option<i32>,
    pub quantity: Option<i32>,
    pub price_per_unit: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Outcome of a hard order delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderDeletion {
    pub order_id: i32,
    pub items_removed: u64,
}
