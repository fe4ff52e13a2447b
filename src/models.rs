use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::{
    categories, customers, order_items, order_summary, orders, product_availability, products,
};

pub use crate::entity::product_availability::Availability;

/// Logical lifecycle of a row. Backed by the `is_deleted` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Active,
    Deleted,
}

impl RecordStatus {
    pub fn is_deleted(self) -> bool {
        match self {
            RecordStatus::Active => false,
            RecordStatus::Deleted => true,
        }
    }
}

impl From<bool> for RecordStatus {
    fn from(is_deleted: bool) -> Self {
        if is_deleted {
            RecordStatus::Deleted
        } else {
            RecordStatus::Active
        }
    }
}

/// Which rows a listing returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    Active,
    Deleted,
    All,
}

impl StatusFilter {
    /// `None` means no filter on `is_deleted`.
    pub fn is_deleted(self) -> Option<bool> {
        match self {
            StatusFilter::Active => Some(RecordStatus::Active.is_deleted()),
            StatusFilter::Deleted => Some(RecordStatus::Deleted.is_deleted()),
            StatusFilter::All => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub record_status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price_per_unit: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: RecordStatus,
}

/// Row of `order_summary_view`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub order_id: i32,
    pub order_date: DateTime<Utc>,
    pub customer_name: String,
    pub customer_email: String,
    pub status: String,
    pub total_amount: Decimal,
    pub total_items: i64,
}

/// Row of `product_availability_view`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductAvailability {
    pub product_id: i32,
    pub product_name: String,
    pub category_name: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub availability: Availability,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Category {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            status: model.is_deleted.into(),
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            stock_quantity: model.stock_quantity,
            category_id: model.category_id,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            status: model.is_deleted.into(),
        }
    }
}

impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Customer {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            status: model.is_deleted.into(),
        }
    }
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Order {
            id: model.id,
            customer_id: model.customer_id,
            order_date: model.order_date.with_timezone(&Utc),
            status: model.status,
            total_amount: model.total_amount,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            record_status: model.is_deleted.into(),
        }
    }
}

impl From<order_items::Model> for OrderItem {
    fn from(model: order_items::Model) -> Self {
        OrderItem {
            id: model.id,
            order_id: model.order_id,
            product_id: model.product_id,
            quantity: model.quantity,
            price_per_unit: model.price_per_unit,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            status: model.is_deleted.into(),
        }
    }
}

impl From<order_summary::Model> for OrderSummary {
    fn from(model: order_summary::Model) -> Self {
        OrderSummary {
            order_id: model.order_id,
            order_date: model.order_date.with_timezone(&Utc),
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            status: model.status,
            total_amount: model.total_amount,
            total_items: model.total_items,
        }
    }
}

impl From<product_availability::Model> for ProductAvailability {
    fn from(model: product_availability::Model) -> Self {
        ProductAvailability {
            product_id: model.product_id,
            product_name: model.product_name,
            category_name: model.category_name,
            price: model.price,
            stock_quantity: model.stock_quantity,
            availability: model.availability,
        }
    }
}
