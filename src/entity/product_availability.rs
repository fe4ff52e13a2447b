//! Read-only entity over `product_availability_view`.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Stock label computed by the view from `stock_quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Availability {
    #[sea_orm(string_value = "In Stock")]
    #[serde(rename = "In Stock")]
    InStock,
    #[sea_orm(string_value = "Out of Stock")]
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Availability {
    /// The label `product_availability_view` computes in SQL.
    pub fn for_stock(stock_quantity: i32) -> Self {
        if stock_quantity > 0 {
            Availability::InStock
        } else {
            Availability::OutOfStock
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product_availability_view")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    pub product_name: String,
    pub category_name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub stock_quantity: i32,
    pub availability: Availability,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
