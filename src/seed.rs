//! Sample rows used by the `seed` binary and the integration tests.
//!
//! Rows go in through the service-layer insert checks inside a single
//! transaction, so on an empty schema they get ids 1..=n in the order listed
//! here.

use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};

use crate::{
    dto::{
        categories::CreateCategoryRequest,
        customers::CreateCustomerRequest,
        orders::{CreateOrderItemRequest, CreateOrderRequest},
        products::CreateProductRequest,
    },
    entity::{Categories, Customers, OrderItems, Orders, Products},
    error::AppResult,
    services::{
        category_service, customer_service, order_item_service, order_service, product_service,
    },
    state::AppState,
};

const CATEGORIES: [(&str, &str); 3] = [
    ("Electronics", "Devices and gadgets"),
    ("Books", "Printed and digital books"),
    ("Clothing", "Apparel and accessories"),
];

// (name, description, price in cents, stock, category index)
const PRODUCTS: [(&str, &str, i64, i32, usize); 6] = [
    ("Smartphone", "Android phone with 128GB storage", 2_999_999, 50, 0),
    ("Laptop", "14-inch ultrabook, 16GB RAM", 5_599_900, 30, 0),
    ("Rust in Action", "Systems programming with Rust", 39_900, 100, 1),
    ("Database Design", "Relational modelling explained", 79_900, 40, 1),
    ("T-Shirt", "Cotton crew neck", 59_900, 200, 2),
    ("Denim Jeans", "Slim fit, dark wash", 149_900, 0, 2),
];

// (full name, email, phone, address)
const CUSTOMERS: [(&str, &str, &str, &str); 3] = [
    ("Alice Johnson", "alice@example.com", "555-0101", "12 Market Street, Springfield"),
    ("Bob Smith", "bob@example.com", "555-0102", "48 Oak Avenue, Riverside"),
    ("Charlie Brown", "charlie@example.com", "555-0103", "7 Pine Road, Lakeside"),
];

// (customer index, status, total in cents)
const ORDERS: [(usize, &str, i64); 3] = [
    (0, "Shipped", 3_059_899),
    (1, "Pending", 5_599_900),
    (2, "Delivered", 229_700),
];

// (order index, product index, quantity, unit price in cents)
const ORDER_ITEMS: [(usize, usize, i32, i64); 5] = [
    (0, 0, 1, 2_999_999),
    (0, 4, 1, 59_900),
    (1, 1, 1, 5_599_900),
    (2, 2, 2, 39_900),
    (2, 5, 1, 149_900),
];

/// Row counts written by [`load_fixture`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub products: usize,
    pub customers: usize,
    pub orders: usize,
    pub order_items: usize,
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

/// True when no table holds any row yet.
pub async fn is_empty(state: &AppState) -> AppResult<bool> {
    let db = &state.orm;
    let total = Categories::find().count(db).await?
        + Products::find().count(db).await?
        + Customers::find().count(db).await?
        + Orders::find().count(db).await?
        + OrderItems::find().count(db).await?;
    Ok(total == 0)
}

/// Loads every fixture row in one transaction; on failure nothing is kept.
pub async fn load_fixture(state: &AppState) -> AppResult<SeedReport> {
    let txn = state.orm.begin().await?;
    let mut report = SeedReport::default();

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (name, description) in CATEGORIES {
        let category = category_service::insert_category(
            &txn,
            CreateCategoryRequest {
                name: name.to_string(),
                description: Some(description.to_string()),
            },
        )
        .await?;
        category_ids.push(category.id);
        report.categories += 1;
    }

    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for (name, description, price, stock, category) in PRODUCTS {
        let product = product_service::insert_product(
            &txn,
            CreateProductRequest {
                name: name.to_string(),
                description: Some(description.to_string()),
                price: cents(price),
                stock_quantity: stock,
                category_id: Some(category_ids[category]),
            },
        )
        .await?;
        product_ids.push(product.id);
        report.products += 1;
    }

    let mut customer_ids = Vec::with_capacity(CUSTOMERS.len());
    for (full_name, email, phone, address) in CUSTOMERS {
        let customer = customer_service::insert_customer(
            &txn,
            CreateCustomerRequest {
                full_name: full_name.to_string(),
                email: email.to_string(),
                phone: Some(phone.to_string()),
                address: Some(address.to_string()),
            },
        )
        .await?;
        customer_ids.push(customer.id);
        report.customers += 1;
    }

    let mut order_ids = Vec::with_capacity(ORDERS.len());
    for (customer, status, total) in ORDERS {
        let order = order_service::insert_order(
            &txn,
            CreateOrderRequest {
                customer_id: customer_ids[customer],
                order_date: None,
                status: Some(status.to_string()),
                total_amount: cents(total),
            },
        )
        .await?;
        order_ids.push(order.id);
        report.orders += 1;
    }

    for (order, product, quantity, unit_price) in ORDER_ITEMS {
        order_item_service::insert_order_item(
            &txn,
            CreateOrderItemRequest {
                order_id: order_ids[order],
                product_id: product_ids[product],
                quantity,
                price_per_unit: cents(unit_price),
            },
        )
        .await?;
        report.order_items += 1;
    }

    txn.commit().await?;
    tracing::info!(?report, "seed fixture loaded");
    Ok(report)
}
