//! Writes that skip the service checks and go straight to the tables, so the
//! schema's own CHECK, UNIQUE and FOREIGN KEY constraints are what rejects
//! them.

mod common;

use chrono::Utc;
use common::{money, seeded_state};
use ecommerce_data::{
    entity::{categories, customers, order_items, orders, products, OrderItems, Orders},
    error::AppError,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DbErr, EntityTrait, Set};

fn product_row(price: Decimal, stock_quantity: i32) -> products::ActiveModel {
    let stamp = Utc::now().into();
    products::ActiveModel {
        id: NotSet,
        name: Set("Raw Widget".into()),
        description: Set(None),
        price: Set(price),
        stock_quantity: Set(stock_quantity),
        category_id: Set(Some(1)),
        created_at: Set(stamp),
        updated_at: Set(stamp),
        is_deleted: Set(false),
    }
}

fn order_item_row(order_id: i32, product_id: i32, quantity: i32) -> order_items::ActiveModel {
    let stamp = Utc::now().into();
    order_items::ActiveModel {
        id: NotSet,
        order_id: Set(order_id),
        product_id: Set(product_id),
        quantity: Set(quantity),
        price_per_unit: Set(money(1_000)),
        created_at: Set(stamp),
        updated_at: Set(stamp),
        is_deleted: Set(false),
    }
}

fn constraint_error(err: DbErr) -> bool {
    matches!(AppError::from(err), AppError::ConstraintViolation(_))
}

#[tokio::test]
async fn check_constraints_reject_out_of_range_values() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    assert!(product_row(money(-100), 5).insert(&state.orm).await.is_err());
    assert!(product_row(money(100), -1).insert(&state.orm).await.is_err());
    assert!(order_item_row(1, 1, 0).insert(&state.orm).await.is_err());

    let stamp = Utc::now().into();
    let negative_total = orders::ActiveModel {
        id: NotSet,
        customer_id: Set(1),
        order_date: Set(stamp),
        status: Set("Pending".into()),
        total_amount: Set(money(-1)),
        created_at: Set(stamp),
        updated_at: Set(stamp),
        is_deleted: Set(false),
    };
    assert!(negative_total.insert(&state.orm).await.is_err());

    // Boundary values are accepted.
    let free = product_row(Decimal::ZERO, 0).insert(&state.orm).await?;
    assert_eq!(free.stock_quantity, 0);
    Ok(())
}

#[tokio::test]
async fn unique_indexes_map_to_constraint_violation() -> anyhow::Result<()> {
    let state = seeded_state().await?;
    let stamp = Utc::now().into();

    let duplicate_email = customers::ActiveModel {
        id: NotSet,
        full_name: Set("Alice Again".into()),
        email: Set("alice@example.com".into()),
        phone: Set(None),
        address: Set(None),
        created_at: Set(stamp),
        updated_at: Set(stamp),
        is_deleted: Set(false),
    };
    let err = duplicate_email.insert(&state.orm).await.unwrap_err();
    assert!(constraint_error(err));

    let duplicate_name = categories::ActiveModel {
        id: NotSet,
        name: Set("Books".into()),
        description: Set(None),
        created_at: Set(stamp),
        updated_at: Set(stamp),
        is_deleted: Set(false),
    };
    let err = duplicate_name.insert(&state.orm).await.unwrap_err();
    assert!(constraint_error(err));
    Ok(())
}

#[tokio::test]
async fn foreign_keys_map_to_constraint_violation() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let err = order_item_row(1, 999, 1).insert(&state.orm).await.unwrap_err();
    assert!(constraint_error(err));

    let err = order_item_row(999, 1, 1).insert(&state.orm).await.unwrap_err();
    assert!(constraint_error(err));
    Ok(())
}

#[tokio::test]
async fn deleting_an_order_row_cascades_to_its_items() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let result = Orders::delete_by_id(3).exec(&state.orm).await?;
    assert_eq!(result.rows_affected, 1);

    let remaining = OrderItems::find().all(&state.orm).await?;
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|item| item.order_id != 3));
    Ok(())
}
