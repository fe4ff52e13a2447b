use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::orders::{CreateOrderItemRequest, UpdateOrderItemRequest},
    entity::{
        Orders, Products,
        order_items::{ActiveModel, Column, Entity as OrderItems},
    },
    error::{AppError, AppResult},
    models::{OrderItem, StatusFilter},
    params::{ListQuery, Page},
    services::{ensure_reference, now},
    state::AppState,
    validation,
};

const ENTITY: &str = "order item";

pub async fn create_order_item(
    state: &AppState,
    payload: CreateOrderItemRequest,
) -> AppResult<OrderItem> {
    let txn = state.orm.begin().await?;
    let created = insert_order_item(&txn, payload).await?;
    txn.commit().await?;
    Ok(created)
}

/// Checks and inserts on `db` without committing; the caller owns the
/// transaction.
pub async fn insert_order_item<C: ConnectionTrait>(
    db: &C,
    payload: CreateOrderItemRequest,
) -> AppResult<OrderItem> {
    validation::positive_count("quantity", payload.quantity)?;
    validation::non_negative_amount("price_per_unit", payload.price_per_unit)?;

    ensure_reference::<Orders, _>(db, "order_items.order_id", payload.order_id).await?;
    ensure_reference::<Products, _>(db, "order_items.product_id", payload.product_id).await?;

    let stamp = now();
    let item = ActiveModel {
        id: NotSet,
        order_id: Set(payload.order_id),
        product_id: Set(payload.product_id),
        quantity: Set(payload.quantity),
        price_per_unit: Set(payload.price_per_unit),
        created_at: Set(stamp),
        updated_at: Set(stamp),
        is_deleted: Set(false),
    }
    .insert(db)
    .await?;

    tracing::info!(
        order_item_id = item.id,
        order_id = item.order_id,
        product_id = item.product_id,
        "order item created"
    );
    Ok(item.into())
}

pub async fn get_order_item(state: &AppState, id: i32) -> AppResult<OrderItem> {
    OrderItems::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(OrderItem::from)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

pub async fn list_order_items(state: &AppState, query: ListQuery) -> AppResult<Page<OrderItem>> {
    let (page, per_page, offset) = query.pagination.normalize();
    let mut finder = OrderItems::find();
    if let Some(flag) = query.status.is_deleted() {
        finder = finder.filter(Column::IsDeleted.eq(flag));
    }
    let finder = finder.order_by_asc(Column::Id);

    let total = finder.clone().count(&state.orm).await?;
    let items = finder
        .limit(per_page)
        .offset(offset)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();

    Ok(Page {
        items,
        page,
        per_page,
        total,
    })
}

pub async fn list_for_order(
    state: &AppState,
    order_id: i32,
    status: StatusFilter,
) -> AppResult<Vec<OrderItem>> {
    let mut finder = OrderItems::find().filter(Column::OrderId.eq(order_id));
    if let Some(flag) = status.is_deleted() {
        finder = finder.filter(Column::IsDeleted.eq(flag));
    }
    let items = finder
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();
    Ok(items)
}

pub async fn update_order_item(
    state: &AppState,
    id: i32,
    payload: UpdateOrderItemRequest,
) -> AppResult<OrderItem> {
    if let Some(quantity) = payload.quantity {
        validation::positive_count("quantity", quantity)?;
    }
    if let Some(price) = payload.price_per_unit {
        validation::non_negative_amount("price_per_unit", price)?;
    }

    let txn = state.orm.begin().await?;
    let existing = OrderItems::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    let mut active: ActiveModel = existing.into();
    if let Some(product_id) = payload.product_id {
        ensure_reference::<Products, _>(&txn, "order_items.product_id", product_id).await?;
        active.product_id = Set(product_id);
    }
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }
    if let Some(price) = payload.price_per_unit {
        active.price_per_unit = Set(price);
    }
    active.updated_at = Set(now());
    let item = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(order_item_id = id, "order item updated");
    Ok(item.into())
}

/// The item stops counting toward its order's `total_items` in the summary
/// view. An order whose last active item is soft-deleted leaves the view.
pub async fn soft_delete_order_item(state: &AppState, id: i32) -> AppResult<OrderItem> {
    set_deleted(state, id, true).await
}

pub async fn restore_order_item(state: &AppState, id: i32) -> AppResult<OrderItem> {
    set_deleted(state, id, false).await
}

async fn set_deleted(state: &AppState, id: i32, is_deleted: bool) -> AppResult<OrderItem> {
    let txn = state.orm.begin().await?;
    let existing = OrderItems::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    let mut active: ActiveModel = existing.into();
    active.is_deleted = Set(is_deleted);
    active.updated_at = Set(now());
    let item = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(order_item_id = id, is_deleted, "order item deletion flag set");
    Ok(item.into())
}
