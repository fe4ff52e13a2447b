use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::orders::{
        CreateOrderRequest, DEFAULT_ORDER_STATUS, OrderDeletion, OrderWithItems,
        UpdateOrderRequest,
    },
    entity::{
        Customers,
        order_items::{Column as OrderItemCol, Entity as OrderItems},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
    },
    error::{AppError, AppResult},
    models::{Order, OrderItem},
    params::{ListQuery, Page},
    services::{ensure_reference, now},
    state::AppState,
    validation,
};

const ENTITY: &str = "order";

pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    let txn = state.orm.begin().await?;
    let created = insert_order(&txn, payload).await?;
    txn.commit().await?;
    Ok(created)
}

/// Checks and inserts on `db` without committing; the caller owns the
/// transaction.
pub async fn insert_order<C: ConnectionTrait>(
    db: &C,
    payload: CreateOrderRequest,
) -> AppResult<Order> {
    validation::non_negative_amount("total_amount", payload.total_amount)?;

    ensure_reference::<Customers, _>(db, "orders.customer_id", payload.customer_id).await?;

    let stamp = now();
    let order = OrderActive {
        id: NotSet,
        customer_id: Set(payload.customer_id),
        order_date: Set(payload.order_date.map(Into::into).unwrap_or(stamp)),
        status: Set(payload
            .status
            .unwrap_or_else(|| DEFAULT_ORDER_STATUS.to_string())),
        total_amount: Set(payload.total_amount),
        created_at: Set(stamp),
        updated_at: Set(stamp),
        is_deleted: Set(false),
    }
    .insert(db)
    .await?;

    tracing::info!(order_id = order.id, customer_id = order.customer_id, "order created");
    Ok(order.into())
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<Order> {
    Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Order::from)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

/// The order with every line item it owns, soft-deleted items included.
pub async fn get_order_with_items(state: &AppState, id: i32) -> AppResult<OrderWithItems> {
    let order = get_order(state, id).await?;
    let items = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .order_by_asc(OrderItemCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();
    Ok(OrderWithItems { order, items })
}

pub async fn list_orders(state: &AppState, query: ListQuery) -> AppResult<Page<Order>> {
    let (page, per_page, offset) = query.pagination.normalize();
    let mut finder = Orders::find();
    if let Some(flag) = query.status.is_deleted() {
        finder = finder.filter(OrderCol::IsDeleted.eq(flag));
    }
    let finder = finder.order_by_asc(OrderCol::Id);

    let total = finder.clone().count(&state.orm).await?;
    let items = finder
        .limit(per_page)
        .offset(offset)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    Ok(Page {
        items,
        page,
        per_page,
        total,
    })
}

pub async fn update_order(
    state: &AppState,
    id: i32,
    payload: UpdateOrderRequest,
) -> AppResult<Order> {
    if let Some(total_amount) = payload.total_amount {
        validation::non_negative_amount("total_amount", total_amount)?;
    }

    let txn = state.orm.begin().await?;
    let existing = Orders::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    let mut active: OrderActive = existing.into();
    if let Some(customer_id) = payload.customer_id {
        ensure_reference::<Customers, _>(&txn, "orders.customer_id", customer_id).await?;
        active.customer_id = Set(customer_id);
    }
    if let Some(order_date) = payload.order_date {
        active.order_date = Set(order_date.into());
    }
    if let Some(status) = payload.status {
        active.status = Set(status);
    }
    if let Some(total_amount) = payload.total_amount {
        active.total_amount = Set(total_amount);
    }
    active.updated_at = Set(now());
    let order = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(order_id = id, "order updated");
    Ok(order.into())
}

/// Hides the order from the summary view. Line items are not touched.
pub async fn soft_delete_order(state: &AppState, id: i32) -> AppResult<Order> {
    set_deleted(state, id, true).await
}

pub async fn restore_order(state: &AppState, id: i32) -> AppResult<Order> {
    set_deleted(state, id, false).await
}

/// Physically removes the order. The `order_items.order_id` foreign key
/// cascades, so its line items go with it.
pub async fn hard_delete_order(state: &AppState, id: i32) -> AppResult<OrderDeletion> {
    let txn = state.orm.begin().await?;
    if Orders::find_by_id(id).one(&txn).await?.is_none() {
        return Err(AppError::not_found(ENTITY, id));
    }

    let items_removed = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(id))
        .count(&txn)
        .await?;

    let result = Orders::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found(ENTITY, id));
    }

    txn.commit().await?;
    tracing::info!(order_id = id, items_removed, "order hard-deleted");
    Ok(OrderDeletion {
        order_id: id,
        items_removed,
    })
}

async fn set_deleted(state: &AppState, id: i32, is_deleted: bool) -> AppResult<Order> {
    let txn = state.orm.begin().await?;
    let existing = Orders::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    let mut active: OrderActive = existing.into();
    active.is_deleted = Set(is_deleted);
    active.updated_at = Set(now());
    let order = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(order_id = id, is_deleted, "order deletion flag set");
    Ok(order.into())
}
