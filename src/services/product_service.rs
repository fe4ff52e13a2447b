use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    entity::{
        Categories,
        products::{ActiveModel, Column, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{Product, StatusFilter},
    params::{ListQuery, Page},
    services::{ensure_reference, now},
    state::AppState,
    validation,
};

const ENTITY: &str = "product";

pub async fn create_product(state: &AppState, payload: CreateProductRequest) -> AppResult<Product> {
    let txn = state.orm.begin().await?;
    let created = insert_product(&txn, payload).await?;
    txn.commit().await?;
    Ok(created)
}

/// Checks and inserts on `db` without committing; the caller owns the
/// transaction.
pub async fn insert_product<C: ConnectionTrait>(
    db: &C,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    validation::non_negative_amount("price", payload.price)?;
    validation::non_negative_count("stock_quantity", payload.stock_quantity)?;

    if let Some(category_id) = payload.category_id {
        ensure_reference::<Categories, _>(db, "products.category_id", category_id).await?;
    }

    let stamp = now();
    let product = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        stock_quantity: Set(payload.stock_quantity),
        category_id: Set(payload.category_id),
        created_at: Set(stamp),
        updated_at: Set(stamp),
        is_deleted: Set(false),
    }
    .insert(db)
    .await?;

    tracing::info!(product_id = product.id, "product created");
    Ok(product.into())
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Product::from)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

pub async fn list_products(state: &AppState, query: ListQuery) -> AppResult<Page<Product>> {
    let (page, per_page, offset) = query.pagination.normalize();
    let mut finder = Products::find();
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
        .map(Product::from)
        .collect();

    Ok(Page {
        items,
        page,
        per_page,
        total,
    })
}

pub async fn list_by_category(
    state: &AppState,
    category_id: i32,
    status: StatusFilter,
) -> AppResult<Vec<Product>> {
    let mut finder = Products::find().filter(Column::CategoryId.eq(category_id));
    if let Some(flag) = status.is_deleted() {
        finder = finder.filter(Column::IsDeleted.eq(flag));
    }
    let items = finder
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(items)
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<Product> {
    if let Some(price) = payload.price {
        validation::non_negative_amount("price", price)?;
    }
    if let Some(stock) = payload.stock_quantity {
        validation::non_negative_count("stock_quantity", stock)?;
    }

    let txn = state.orm.begin().await?;
    let existing = Products::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(stock) = payload.stock_quantity {
        active.stock_quantity = Set(stock);
    }
    if let Some(category_id) = payload.category_id {
        if let Some(target) = category_id {
            ensure_reference::<Categories, _>(&txn, "products.category_id", target).await?;
        }
        active.category_id = Set(category_id);
    }
    active.updated_at = Set(now());
    let product = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(product_id = id, "product updated");
    Ok(product.into())
}

pub async fn soft_delete_product(state: &AppState, id: i32) -> AppResult<Product> {
    set_deleted(state, id, true).await
}

pub async fn restore_product(state: &AppState, id: i32) -> AppResult<Product> {
    set_deleted(state, id, false).await
}

async fn set_deleted(state: &AppState, id: i32, is_deleted: bool) -> AppResult<Product> {
    let txn = state.orm.begin().await?;
    let existing = Products::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    let mut active: ActiveModel = existing.into();
    active.is_deleted = Set(is_deleted);
    active.updated_at = Set(now());
    let product = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(product_id = id, is_deleted, "product deletion flag set");
    Ok(product.into())
}
