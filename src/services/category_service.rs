use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::categories::{CreateCategoryRequest, UpdateCategoryRequest},
    entity::categories::{ActiveModel, Column, Entity as Categories},
    error::{AppError, AppResult},
    models::Category,
    params::{ListQuery, Page},
    services::now,
    state::AppState,
};

const ENTITY: &str = "category";

pub async fn create_category(
    state: &AppState,
    payload: CreateCategoryRequest,
) -> AppResult<Category> {
    let txn = state.orm.begin().await?;
    let created = insert_category(&txn, payload).await?;
    txn.commit().await?;
    Ok(created)
}

/// Checks and inserts on `db` without committing; the caller owns the
/// transaction.
pub async fn insert_category<C: ConnectionTrait>(
    db: &C,
    payload: CreateCategoryRequest,
) -> AppResult<Category> {
    ensure_name_available(db, &payload.name, None).await?;

    let stamp = now();
    let category = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        created_at: Set(stamp),
        updated_at: Set(stamp),
        is_deleted: Set(false),
    }
    .insert(db)
    .await?;

    tracing::info!(category_id = category.id, "category created");
    Ok(category.into())
}

pub async fn get_category(state: &AppState, id: i32) -> AppResult<Category> {
    Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Category::from)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

pub async fn list_categories(state: &AppState, query: ListQuery) -> AppResult<Page<Category>> {
    let (page, per_page, offset) = query.pagination.normalize();
    let mut finder = Categories::find();
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
        .map(Category::from)
        .collect();

    Ok(Page {
        items,
        page,
        per_page,
        total,
    })
}

pub async fn update_category(
    state: &AppState,
    id: i32,
    payload: UpdateCategoryRequest,
) -> AppResult<Category> {
    let txn = state.orm.begin().await?;
    let existing = Categories::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        ensure_name_available(&txn, &name, Some(id)).await?;
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    active.updated_at = Set(now());
    let category = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(category_id = id, "category updated");
    Ok(category.into())
}

/// Marks the category deleted. Products keep pointing at it but drop out of
/// the availability view.
pub async fn soft_delete_category(state: &AppState, id: i32) -> AppResult<Category> {
    set_deleted(state, id, true).await
}

pub async fn restore_category(state: &AppState, id: i32) -> AppResult<Category> {
    set_deleted(state, id, false).await
}

async fn set_deleted(state: &AppState, id: i32, is_deleted: bool) -> AppResult<Category> {
    let txn = state.orm.begin().await?;
    let existing = Categories::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    let mut active: ActiveModel = existing.into();
    active.is_deleted = Set(is_deleted);
    active.updated_at = Set(now());
    let category = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(category_id = id, is_deleted, "category deletion flag set");
    Ok(category.into())
}

/// Names are unique across every row, soft-deleted ones included.
async fn ensure_name_available<C: ConnectionTrait>(
    db: &C,
    name: &str,
    except: Option<i32>,
) -> AppResult<()> {
    let mut finder = Categories::find().filter(Column::Name.eq(name));
    if let Some(id) = except {
        finder = finder.filter(Column::Id.ne(id));
    }
    if finder.one(db).await?.is_some() {
        tracing::warn!(name, "rejected write: duplicate category name");
        return Err(AppError::constraint(format!(
            "category name {name:?} already exists"
        )));
    }
    Ok(())
}
