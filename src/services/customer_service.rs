use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::customers::{CreateCustomerRequest, UpdateCustomerRequest},
    entity::customers::{ActiveModel, Column, Entity as Customers},
    error::{AppError, AppResult},
    models::Customer,
    params::{ListQuery, Page},
    services::now,
    state::AppState,
};

const ENTITY: &str = "customer";

pub async fn create_customer(
    state: &AppState,
    payload: CreateCustomerRequest,
) -> AppResult<Customer> {
    let txn = state.orm.begin().await?;
    let created = insert_customer(&txn, payload).await?;
    txn.commit().await?;
    Ok(created)
}

/// Checks and inserts on `db` without committing; the caller owns the
/// transaction.
pub async fn insert_customer<C: ConnectionTrait>(
    db: &C,
    payload: CreateCustomerRequest,
) -> AppResult<Customer> {
    ensure_email_available(db, &payload.email, None).await?;

    let stamp = now();
    let customer = ActiveModel {
        id: NotSet,
        full_name: Set(payload.full_name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        address: Set(payload.address),
        created_at: Set(stamp),
        updated_at: Set(stamp),
        is_deleted: Set(false),
    }
    .insert(db)
    .await?;

    tracing::info!(customer_id = customer.id, "customer created");
    Ok(customer.into())
}

pub async fn get_customer(state: &AppState, id: i32) -> AppResult<Customer> {
    Customers::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Customer::from)
        .ok_or_else(|| AppError::not_found(ENTITY, id))
}

pub async fn find_by_email(state: &AppState, email: &str) -> AppResult<Option<Customer>> {
    let customer = Customers::find()
        .filter(Column::Email.eq(email))
        .one(&state.orm)
        .await?
        .map(Customer::from);
    Ok(customer)
}

pub async fn list_customers(state: &AppState, query: ListQuery) -> AppResult<Page<Customer>> {
    let (page, per_page, offset) = query.pagination.normalize();
    let mut finder = Customers::find();
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
        .map(Customer::from)
        .collect();

    Ok(Page {
        items,
        page,
        per_page,
        total,
    })
}

pub async fn update_customer(
    state: &AppState,
    id: i32,
    payload: UpdateCustomerRequest,
) -> AppResult<Customer> {
    let txn = state.orm.begin().await?;
    let existing = Customers::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    let mut active: ActiveModel = existing.into();
    if let Some(full_name) = payload.full_name {
        active.full_name = Set(full_name);
    }
    if let Some(email) = payload.email {
        ensure_email_available(&txn, &email, Some(id)).await?;
        active.email = Set(email);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(phone);
    }
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    active.updated_at = Set(now());
    let customer = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(customer_id = id, "customer updated");
    Ok(customer.into())
}

/// Orders placed by the customer are left untouched.
pub async fn soft_delete_customer(state: &AppState, id: i32) -> AppResult<Customer> {
    set_deleted(state, id, true).await
}

pub async fn restore_customer(state: &AppState, id: i32) -> AppResult<Customer> {
    set_deleted(state, id, false).await
}

async fn set_deleted(state: &AppState, id: i32, is_deleted: bool) -> AppResult<Customer> {
    let txn = state.orm.begin().await?;
    let existing = Customers::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    let mut active: ActiveModel = existing.into();
    active.is_deleted = Set(is_deleted);
    active.updated_at = Set(now());
    let customer = active.update(&txn).await?;

    txn.commit().await?;
    tracing::info!(customer_id = id, is_deleted, "customer deletion flag set");
    Ok(customer.into())
}

async fn ensure_email_available<C: ConnectionTrait>(
    db: &C,
    email: &str,
    except: Option<i32>,
) -> AppResult<()> {
    let mut finder = Customers::find().filter(Column::Email.eq(email));
    if let Some(id) = except {
        finder = finder.filter(Column::Id.ne(id));
    }
    if finder.one(db).await?.is_some() {
        tracing::warn!(email, "rejected write: duplicate customer email");
        return Err(AppError::constraint(format!(
            "customer email {email:?} already exists"
        )));
    }
    Ok(())
}
