use chrono::Utc;
use sea_orm::{
    ConnectionTrait, EntityTrait, PrimaryKeyTrait, prelude::DateTimeWithTimeZone,
};

use crate::error::{AppError, AppResult};

pub mod category_service;
pub mod customer_service;
pub mod order_item_service;
pub mod order_service;
pub mod product_service;
pub mod view_service;

/// Timestamp stamped into `created_at` / `updated_at` by every write.
pub(crate) fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

/// Fails with a constraint violation when `column` points at a row that does
/// not exist. Soft-deleted rows still exist and pass.
pub(crate) async fn ensure_reference<E, C>(db: &C, column: &'static str, id: i32) -> AppResult<()>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    if E::find_by_id(id).one(db).await?.is_none() {
        tracing::warn!(column, id, "rejected write: dangling reference");
        return Err(AppError::constraint(format!(
            "{column} references missing row {id}"
        )));
    }
    Ok(())
}
