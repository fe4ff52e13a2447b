use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("ORM error: {0}")]
    OrmError(#[source] DbErr),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        AppError::NotFound { entity, id }
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        AppError::ConstraintViolation(message.into())
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::ConstraintViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                AppError::ConstraintViolation(msg)
            }
            _ => AppError::OrmError(err),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
