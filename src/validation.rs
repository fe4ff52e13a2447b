//! Checks mirrored from the table CHECK constraints, run before any write
//! so a rejected value never reaches the database.

use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

pub fn non_negative_amount(field: &'static str, value: Decimal) -> AppResult<()> {
    if value < Decimal::ZERO {
        tracing::warn!(field, %value, "rejected write: negative amount");
        return Err(AppError::constraint(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    Ok(())
}

pub fn non_negative_count(field: &'static str, value: i32) -> AppResult<()> {
    if value < 0 {
        tracing::warn!(field, value, "rejected write: negative count");
        return Err(AppError::constraint(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    Ok(())
}

pub fn positive_count(field: &'static str, value: i32) -> AppResult<()> {
    if value <= 0 {
        tracing::warn!(field, value, "rejected write: count must be positive");
        return Err(AppError::constraint(format!(
            "{field} must be greater than zero (got {value})"
        )));
    }
    Ok(())
}
