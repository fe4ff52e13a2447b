#![allow(dead_code)]

use ecommerce_data::{
    config::AppConfig,
    db::{create_orm_conn, reset_schema},
    seed,
    state::AppState,
};
use rust_decimal::Decimal;

/// Fresh schema on `TEST_DATABASE_URL`, or a private in-memory SQLite
/// database when it is unset. Postgres runs need `--test-threads=1`.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let database_url =
        std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let orm = create_orm_conn(&AppConfig::for_url(database_url)).await?;
    reset_schema(&orm).await?;
    Ok(AppState::new(orm))
}

pub async fn seeded_state() -> anyhow::Result<AppState> {
    let state = setup_state().await?;
    seed::load_fixture(&state).await?;
    Ok(state)
}

pub fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
