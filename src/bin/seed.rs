use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecommerce_data::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed,
    services::view_service,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ecommerce_data=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config).await?;
    run_migrations(&orm).await?;
    let state = AppState::new(orm);

    if seed::is_empty(&state).await? {
        let report = seed::load_fixture(&state).await?;
        tracing::info!(?report, "seed completed");
    } else {
        tracing::info!("database already holds rows, skipping seed");
    }

    for row in view_service::order_summaries(&state).await? {
        println!("{}", serde_json::to_string(&row)?);
    }
    for row in view_service::product_availability(&state).await? {
        println!("{}", serde_json::to_string(&row)?);
    }

    Ok(())
}
