//! Reads over the two SQL views. Both are recomputed by the database on
//! every query, so results always reflect the current base rows.

use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::{
        order_summary::{self, Entity as OrderSummaryView},
        product_availability::{self, Entity as ProductAvailabilityView},
    },
    error::AppResult,
    models::{OrderSummary, ProductAvailability},
    state::AppState,
};

pub async fn order_summaries(state: &AppState) -> AppResult<Vec<OrderSummary>> {
    let rows = OrderSummaryView::find()
        .order_by_asc(order_summary::Column::OrderId)
        .all(&state.orm)
        .await?;
    tracing::debug!(rows = rows.len(), "read order summary view");
    Ok(rows.into_iter().map(OrderSummary::from).collect())
}

/// `None` when the order is deleted, missing, or has no active items.
pub async fn order_summary(state: &AppState, order_id: i32) -> AppResult<Option<OrderSummary>> {
    let row = OrderSummaryView::find_by_id(order_id)
        .one(&state.orm)
        .await?
        .map(OrderSummary::from);
    Ok(row)
}

pub async fn product_availability(state: &AppState) -> AppResult<Vec<ProductAvailability>> {
    let rows = ProductAvailabilityView::find()
        .order_by_asc(product_availability::Column::ProductId)
        .all(&state.orm)
        .await?;
    tracing::debug!(rows = rows.len(), "read product availability view");
    Ok(rows.into_iter().map(ProductAvailability::from).collect())
}

/// `None` when the product or its category is deleted, or it has no category.
pub async fn availability_for_product(
    state: &AppState,
    product_id: i32,
) -> AppResult<Option<ProductAvailability>> {
    let row = ProductAvailabilityView::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .map(ProductAvailability::from);
    Ok(row)
}
