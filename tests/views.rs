mod common;

use common::{money, seeded_state};
use ecommerce_data::{
    dto::{
        orders::{CreateOrderRequest, UpdateOrderItemRequest},
        products::UpdateProductRequest,
    },
    models::{Availability, StatusFilter},
    services::{order_item_service, order_service, product_service, view_service},
};

#[tokio::test]
async fn order_summary_for_seeded_order() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let summary = view_service::order_summary(&state, 1)
        .await?
        .expect("order 1 summarised");
    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.customer_name, "Alice Johnson");
    assert_eq!(summary.customer_email, "alice@example.com");
    assert_eq!(summary.status, "Shipped");
    assert_eq!(summary.total_amount.round_dp(2), money(3_059_899));

    let all = view_service::order_summaries(&state).await?;
    let counts: Vec<(i32, i64)> = all.iter().map(|s| (s.order_id, s.total_items)).collect();
    assert_eq!(counts, vec![(1, 2), (2, 1), (3, 2)]);

    Ok(())
}

#[tokio::test]
async fn availability_label_follows_stock() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let rows = view_service::product_availability(&state).await?;
    assert_eq!(rows.len(), 6);
    for row in &rows {
        assert_eq!(
            row.availability,
            Availability::for_stock(row.stock_quantity),
            "product {}",
            row.product_id
        );
    }

    let jeans = rows.iter().find(|r| r.product_id == 6).expect("jeans row");
    assert_eq!(jeans.product_name, "Denim Jeans");
    assert_eq!(jeans.category_name, "Clothing");
    assert_eq!(jeans.availability, Availability::OutOfStock);

    let phone = rows.iter().find(|r| r.product_id == 1).expect("phone row");
    assert_eq!(phone.category_name, "Electronics");
    assert_eq!(phone.price.round_dp(2), money(2_999_999));
    assert_eq!(phone.availability, Availability::InStock);

    product_service::update_product(
        &state,
        1,
        UpdateProductRequest {
            stock_quantity: Some(0),
            ..Default::default()
        },
    )
    .await?;
    let phone = view_service::availability_for_product(&state, 1)
        .await?
        .expect("still listed");
    assert_eq!(phone.stock_quantity, 0);
    assert_eq!(phone.availability, Availability::OutOfStock);

    Ok(())
}

#[tokio::test]
async fn order_without_items_is_not_summarised() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let empty = order_service::create_order(
        &state,
        CreateOrderRequest {
            customer_id: 2,
            order_date: None,
            status: None,
            total_amount: money(0),
        },
    )
    .await?;

    assert!(view_service::order_summary(&state, empty.id).await?.is_none());
    // the order itself is live
    let stored = order_service::get_order(&state, empty.id).await?;
    assert_eq!(stored.status, "Pending");

    Ok(())
}

#[tokio::test]
async fn order_with_only_deleted_items_is_not_summarised() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let items = order_item_service::list_for_order(&state, 3, StatusFilter::Active).await?;
    assert_eq!(items.len(), 2);

    order_item_service::soft_delete_order_item(&state, items[0].id).await?;
    let partial = view_service::order_summary(&state, 3)
        .await?
        .expect("one item left");
    assert_eq!(partial.total_items, 1);
    // stored total is not recomputed
    assert_eq!(partial.total_amount.round_dp(2), money(229_700));

    order_item_service::soft_delete_order_item(&state, items[1].id).await?;
    assert!(view_service::order_summary(&state, 3).await?.is_none());

    let order = order_service::get_order(&state, 3).await?;
    assert_eq!(order.status, "Delivered");

    let restored = order_item_service::restore_order_item(&state, items[1].id).await?;
    assert_eq!(restored.order_id, 3);
    assert_eq!(
        view_service::order_summary(&state, 3)
            .await?
            .map(|s| s.total_items),
        Some(1)
    );

    Ok(())
}

#[tokio::test]
async fn soft_deleted_order_leaves_summary() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    order_service::soft_delete_order(&state, 2).await?;
    let ids: Vec<i32> = view_service::order_summaries(&state)
        .await?
        .iter()
        .map(|s| s.order_id)
        .collect();
    assert_eq!(ids, vec![1, 3]);

    order_service::restore_order(&state, 2).await?;
    assert!(view_service::order_summary(&state, 2).await?.is_some());

    Ok(())
}

#[tokio::test]
async fn item_changes_show_up_in_summary() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let item = order_item_service::update_order_item(
        &state,
        3,
        UpdateOrderItemRequest {
            quantity: Some(2),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(item.quantity, 2);

    // total_items counts rows, not units
    let summary = view_service::order_summary(&state, 2).await?.expect("order 2");
    assert_eq!(summary.total_items, 1);

    Ok(())
}

#[tokio::test]
async fn detached_product_leaves_availability_view() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let product = product_service::update_product(
        &state,
        4,
        UpdateProductRequest {
            description: Some(None),
            category_id: Some(None),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(product.category_id, None);
    assert_eq!(product.description, None);
    assert!(view_service::availability_for_product(&state, 4).await?.is_none());

    // leaving the field out keeps the column as it is
    let renamed = product_service::update_product(
        &state,
        4,
        UpdateProductRequest {
            name: Some("Database Design, 2nd ed.".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(renamed.category_id, None);

    let reattached = product_service::update_product(
        &state,
        4,
        UpdateProductRequest {
            category_id: Some(Some(2)),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(reattached.category_id, Some(2));
    let row = view_service::availability_for_product(&state, 4)
        .await?
        .expect("listed again");
    assert_eq!(row.category_name, "Books");

    Ok(())
}
