mod common;

use common::{money, seeded_state, setup_state};
use ecommerce_data::{
    dto::{
        categories::CreateCategoryRequest,
        customers::{CreateCustomerRequest, UpdateCustomerRequest},
        orders::{CreateOrderItemRequest, CreateOrderRequest, UpdateOrderItemRequest},
        products::{CreateProductRequest, UpdateProductRequest},
    },
    error::AppError,
    params::ListQuery,
    services::{
        category_service, customer_service, order_item_service, order_service, product_service,
    },
};

fn product(price: i64, stock: i32, category_id: Option<i32>) -> CreateProductRequest {
    CreateProductRequest {
        name: "Widget".into(),
        description: None,
        price: money(price),
        stock_quantity: stock,
        category_id,
    }
}

fn customer(email: &str) -> CreateCustomerRequest {
    CreateCustomerRequest {
        full_name: "Dana Scully".into(),
        email: email.into(),
        phone: None,
        address: None,
    }
}

#[tokio::test]
async fn negative_product_values_are_rejected_without_writing() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let err = product_service::create_product(&state, product(-1, 5, None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let err = product_service::create_product(&state, product(100, -1, None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let page = product_service::list_products(&state, ListQuery::first_hundred()).await?;
    assert_eq!(page.total, 0);

    // zero is allowed for both
    let free = product_service::create_product(&state, product(0, 0, None)).await?;
    assert_eq!(free.stock_quantity, 0);

    Ok(())
}

#[tokio::test]
async fn rejected_update_leaves_row_unchanged() -> anyhow::Result<()> {
    let state = seeded_state().await?;
    let before = product_service::get_product(&state, 2).await?;

    let err = product_service::update_product(
        &state,
        2,
        UpdateProductRequest {
            name: Some("Renamed".into()),
            price: Some(money(-500)),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let after = product_service::get_product(&state, 2).await?;
    assert_eq!(before, after);
    Ok(())
}

#[tokio::test]
async fn order_amounts_and_quantities_are_checked() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let err = order_service::create_order(
        &state,
        CreateOrderRequest {
            customer_id: 1,
            order_date: None,
            status: None,
            total_amount: money(-1),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    for quantity in [0, -3] {
        let err = order_item_service::create_order_item(
            &state,
            CreateOrderItemRequest {
                order_id: 2,
                product_id: 3,
                quantity,
                price_per_unit: money(39_900),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation(_)));
    }

    let err = order_item_service::create_order_item(
        &state,
        CreateOrderItemRequest {
            order_id: 2,
            product_id: 3,
            quantity: 1,
            price_per_unit: money(-1),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let err = order_item_service::update_order_item(
        &state,
        1,
        UpdateOrderItemRequest {
            quantity: Some(0),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let orders = order_service::list_orders(&state, ListQuery::first_hundred()).await?;
    assert_eq!(orders.total, 3);
    let items = order_item_service::list_order_items(&state, ListQuery::first_hundred()).await?;
    assert_eq!(items.total, 5);
    assert_eq!(order_item_service::get_order_item(&state, 1).await?.quantity, 1);

    Ok(())
}

#[tokio::test]
async fn category_names_are_unique_even_after_soft_delete() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let request = CreateCategoryRequest {
        name: "Garden".into(),
        description: None,
    };

    let first = category_service::create_category(&state, request.clone()).await?;
    let err = category_service::create_category(&state, request.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    category_service::soft_delete_category(&state, first.id).await?;
    let err = category_service::create_category(&state, request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    Ok(())
}

#[tokio::test]
async fn customer_emails_are_unique() -> anyhow::Result<()> {
    let state = setup_state().await?;

    customer_service::create_customer(&state, customer("dana@example.com")).await?;
    let other = customer_service::create_customer(&state, customer("fox@example.com")).await?;

    let err = customer_service::create_customer(&state, customer("dana@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let err = customer_service::update_customer(
        &state,
        other.id,
        UpdateCustomerRequest {
            email: Some("dana@example.com".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    // keeping one's own email is not a conflict
    let same = customer_service::update_customer(
        &state,
        other.id,
        UpdateCustomerRequest {
            email: Some("fox@example.com".into()),
            phone: Some(Some("555-0199".into())),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(same.phone.as_deref(), Some("555-0199"));

    Ok(())
}

#[tokio::test]
async fn dangling_references_are_constraint_violations() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let err = product_service::create_product(&state, product(100, 1, Some(99)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let err = order_service::create_order(
        &state,
        CreateOrderRequest {
            customer_id: 42,
            order_date: None,
            status: None,
            total_amount: money(0),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let err = order_item_service::create_order_item(
        &state,
        CreateOrderItemRequest {
            order_id: 77,
            product_id: 1,
            quantity: 1,
            price_per_unit: money(100),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    let err = order_item_service::create_order_item(
        &state,
        CreateOrderItemRequest {
            order_id: 1,
            product_id: 77,
            quantity: 1,
            price_per_unit: money(100),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));

    // a product without a category is fine
    let loose = product_service::create_product(&state, product(100, 1, None)).await?;
    assert_eq!(loose.category_id, None);

    Ok(())
}

#[tokio::test]
async fn unknown_ids_are_not_found() -> anyhow::Result<()> {
    let state = seeded_state().await?;

    let err = product_service::update_product(&state, 404, UpdateProductRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::NotFound {
            entity: "product",
            id: 404
        }
    ));

    assert!(matches!(
        category_service::soft_delete_category(&state, 404).await,
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        customer_service::soft_delete_customer(&state, 404).await,
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        order_item_service::soft_delete_order_item(&state, 404).await,
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        order_service::hard_delete_order(&state, 404).await,
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        order_service::get_order(&state, 404).await,
        Err(AppError::NotFound { .. })
    ));

    Ok(())
}
