use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const ORDER_SUMMARY_VIEW: &str = r#"
CREATE VIEW order_summary_view AS
SELECT
    o.id AS order_id,
    o.order_date AS order_date,
    c.full_name AS customer_name,
    c.email AS customer_email,
    o.status AS status,
    o.total_amount AS total_amount,
    COUNT(oi.id) AS total_items
FROM orders o
JOIN customers c ON c.id = o.customer_id
JOIN order_items oi ON oi.order_id = o.id
WHERE o.is_deleted = FALSE
  AND oi.is_deleted = FALSE
GROUP BY o.id, o.order_date, o.status, o.total_amount, c.full_name, c.email
"#;

const PRODUCT_AVAILABILITY_VIEW: &str = r#"
CREATE VIEW product_availability_view AS
SELECT
    p.id AS product_id,
    p.name AS product_name,
    c.name AS category_name,
    p.price AS price,
    p.stock_quantity AS stock_quantity,
    CASE
        WHEN p.stock_quantity > 0 THEN 'In Stock'
        ELSE 'Out of Stock'
    END AS availability
FROM products p
JOIN categories c ON c.id = p.category_id
WHERE p.is_deleted = FALSE
  AND c.is_deleted = FALSE
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(ORDER_SUMMARY_VIEW).await?;
        db.execute_unprepared(PRODUCT_AVAILABILITY_VIEW).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP VIEW IF EXISTS product_availability_view")
            .await?;
        db.execute_unprepared("DROP VIEW IF EXISTS order_summary_view")
            .await?;
        Ok(())
    }
}
