//! Schema definition: tables, constraints and the two read views.
//!
//! Statements are built through sea-query so the same migration runs on
//! Postgres and SQLite.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_tables;
mod m20240101_000002_create_views;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_tables::Migration),
            Box::new(m20240101_000002_create_views::Migration),
        ]
    }
}
