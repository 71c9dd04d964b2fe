pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_restaurant_table;
mod m20240601_000002_create_user_table;
mod m20240601_000003_create_client_table;
mod m20240601_000004_create_reservation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_restaurant_table::Migration),
            Box::new(m20240601_000002_create_user_table::Migration),
            Box::new(m20240601_000003_create_client_table::Migration),
            Box::new(m20240601_000004_create_reservation_table::Migration),
        ]
    }
}
