//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users;
mod m20240601_000002_create_roles;
mod m20240601_000003_create_info_catalog;
mod m20240601_000004_create_user_infos;
mod m20240601_000005_create_carrier_tokens;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users::Migration),
            Box::new(m20240601_000002_create_roles::Migration),
            Box::new(m20240601_000003_create_info_catalog::Migration),
            Box::new(m20240601_000004_create_user_infos::Migration),
            Box::new(m20240601_000005_create_carrier_tokens::Migration),
        ]
    }
}
