//! Migration to create the carrier_tokens table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarrierTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CarrierTokens::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CarrierTokens::Token).string().not_null())
                    .col(
                        ColumnDef::new(CarrierTokens::RefreshedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarrierTokens::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CarrierTokens {
    Table,
    Id,
    Token,
    RefreshedAt,
}
