//! Migration to create the user_infos table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserInfos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserInfos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserInfos::UserId).integer().not_null())
                    .col(ColumnDef::new(UserInfos::InfoItemId).integer().not_null())
                    .col(ColumnDef::new(UserInfos::Value).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_infos_user")
                            .from(UserInfos::Table, UserInfos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_infos_item")
                            .from(UserInfos::Table, UserInfos::InfoItemId)
                            .to(InfoItems::Table, InfoItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_infos_user_id")
                    .table(UserInfos::Table)
                    .col(UserInfos::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserInfos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserInfos {
    Table,
    Id,
    UserId,
    InfoItemId,
    Value,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum InfoItems {
    Table,
    Id,
}
