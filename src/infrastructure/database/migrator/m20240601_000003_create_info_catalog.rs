//! Migration to create the info catalog: groups, items and their join table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InfoGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InfoGroups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InfoGroups::Name).string_len(100).not_null())
                    .col(ColumnDef::new(InfoGroups::RoleId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_info_groups_role")
                            .from(InfoGroups::Table, InfoGroups::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InfoItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InfoItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InfoItems::DisplayOrder).integer().not_null())
                    .col(ColumnDef::new(InfoItems::ItemType).string_len(20).not_null())
                    .col(ColumnDef::new(InfoItems::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(InfoItems::Description)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(InfoItems::RegisterDisplay)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(InfoItems::InformationDisplay)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_info_items_display_order")
                    .table(InfoItems::Table)
                    .col(InfoItems::DisplayOrder)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InfoItemsGroups::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(InfoItemsGroups::InfoItemId).integer().not_null())
                    .col(ColumnDef::new(InfoItemsGroups::InfoGroupId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(InfoItemsGroups::InfoItemId)
                            .col(InfoItemsGroups::InfoGroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_info_items_groups_item")
                            .from(InfoItemsGroups::Table, InfoItemsGroups::InfoItemId)
                            .to(InfoItems::Table, InfoItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_info_items_groups_group")
                            .from(InfoItemsGroups::Table, InfoItemsGroups::InfoGroupId)
                            .to(InfoGroups::Table, InfoGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InfoItemsGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InfoItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InfoGroups::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum InfoGroups {
    Table,
    Id,
    Name,
    RoleId,
}

#[derive(Iden)]
enum InfoItems {
    Table,
    Id,
    DisplayOrder,
    ItemType,
    Name,
    Description,
    RegisterDisplay,
    InformationDisplay,
}

#[derive(Iden)]
enum InfoItemsGroups {
    Table,
    InfoItemId,
    InfoGroupId,
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
}
