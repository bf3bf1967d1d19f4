//! Info-item / info-group join entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "info_items_groups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub info_item_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub info_group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::info_item::Entity",
        from = "Column::InfoItemId",
        to = "super::info_item::Column::Id"
    )]
    InfoItem,
    #[sea_orm(
        belongs_to = "super::info_group::Entity",
        from = "Column::InfoGroupId",
        to = "super::info_group::Column::Id"
    )]
    InfoGroup,
}

impl Related<super::info_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InfoItem.def()
    }
}

impl Related<super::info_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InfoGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
