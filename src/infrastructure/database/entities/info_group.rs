//! Info-group entity — groups catalog items under a role

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "info_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub role_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id"
    )]
    Role,
    #[sea_orm(has_many = "super::info_item_group::Entity")]
    ItemLinks,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::info_item::Entity> for Entity {
    fn to() -> RelationDef {
        super::info_item_group::Relation::InfoItem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::info_item_group::Relation::InfoGroup.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
