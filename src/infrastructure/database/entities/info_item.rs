//! Info-item entity — catalog definition of a displayable user attribute

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "info_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display order, ascending
    #[sea_orm(column_name = "display_order")]
    pub order: i32,
    pub item_type: String,
    pub name: String,
    pub description: String,
    pub register_display: bool,
    pub information_display: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::info_item_group::Entity")]
    GroupLinks,
    #[sea_orm(has_many = "super::user_info::Entity")]
    UserInfos,
}

impl Related<super::user_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserInfos.def()
    }
}

impl Related<super::info_group::Entity> for Entity {
    fn to() -> RelationDef {
        super::info_item_group::Relation::InfoGroup.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::info_item_group::Relation::InfoItem.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
