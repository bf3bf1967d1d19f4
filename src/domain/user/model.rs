//! User aggregate and info-catalog types
//!
//! ORM-free mirrors of the persisted entities. The aggregate carries the
//! user's roles and stored info values so the projection logic never touches
//! the database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A role assignable to users. Info groups hang off roles, which is how a
/// user's reachable info-item catalog is determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i32,
    pub name: String,
}

/// Catalog definition of a displayable user attribute (e.g. "mobile number").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoItem {
    pub id: i32,
    /// Display order, ascending
    pub order: i32,
    pub item_type: String,
    pub name: String,
    pub description: String,
    pub register_display: bool,
    pub information_display: bool,
}

/// Concrete value a specific user holds for a specific [`InfoItem`].
/// Absence of a value for a (user, item) pair is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoValue {
    pub id: i32,
    pub info_item_id: i32,
    pub value: String,
}

/// User aggregate with loaded roles and stored info values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub password_hash: String,
    pub banned: bool,
    pub recycled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub roles: Vec<Role>,
    pub infos: Vec<UserInfoValue>,
}

/// One projected row per catalog item, in catalog order. `id` and `value`
/// are absent when the user holds no value for the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedUserInfo {
    pub id: Option<i32>,
    pub order: i32,
    /// Id of the catalog [`InfoItem`] this row was projected from
    pub relation_id: i32,
    pub item_type: String,
    pub name: String,
    pub value: Option<String>,
    pub description: String,
    pub register_display: bool,
    pub information_display: bool,
}

/// Display-ready user data: identity and status fields plus the ordered
/// info projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProjection {
    pub user_id: i32,
    pub username: String,
    pub mobile: Option<String>,
    pub banned: bool,
    pub recycled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub roles: Vec<Role>,
    pub infos: Vec<ProjectedUserInfo>,
}
