//! User repository interface
//!
//! Async seam between the user service and the persistence layer. The
//! sea-orm implementation lives in `infrastructure::database::repositories`;
//! tests use an in-memory implementation.

use async_trait::async_trait;

use super::dto::FindUsersDto;
use super::model::{InfoItem, User};
use crate::domain::error::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Insert a user row and return its id. Roles and info values are
    /// attached separately.
    async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
        mobile: Option<&str>,
        email: Option<&str>,
    ) -> DomainResult<i32>;

    /// Load the full aggregate (roles + info values) by id.
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;

    /// Load the full aggregate by username or mobile.
    async fn find_by_login_name(&self, login_name: &str) -> DomainResult<Option<User>>;

    /// Bare uniqueness probe by username.
    async fn username_taken(&self, username: &str) -> DomainResult<bool>;

    /// Bare uniqueness probe by mobile.
    async fn mobile_taken(&self, mobile: &str) -> DomainResult<bool>;

    /// Page of non-recycled user aggregates plus the total match count.
    async fn find_page(&self, dto: &FindUsersDto) -> DomainResult<(Vec<User>, u64)>;

    /// Ordered info-item catalog reachable through the roles of the given
    /// users, ascending by display order.
    async fn catalog_for_users(&self, user_ids: &[i32]) -> DomainResult<Vec<InfoItem>>;

    async fn set_banned(&self, id: i32, banned: bool) -> DomainResult<()>;

    async fn set_recycled(&self, id: i32, recycled: bool) -> DomainResult<()>;

    async fn update_username(&self, id: i32, username: &str) -> DomainResult<()>;

    async fn update_mobile(&self, id: i32, mobile: &str) -> DomainResult<()>;

    async fn update_email(&self, id: i32, email: &str) -> DomainResult<()>;

    async fn update_password_hash(&self, id: i32, password_hash: &str) -> DomainResult<()>;

    async fn touch_last_login(&self, id: i32) -> DomainResult<()>;

    async fn attach_roles(&self, user_id: i32, role_ids: &[i32]) -> DomainResult<()>;

    /// Detach `before` and attach `after` for the user.
    async fn replace_role(&self, user_id: i32, before: i32, after: i32) -> DomainResult<()>;

    async fn insert_info_value(
        &self,
        user_id: i32,
        info_item_id: i32,
        value: &str,
    ) -> DomainResult<()>;

    async fn update_info_value(&self, value_id: i32, value: &str) -> DomainResult<()>;

    /// Hard delete: detaches roles, removes info values, removes the row.
    async fn delete_user(&self, id: i32) -> DomainResult<()>;
}
