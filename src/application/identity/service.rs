//! User management service — application-layer orchestration
//!
//! All user-related business logic lives here. GraphQL resolvers are thin
//! wrappers that delegate to this service and translate `DomainError` into
//! `{code, message}` payloads.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    project_user, CreateUserDto, DomainError, DomainResult, FindUsersDto, UpdateUserDto,
    UserProjection, UserRepositoryInterface,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::shared::Pager;

/// Upper bound applied to requested page sizes.
const MAX_PAGE_SIZE: u64 = 100;

/// Soft-removal action applied by `recycle_or_ban_user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    /// Move the user to the recycle bin
    Recycle,
    /// Ban the account
    Ban,
}

/// Status flag cleared by `revert_banned_or_recycled_user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertStatus {
    Recycled,
    Banned,
}

/// Token issued after a successful login
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub access_token: String,
    pub expires_in: i64,
}

/// Result of a successful login: a token plus the reconciled user data.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token_info: TokenInfo,
    pub user: UserProjection,
}

/// One page of reconciled users.
#[derive(Debug)]
pub struct UserListPage {
    pub total_items: u64,
    pub pager: Pager,
    pub users: Vec<UserProjection>,
}

/// User service — orchestrates all identity / user-management use-cases.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
    jwt_config: JwtConfig,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>, jwt_config: JwtConfig) -> Self {
        Self { repo, jwt_config }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by username or mobile + password. Returns a JWT and the
    /// reconciled user projection built from the role-scoped catalog.
    pub async fn login(&self, login_name: &str, password: &str) -> DomainResult<LoginOutcome> {
        let user = self
            .repo
            .find_by_login_name(login_name)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "login",
                value: login_name.to_string(),
            })?;

        if user.banned || user.recycled {
            return Err(DomainError::Forbidden(
                "Account is banned or in the recycle bin".into(),
            ));
        }

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized(
                "Wrong username or password".into(),
            ));
        }

        let catalog = self.repo.catalog_for_users(&[user.id]).await?;
        let projection = project_user(&user, &catalog);

        self.repo.touch_last_login(user.id).await?;

        let token = create_token(user.id, &user.username, &self.jwt_config)
            .map_err(|e| DomainError::Validation(format!("Failed to create token: {}", e)))?;

        info!(user_id = user.id, username = %user.username, "User logged in");

        Ok(LoginOutcome {
            token_info: TokenInfo {
                access_token: token,
                expires_in: self.jwt_config.expiration_hours * 3600,
            },
            user: projection,
        })
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Create a user with optional roles and initial info values.
    pub async fn create_user(&self, dto: CreateUserDto) -> DomainResult<()> {
        if dto.username.is_empty() && dto.password.is_empty() {
            return Err(DomainError::Validation(
                "Username and password are required".into(),
            ));
        }

        if !dto.username.is_empty() && self.repo.username_taken(&dto.username).await? {
            return Err(DomainError::Conflict("Username already in use".into()));
        }

        let password_hash = hash_password(&dto.password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        let user_id = self
            .repo
            .insert_user(
                &dto.username,
                &password_hash,
                dto.mobile.as_deref(),
                dto.email.as_deref(),
            )
            .await?;

        if !dto.role_ids.is_empty() {
            self.repo.attach_roles(user_id, &dto.role_ids).await?;
        }

        // On create, `key` carries the info-item id the value belongs to.
        for kv in &dto.info_kvs {
            if let Some(item_id) = kv.key {
                self.repo
                    .insert_info_value(user_id, item_id, &kv.value)
                    .await?;
            }
        }

        info!(user_id, username = %dto.username, "User created");
        Ok(())
    }

    /// Conditionally update profile fields, role assignments and info values.
    pub async fn update_user(&self, id: i32, dto: UpdateUserDto) -> DomainResult<()> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        if let Some(ref username) = dto.username {
            if self.repo.username_taken(username).await? {
                return Err(DomainError::Conflict("Username already exists".into()));
            }
            self.repo.update_username(id, username).await?;
        }

        if let Some(ref mobile) = dto.mobile {
            if self.repo.mobile_taken(mobile).await? {
                return Err(DomainError::Conflict(
                    "Mobile number already exists".into(),
                ));
            }
            self.repo.update_mobile(id, mobile).await?;
        }

        if let Some(ref email) = dto.email {
            self.repo.update_email(id, email).await?;
        }

        if let Some(ref password) = dto.password {
            let password_hash = hash_password(password)
                .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;
            self.repo.update_password_hash(id, &password_hash).await?;
        }

        for swap in &dto.role_ids {
            self.repo.replace_role(id, swap.before, swap.after).await?;
        }

        // On update, `key` addresses an existing value row; without it a new
        // row is inserted for the item referenced by `relation_id`.
        for kv in &dto.info_kvs {
            match kv.key {
                Some(value_id) => self.repo.update_info_value(value_id, &kv.value).await?,
                None => {
                    if let Some(item_id) = kv.relation_id {
                        self.repo.insert_info_value(id, item_id, &kv.value).await?;
                    }
                }
            }
        }

        info!(user_id = user.id, "User updated");
        Ok(())
    }

    /// Soft-remove: move to the recycle bin or ban the account.
    pub async fn recycle_or_ban_user(&self, id: i32, action: ModerationAction) -> DomainResult<()> {
        match action {
            ModerationAction::Recycle => self.repo.set_recycled(id, true).await?,
            ModerationAction::Ban => self.repo.set_banned(id, true).await?,
        }
        info!(user_id = id, ?action, "User soft-removed");
        Ok(())
    }

    /// Clear a ban or restore a user from the recycle bin.
    pub async fn revert_banned_or_recycled_user(
        &self,
        id: i32,
        status: RevertStatus,
    ) -> DomainResult<()> {
        match status {
            RevertStatus::Recycled => self.repo.set_recycled(id, false).await?,
            RevertStatus::Banned => self.repo.set_banned(id, false).await?,
        }
        info!(user_id = id, ?status, "User status reverted");
        Ok(())
    }

    /// Hard delete a user from the recycle bin.
    pub async fn delete_user(&self, id: i32) -> DomainResult<()> {
        self.repo.delete_user(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Paginated listing of non-recycled users, each carrying its full
    /// reconciled projection. An empty page is reported as not-found, per
    /// the API's `{code: 404}` contract.
    pub async fn find_all_users(&self, dto: FindUsersDto) -> DomainResult<UserListPage> {
        // Normalize paging once; the pager must describe the page actually
        // fetched.
        let dto = FindUsersDto {
            page_size: dto.page_size.clamp(1, MAX_PAGE_SIZE),
            page_number: dto.page_number.max(1),
            ..dto
        };

        let (users, total) = self.repo.find_page(&dto).await?;

        if users.is_empty() {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "page",
                value: dto.page_number.to_string(),
            });
        }

        let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        let catalog = self.repo.catalog_for_users(&ids).await?;

        let projections = users.iter().map(|u| project_user(u, &catalog)).collect();

        Ok(UserListPage {
            total_items: total,
            pager: Pager::new(total, dto.page_number, dto.page_size),
            users: projections,
        })
    }

    /// Single-user projection against the user's role-scoped catalog.
    pub async fn find_user_info_by_id(&self, id: i32) -> DomainResult<UserProjection> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        let catalog = self.repo.catalog_for_users(&[id]).await?;
        Ok(project_user(&user, &catalog))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::domain::{InfoItem, InfoKvDto, User, UserInfoValue};

    /// In-memory repository backing the service tests.
    #[derive(Default)]
    struct MemoryUsers {
        state: Mutex<MemoryState>,
    }

    #[derive(Default)]
    struct MemoryState {
        users: Vec<User>,
        next_user_id: i32,
        next_value_id: i32,
        /// user id → reachable catalog
        catalogs: HashMap<i32, Vec<InfoItem>>,
    }

    impl MemoryUsers {
        fn with_user(user: User) -> Self {
            let repo = Self::default();
            {
                let mut state = repo.state.lock().unwrap();
                state.next_user_id = user.id + 1;
                state.next_value_id = 1000;
                state.users.push(user);
            }
            repo
        }

        fn set_catalog(&self, user_id: i32, catalog: Vec<InfoItem>) {
            self.state.lock().unwrap().catalogs.insert(user_id, catalog);
        }

        fn user(&self, id: i32) -> Option<User> {
            self.state
                .lock()
                .unwrap()
                .users
                .iter()
                .find(|u| u.id == id)
                .cloned()
        }
    }

    #[async_trait]
    impl UserRepositoryInterface for MemoryUsers {
        async fn insert_user(
            &self,
            username: &str,
            password_hash: &str,
            mobile: Option<&str>,
            email: Option<&str>,
        ) -> DomainResult<i32> {
            let mut state = self.state.lock().unwrap();
            let id = state.next_user_id;
            state.next_user_id += 1;
            let now = Utc::now();
            state.users.push(User {
                id,
                username: username.to_string(),
                mobile: mobile.map(String::from),
                email: email.map(String::from),
                password_hash: password_hash.to_string(),
                banned: false,
                recycled: false,
                created_at: now,
                updated_at: now,
                last_login_at: None,
                roles: vec![],
                infos: vec![],
            });
            Ok(id)
        }

        async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
            Ok(self.user(id))
        }

        async fn find_by_login_name(&self, login_name: &str) -> DomainResult<Option<User>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .users
                .iter()
                .find(|u| u.username == login_name || u.mobile.as_deref() == Some(login_name))
                .cloned())
        }

        async fn username_taken(&self, username: &str) -> DomainResult<bool> {
            let state = self.state.lock().unwrap();
            Ok(state.users.iter().any(|u| u.username == username))
        }

        async fn mobile_taken(&self, mobile: &str) -> DomainResult<bool> {
            let state = self.state.lock().unwrap();
            Ok(state
                .users
                .iter()
                .any(|u| u.mobile.as_deref() == Some(mobile)))
        }

        async fn find_page(&self, dto: &FindUsersDto) -> DomainResult<(Vec<User>, u64)> {
            let state = self.state.lock().unwrap();
            let matches: Vec<User> = state
                .users
                .iter()
                .filter(|u| !u.recycled)
                .filter(|u| {
                    dto.username
                        .as_deref()
                        .map_or(true, |n| n.is_empty() || u.username.contains(n))
                })
                .filter(|u| {
                    dto.role_id
                        .map_or(true, |rid| u.roles.iter().any(|r| r.id == rid))
                })
                .cloned()
                .collect();
            let total = matches.len() as u64;
            let start = ((dto.page_number.max(1) - 1) * dto.page_size) as usize;
            let page = matches
                .into_iter()
                .skip(start)
                .take(dto.page_size as usize)
                .collect();
            Ok((page, total))
        }

        async fn catalog_for_users(&self, user_ids: &[i32]) -> DomainResult<Vec<InfoItem>> {
            let state = self.state.lock().unwrap();
            let mut items: Vec<InfoItem> = vec![];
            for id in user_ids {
                for item in state.catalogs.get(id).cloned().unwrap_or_default() {
                    if !items.iter().any(|i| i.id == item.id) {
                        items.push(item);
                    }
                }
            }
            items.sort_by_key(|i| i.order);
            Ok(items)
        }

        async fn set_banned(&self, id: i32, banned: bool) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            match state.users.iter_mut().find(|u| u.id == id) {
                Some(user) => {
                    user.banned = banned;
                    Ok(())
                }
                None => Err(DomainError::NotFound {
                    entity: "User",
                    field: "id",
                    value: id.to_string(),
                }),
            }
        }

        async fn set_recycled(&self, id: i32, recycled: bool) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            match state.users.iter_mut().find(|u| u.id == id) {
                Some(user) => {
                    user.recycled = recycled;
                    Ok(())
                }
                None => Err(DomainError::NotFound {
                    entity: "User",
                    field: "id",
                    value: id.to_string(),
                }),
            }
        }

        async fn update_username(&self, id: i32, username: &str) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
                user.username = username.to_string();
            }
            Ok(())
        }

        async fn update_mobile(&self, id: i32, mobile: &str) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
                user.mobile = Some(mobile.to_string());
            }
            Ok(())
        }

        async fn update_email(&self, id: i32, email: &str) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
                user.email = Some(email.to_string());
            }
            Ok(())
        }

        async fn update_password_hash(&self, id: i32, password_hash: &str) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
                user.password_hash = password_hash.to_string();
            }
            Ok(())
        }

        async fn touch_last_login(&self, id: i32) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
                user.last_login_at = Some(Utc::now());
            }
            Ok(())
        }

        async fn attach_roles(&self, user_id: i32, role_ids: &[i32]) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            if let Some(user) = state.users.iter_mut().find(|u| u.id == user_id) {
                for rid in role_ids {
                    user.roles.push(crate::domain::Role {
                        id: *rid,
                        name: format!("role-{}", rid),
                    });
                }
            }
            Ok(())
        }

        async fn replace_role(&self, user_id: i32, before: i32, after: i32) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            if let Some(user) = state.users.iter_mut().find(|u| u.id == user_id) {
                user.roles.retain(|r| r.id != before);
                user.roles.push(crate::domain::Role {
                    id: after,
                    name: format!("role-{}", after),
                });
            }
            Ok(())
        }

        async fn insert_info_value(
            &self,
            user_id: i32,
            info_item_id: i32,
            value: &str,
        ) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            let id = state.next_value_id;
            state.next_value_id += 1;
            if let Some(user) = state.users.iter_mut().find(|u| u.id == user_id) {
                user.infos.push(UserInfoValue {
                    id,
                    info_item_id,
                    value: value.to_string(),
                });
            }
            Ok(())
        }

        async fn update_info_value(&self, value_id: i32, value: &str) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            for user in state.users.iter_mut() {
                if let Some(info) = user.infos.iter_mut().find(|i| i.id == value_id) {
                    info.value = value.to_string();
                    return Ok(());
                }
            }
            Err(DomainError::NotFound {
                entity: "UserInfoValue",
                field: "id",
                value: value_id.to_string(),
            })
        }

        async fn delete_user(&self, id: i32) -> DomainResult<()> {
            let mut state = self.state.lock().unwrap();
            let before = state.users.len();
            state.users.retain(|u| u.id != id);
            if state.users.len() == before {
                return Err(DomainError::NotFound {
                    entity: "User",
                    field: "id",
                    value: id.to_string(),
                });
            }
            Ok(())
        }
    }

    fn test_user(id: i32, username: &str, password: &str) -> User {
        let now = Utc::now();
        User {
            id,
            username: username.to_string(),
            mobile: None,
            email: None,
            password_hash: hash_password(password).unwrap(),
            banned: false,
            recycled: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
            roles: vec![],
            infos: vec![],
        }
    }

    fn item(id: i32, order: i32, name: &str) -> InfoItem {
        InfoItem {
            id,
            order,
            item_type: "text".to_string(),
            name: name.to_string(),
            description: String::new(),
            register_display: false,
            information_display: true,
        }
    }

    fn service(repo: Arc<MemoryUsers>) -> UserService<MemoryUsers> {
        UserService::new(repo, JwtConfig::default())
    }

    #[tokio::test]
    async fn login_returns_token_and_reconciled_projection() {
        let repo = Arc::new(MemoryUsers::with_user(test_user(1, "alice", "hunter22")));
        repo.set_catalog(1, vec![item(10, 1, "mobile"), item(11, 2, "email")]);

        let outcome = service(repo.clone())
            .login("alice", "hunter22")
            .await
            .unwrap();

        assert!(!outcome.token_info.access_token.is_empty());
        assert_eq!(outcome.user.user_id, 1);
        // One projected row per catalog item, all absent for a user with no values
        assert_eq!(outcome.user.infos.len(), 2);
        assert!(outcome.user.infos.iter().all(|i| i.value.is_none()));
        // Login is recorded
        assert!(repo.user(1).unwrap().last_login_at.is_some());
    }

    #[tokio::test]
    async fn login_rejects_unknown_user() {
        let repo = Arc::new(MemoryUsers::default());
        let err = service(repo).login("ghost", "pw").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn login_rejects_banned_and_recycled_accounts() {
        let mut banned = test_user(1, "bob", "pw123456");
        banned.banned = true;
        let repo = Arc::new(MemoryUsers::with_user(banned));
        let err = service(repo).login("bob", "pw123456").await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let repo = Arc::new(MemoryUsers::with_user(test_user(1, "alice", "hunter22")));
        let err = service(repo).login("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn login_accepts_mobile_as_identifier() {
        let mut user = test_user(1, "alice", "hunter22");
        user.mobile = Some("5551234".to_string());
        let repo = Arc::new(MemoryUsers::with_user(user));

        let outcome = service(repo).login("5551234", "hunter22").await.unwrap();
        assert_eq!(outcome.user.username, "alice");
    }

    #[tokio::test]
    async fn create_user_rejects_missing_credentials_and_duplicates() {
        let repo = Arc::new(MemoryUsers::with_user(test_user(1, "alice", "pw123456")));
        let svc = service(repo);

        let err = svc.create_user(CreateUserDto::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = svc
            .create_user(CreateUserDto {
                username: "alice".to_string(),
                password: "pw123456".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_user_attaches_roles_and_info_values() {
        let repo = Arc::new(MemoryUsers::default());
        service(repo.clone())
            .create_user(CreateUserDto {
                username: "carol".to_string(),
                password: "pw123456".to_string(),
                role_ids: vec![3],
                info_kvs: vec![InfoKvDto {
                    key: Some(10),
                    value: "a@b.com".to_string(),
                    relation_id: None,
                }],
                ..Default::default()
            })
            .await
            .unwrap();

        let user = repo.user(0).unwrap();
        assert_eq!(user.roles.len(), 1);
        assert_eq!(user.infos.len(), 1);
        assert_eq!(user.infos[0].info_item_id, 10);
    }

    #[tokio::test]
    async fn update_user_inserts_new_info_value_when_no_row_id_given() {
        let repo = Arc::new(MemoryUsers::with_user(test_user(1, "alice", "pw123456")));
        service(repo.clone())
            .update_user(
                1,
                UpdateUserDto {
                    info_kvs: vec![InfoKvDto {
                        key: None,
                        value: "555".to_string(),
                        relation_id: Some(7),
                    }],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let user = repo.user(1).unwrap();
        assert_eq!(user.infos.len(), 1);
        assert_eq!(user.infos[0].info_item_id, 7);
    }

    #[tokio::test]
    async fn update_user_applies_email() {
        let repo = Arc::new(MemoryUsers::with_user(test_user(1, "alice", "pw123456")));
        service(repo.clone())
            .update_user(
                1,
                UpdateUserDto {
                    email: Some("a@b.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(repo.user(1).unwrap().email.as_deref(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn recycle_ban_and_revert_toggle_flags() {
        let repo = Arc::new(MemoryUsers::with_user(test_user(1, "alice", "pw123456")));
        let svc = service(repo.clone());

        svc.recycle_or_ban_user(1, ModerationAction::Recycle)
            .await
            .unwrap();
        assert!(repo.user(1).unwrap().recycled);

        svc.revert_banned_or_recycled_user(1, RevertStatus::Recycled)
            .await
            .unwrap();
        assert!(!repo.user(1).unwrap().recycled);

        svc.recycle_or_ban_user(1, ModerationAction::Ban)
            .await
            .unwrap();
        assert!(repo.user(1).unwrap().banned);
    }

    #[tokio::test]
    async fn find_all_users_reports_empty_page_as_not_found() {
        let repo = Arc::new(MemoryUsers::default());
        let err = service(repo)
            .find_all_users(FindUsersDto {
                page_size: 10,
                page_number: 1,
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn find_all_users_excludes_recycled_and_paginates() {
        let repo = Arc::new(MemoryUsers::with_user(test_user(1, "alice", "pw123456")));
        {
            let mut state = repo.state.lock().unwrap();
            let mut recycled = test_user(2, "bob", "pw123456");
            recycled.recycled = true;
            state.users.push(recycled);
            state.users.push(test_user(3, "carol", "pw123456"));
        }

        let page = service(repo)
            .find_all_users(FindUsersDto {
                page_size: 10,
                page_number: 1,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total_items, 2);
        assert!(page.users.iter().all(|u| !u.recycled));
        assert_eq!(page.pager.total_pages, 1);
    }

    #[tokio::test]
    async fn oversized_page_size_is_clamped_before_paging() {
        let repo = Arc::new(MemoryUsers::with_user(test_user(1, "alice", "pw123456")));
        let page = service(repo)
            .find_all_users(FindUsersDto {
                page_size: 500,
                page_number: 0,
                ..Default::default()
            })
            .await
            .unwrap();

        // The pager reflects the page actually fetched.
        assert_eq!(page.pager.page_size, 100);
        assert_eq!(page.pager.current_page, 1);
        assert_eq!(page.users.len(), 1);
    }

    #[tokio::test]
    async fn find_user_info_by_id_projects_against_catalog() {
        let mut user = test_user(1, "alice", "pw123456");
        user.infos.push(UserInfoValue {
            id: 99,
            info_item_id: 11,
            value: "a@b.com".to_string(),
        });
        let repo = Arc::new(MemoryUsers::with_user(user));
        repo.set_catalog(1, vec![item(10, 1, "mobile"), item(11, 2, "email")]);

        let projection = service(repo).find_user_info_by_id(1).await.unwrap();

        assert_eq!(projection.infos.len(), 2);
        assert_eq!(projection.infos[0].relation_id, 10);
        assert_eq!(projection.infos[0].value, None);
        assert_eq!(projection.infos[1].id, Some(99));
        assert_eq!(projection.infos[1].value.as_deref(), Some("a@b.com"));
    }
}
