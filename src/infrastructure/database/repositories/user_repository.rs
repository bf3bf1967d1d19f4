use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::domain::{
    DomainError, DomainResult, FindUsersDto, InfoItem, Role, User, UserInfoValue,
    UserRepositoryInterface,
};
use crate::infrastructure::database::entities::{
    info_group, info_item, info_item_group, role, user, user_info, user_role,
};

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load roles and info values for a user model and assemble the aggregate.
    async fn load_aggregate(&self, model: user::Model) -> DomainResult<User> {
        let roles = model
            .find_related(role::Entity)
            .all(&self.db)
            .await?
            .into_iter()
            .map(role_model_to_domain)
            .collect();

        let infos = model
            .find_related(user_info::Entity)
            .all(&self.db)
            .await?
            .into_iter()
            .map(info_model_to_domain)
            .collect();

        Ok(user_model_to_domain(model, roles, infos))
    }

    async fn require_model(&self, id: i32) -> DomainResult<user::Model> {
        user::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn role_model_to_domain(model: role::Model) -> Role {
    Role {
        id: model.id,
        name: model.name,
    }
}

fn info_model_to_domain(model: user_info::Model) -> UserInfoValue {
    UserInfoValue {
        id: model.id,
        info_item_id: model.info_item_id,
        value: model.value,
    }
}

fn item_model_to_domain(model: info_item::Model) -> InfoItem {
    InfoItem {
        id: model.id,
        order: model.order,
        item_type: model.item_type,
        name: model.name,
        description: model.description,
        register_display: model.register_display,
        information_display: model.information_display,
    }
}

fn user_model_to_domain(model: user::Model, roles: Vec<Role>, infos: Vec<UserInfoValue>) -> User {
    User {
        id: model.id,
        username: model.username,
        mobile: model.mobile,
        email: model.email,
        password_hash: model.password_hash,
        banned: model.banned,
        recycled: model.recycled,
        created_at: model.created_at,
        updated_at: model.updated_at,
        last_login_at: model.last_login_at,
        roles,
        infos,
    }
}

fn map_insert_err(e: sea_orm::DbErr) -> DomainError {
    if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
        DomainError::Conflict("Username or mobile already exists".to_string())
    } else {
        DomainError::from(e)
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
        mobile: Option<&str>,
        email: Option<&str>,
    ) -> DomainResult<i32> {
        let now = Utc::now();

        let new_user = user::ActiveModel {
            username: Set(username.to_string()),
            mobile: Set(mobile.map(String::from)),
            email: Set(email.map(String::from)),
            password_hash: Set(password_hash.to_string()),
            banned: Set(false),
            recycled: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            last_login_at: Set(None),
            ..Default::default()
        };

        let inserted = new_user.insert(&self.db).await.map_err(map_insert_err)?;
        Ok(inserted.id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;

        match model {
            Some(model) => Ok(Some(self.load_aggregate(model).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_login_name(&self, login_name: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(
                user::Column::Username
                    .eq(login_name)
                    .or(user::Column::Mobile.eq(login_name)),
            )
            .one(&self.db)
            .await?;

        match model {
            Some(model) => Ok(Some(self.load_aggregate(model).await?)),
            None => Ok(None),
        }
    }

    async fn username_taken(&self, username: &str) -> DomainResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn mobile_taken(&self, mobile: &str) -> DomainResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Mobile.eq(mobile))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn find_page(&self, dto: &FindUsersDto) -> DomainResult<(Vec<User>, u64)> {
        // Paging bounds are normalized by the service before the call.
        let page_size = dto.page_size;
        let page_number = dto.page_number.max(1);

        let mut query = user::Entity::find().filter(user::Column::Recycled.eq(false));

        if let Some(ref username) = dto.username {
            if !username.is_empty() {
                query = query.filter(user::Column::Username.contains(username));
            }
        }

        if let Some(role_id) = dto.role_id {
            query = query
                .join(JoinType::InnerJoin, user::Relation::RoleLinks.def())
                .filter(user_role::Column::RoleId.eq(role_id));
        }

        let total = query.clone().count(&self.db).await?;

        let models = query
            .order_by_asc(user::Column::Id)
            .offset((page_number - 1) * page_size)
            .limit(page_size)
            .all(&self.db)
            .await?;

        let mut users = Vec::with_capacity(models.len());
        for model in models {
            users.push(self.load_aggregate(model).await?);
        }

        Ok((users, total))
    }

    async fn catalog_for_users(&self, user_ids: &[i32]) -> DomainResult<Vec<InfoItem>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let items = info_item::Entity::find()
            .join(JoinType::InnerJoin, info_item::Relation::GroupLinks.def())
            .join(JoinType::InnerJoin, info_item_group::Relation::InfoGroup.def())
            .join(JoinType::InnerJoin, info_group::Relation::Role.def())
            .join(JoinType::InnerJoin, role::Relation::UserLinks.def())
            .filter(user_role::Column::UserId.is_in(user_ids.to_vec()))
            .order_by_asc(info_item::Column::Order)
            .distinct()
            .all(&self.db)
            .await?;

        Ok(items.into_iter().map(item_model_to_domain).collect())
    }

    async fn set_banned(&self, id: i32, banned: bool) -> DomainResult<()> {
        let model = self.require_model(id).await?;
        let mut active: user::ActiveModel = model.into();
        active.banned = Set(banned);
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await?;
        Ok(())
    }

    async fn set_recycled(&self, id: i32, recycled: bool) -> DomainResult<()> {
        let model = self.require_model(id).await?;
        let mut active: user::ActiveModel = model.into();
        active.recycled = Set(recycled);
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await?;
        Ok(())
    }

    async fn update_username(&self, id: i32, username: &str) -> DomainResult<()> {
        let model = self.require_model(id).await?;
        let mut active: user::ActiveModel = model.into();
        active.username = Set(username.to_string());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(map_insert_err)?;
        Ok(())
    }

    async fn update_mobile(&self, id: i32, mobile: &str) -> DomainResult<()> {
        let model = self.require_model(id).await?;
        let mut active: user::ActiveModel = model.into();
        active.mobile = Set(Some(mobile.to_string()));
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(map_insert_err)?;
        Ok(())
    }

    async fn update_email(&self, id: i32, email: &str) -> DomainResult<()> {
        let model = self.require_model(id).await?;
        let mut active: user::ActiveModel = model.into();
        active.email = Set(Some(email.to_string()));
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await?;
        Ok(())
    }

    async fn update_password_hash(&self, id: i32, password_hash: &str) -> DomainResult<()> {
        let model = self.require_model(id).await?;
        let mut active: user::ActiveModel = model.into();
        active.password_hash = Set(password_hash.to_string());
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await?;
        Ok(())
    }

    async fn touch_last_login(&self, id: i32) -> DomainResult<()> {
        let model = self.require_model(id).await?;
        let mut active: user::ActiveModel = model.into();
        active.last_login_at = Set(Some(Utc::now()));
        active.update(&self.db).await?;
        Ok(())
    }

    async fn attach_roles(&self, user_id: i32, role_ids: &[i32]) -> DomainResult<()> {
        if role_ids.is_empty() {
            return Ok(());
        }

        let links = role_ids.iter().map(|role_id| user_role::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(*role_id),
        });

        user_role::Entity::insert_many(links).exec(&self.db).await?;
        Ok(())
    }

    async fn replace_role(&self, user_id: i32, before: i32, after: i32) -> DomainResult<()> {
        user_role::Entity::delete_many()
            .filter(user_role::Column::UserId.eq(user_id))
            .filter(user_role::Column::RoleId.eq(before))
            .exec(&self.db)
            .await?;

        user_role::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(after),
        }
        .insert(&self.db)
        .await?;

        Ok(())
    }

    async fn insert_info_value(
        &self,
        user_id: i32,
        info_item_id: i32,
        value: &str,
    ) -> DomainResult<()> {
        user_info::ActiveModel {
            user_id: Set(user_id),
            info_item_id: Set(info_item_id),
            value: Set(value.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(())
    }

    async fn update_info_value(&self, value_id: i32, value: &str) -> DomainResult<()> {
        let model = user_info::Entity::find_by_id(value_id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "UserInfoValue",
                field: "id",
                value: value_id.to_string(),
            })?;

        let mut active: user_info::ActiveModel = model.into();
        active.value = Set(value.to_string());
        active.update(&self.db).await?;
        Ok(())
    }

    async fn delete_user(&self, id: i32) -> DomainResult<()> {
        // The join and value tables carry no cascade; detach first.
        user_role::Entity::delete_many()
            .filter(user_role::Column::UserId.eq(id))
            .exec(&self.db)
            .await?;

        user_info::Entity::delete_many()
            .filter(user_info::Column::UserId.eq(id))
            .exec(&self.db)
            .await?;

        let result = user::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}
