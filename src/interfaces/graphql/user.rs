//! User management resolvers
//!
//! Thin delegation to `UserService`; every resolver returns a payload with
//! `{code, message}` and never a GraphQL-level error. All operations except
//! `login` require a bearer token.

use async_graphql::{Context, Object, Result};

use super::auth::require_login;
use super::schema::AppUserService;
use super::types::{
    CreateUserInput, LoginPayload, MutationPayload, RevertTarget, UpdateUserInput, UserListPayload,
    UserPayload, UserSwitch,
};
use crate::domain::FindUsersDto;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Authenticate by username or mobile number.
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<LoginPayload> {
        let service = ctx.data_unchecked::<AppUserService>();
        Ok(match service.login(&username, &password).await {
            Ok(outcome) => LoginPayload::ok(outcome),
            Err(err) => LoginPayload::err(&err),
        })
    }

    /// Paginated listing of non-recycled users with optional role and
    /// fuzzy-username filters. Each user carries its reconciled info rows.
    async fn find_all_users(
        &self,
        ctx: &Context<'_>,
        page_size: u64,
        page_number: u64,
        role_id: Option<i32>,
        username: Option<String>,
    ) -> Result<UserListPayload> {
        if let Err(err) = require_login(ctx) {
            return Ok(UserListPayload::err(&err));
        }

        let service = ctx.data_unchecked::<AppUserService>();
        let dto = FindUsersDto {
            page_size,
            page_number,
            role_id,
            username,
        };
        Ok(match service.find_all_users(dto).await {
            Ok(page) => UserListPayload::ok(page),
            Err(err) => UserListPayload::err(&err),
        })
    }

    /// A single user's reconciled info projection.
    async fn find_user_info_by_id(&self, ctx: &Context<'_>, id: i32) -> Result<UserPayload> {
        if let Err(err) = require_login(ctx) {
            return Ok(UserPayload::err(&err));
        }

        let service = ctx.data_unchecked::<AppUserService>();
        Ok(match service.find_user_info_by_id(id).await {
            Ok(projection) => UserPayload::ok(&projection),
            Err(err) => UserPayload::err(&err),
        })
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        input: CreateUserInput,
    ) -> Result<MutationPayload> {
        if let Err(err) = require_login(ctx) {
            return Ok(MutationPayload::from(&err));
        }

        let service = ctx.data_unchecked::<AppUserService>();
        Ok(match service.create_user(input.into()).await {
            Ok(()) => MutationPayload::ok(),
            Err(err) => MutationPayload::from(&err),
        })
    }

    async fn update_user_info(
        &self,
        ctx: &Context<'_>,
        id: i32,
        input: UpdateUserInput,
    ) -> Result<MutationPayload> {
        if let Err(err) = require_login(ctx) {
            return Ok(MutationPayload::from(&err));
        }

        let service = ctx.data_unchecked::<AppUserService>();
        Ok(match service.update_user(id, input.into()).await {
            Ok(()) => MutationPayload::ok(),
            Err(err) => MutationPayload::from(&err),
        })
    }

    /// Soft-remove a user: move to the recycle bin or ban the account.
    async fn recycle_or_ban_user(
        &self,
        ctx: &Context<'_>,
        id: i32,
        action: UserSwitch,
    ) -> Result<MutationPayload> {
        if let Err(err) = require_login(ctx) {
            return Ok(MutationPayload::from(&err));
        }

        let service = ctx.data_unchecked::<AppUserService>();
        Ok(match service.recycle_or_ban_user(id, action.into()).await {
            Ok(()) => MutationPayload::ok(),
            Err(err) => MutationPayload::from(&err),
        })
    }

    /// Clear a ban or restore a user from the recycle bin.
    async fn revert_banned_or_recycled_user(
        &self,
        ctx: &Context<'_>,
        id: i32,
        status: RevertTarget,
    ) -> Result<MutationPayload> {
        if let Err(err) = require_login(ctx) {
            return Ok(MutationPayload::from(&err));
        }

        let service = ctx.data_unchecked::<AppUserService>();
        Ok(
            match service.revert_banned_or_recycled_user(id, status.into()).await {
                Ok(()) => MutationPayload::ok(),
                Err(err) => MutationPayload::from(&err),
            },
        )
    }

    /// Hard delete a user from the recycle bin.
    async fn delete_user(&self, ctx: &Context<'_>, id: i32) -> Result<MutationPayload> {
        if let Err(err) = require_login(ctx) {
            return Ok(MutationPayload::from(&err));
        }

        let service = ctx.data_unchecked::<AppUserService>();
        Ok(match service.delete_user(id).await {
            Ok(()) => MutationPayload::ok(),
            Err(err) => MutationPayload::from(&err),
        })
    }
}
