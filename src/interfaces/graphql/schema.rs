//! Schema assembly
//!
//! Merges the user-management and shipping roots and injects the concrete
//! services into the schema context.

use async_graphql::{EmptySubscription, MergedObject, Schema};

use super::shipping::{ShippingMutation, ShippingQuery};
use super::user::{UserMutation, UserQuery};
use crate::application::identity::UserService;
use crate::application::shipping::ShippingService;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::{CarrierTokenRepository, UserRepository};

/// Services as wired in production.
pub type AppUserService = UserService<UserRepository>;
pub type AppShippingService = ShippingService<CarrierTokenRepository>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQuery, ShippingQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(UserMutation, ShippingMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(
    users: AppUserService,
    shipping: AppShippingService,
    jwt_config: JwtConfig,
) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(users)
    .data(shipping)
    .data(jwt_config)
    .finish()
}
