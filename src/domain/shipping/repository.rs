//! Carrier token repository interface

use async_trait::async_trait;

use super::model::CarrierToken;
use crate::domain::error::DomainResult;

#[async_trait]
pub trait CarrierTokenRepositoryInterface: Send + Sync {
    /// The currently persisted token, if any.
    async fn current(&self) -> DomainResult<Option<CarrierToken>>;

    /// Insert or overwrite the persisted token.
    async fn store(&self, token: &str) -> DomainResult<CarrierToken>;
}
