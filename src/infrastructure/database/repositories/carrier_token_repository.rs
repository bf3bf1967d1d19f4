use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{CarrierToken, CarrierTokenRepositoryInterface, DomainResult};
use crate::infrastructure::database::entities::carrier_token;

pub struct CarrierTokenRepository {
    db: DatabaseConnection,
}

impl CarrierTokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: carrier_token::Model) -> CarrierToken {
    CarrierToken {
        id: model.id,
        token: model.token,
        refreshed_at: model.refreshed_at,
    }
}

#[async_trait]
impl CarrierTokenRepositoryInterface for CarrierTokenRepository {
    async fn current(&self) -> DomainResult<Option<CarrierToken>> {
        let model = carrier_token::Entity::find()
            .order_by_desc(carrier_token::Column::RefreshedAt)
            .one(&self.db)
            .await?;

        Ok(model.map(model_to_domain))
    }

    async fn store(&self, token: &str) -> DomainResult<CarrierToken> {
        let now = Utc::now();

        // Single logical row: overwrite the existing one when present.
        let existing = carrier_token::Entity::find().one(&self.db).await?;

        let model = match existing {
            Some(model) => {
                let mut active: carrier_token::ActiveModel = model.into();
                active.token = Set(token.to_string());
                active.refreshed_at = Set(now);
                active.update(&self.db).await?
            }
            None => {
                carrier_token::ActiveModel {
                    token: Set(token.to_string()),
                    refreshed_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?
            }
        };

        Ok(model_to_domain(model))
    }
}
