//! Shipping resolvers — carrier label, tracking and token operations

use async_graphql::{Context, Object, Result};

use super::auth::require_login;
use super::schema::AppShippingService;
use super::types::{
    error_payload, CreateLabelInput, LabelPayload, TokenRefreshPayload, TrackingPayload, OK_CODE,
    OK_MESSAGE,
};

#[derive(Default)]
pub struct ShippingQuery;

#[Object]
impl ShippingQuery {
    /// Tracking events for a set of carrier reference numbers.
    async fn track_shipment(
        &self,
        ctx: &Context<'_>,
        reference_numbers: Vec<String>,
    ) -> Result<TrackingPayload> {
        if let Err(err) = require_login(ctx) {
            return Ok(TrackingPayload::err(&err));
        }

        let service = ctx.data_unchecked::<AppShippingService>();
        Ok(match service.track_items(reference_numbers).await {
            Ok(data) => TrackingPayload::ok(&data),
            Err(err) => TrackingPayload::err(&err),
        })
    }
}

#[derive(Default)]
pub struct ShippingMutation;

#[Object]
impl ShippingMutation {
    /// Create shipping labels for one or more shipment items.
    async fn create_label(
        &self,
        ctx: &Context<'_>,
        input: CreateLabelInput,
    ) -> Result<LabelPayload> {
        if let Err(err) = require_login(ctx) {
            return Ok(LabelPayload::err(&err));
        }

        let service = ctx.data_unchecked::<AppShippingService>();
        Ok(match service.create_label(input.into()).await {
            Ok(data) => LabelPayload::ok(&data),
            Err(err) => LabelPayload::err(&err),
        })
    }

    /// Fetch a fresh carrier access token and persist it for later requests.
    async fn refresh_carrier_token(&self, ctx: &Context<'_>) -> Result<TokenRefreshPayload> {
        if let Err(err) = require_login(ctx) {
            let (code, message) = error_payload(&err);
            return Ok(TokenRefreshPayload {
                code,
                message,
                refreshed_at: None,
            });
        }

        let service = ctx.data_unchecked::<AppShippingService>();
        Ok(match service.refresh_token().await {
            Ok(token) => TokenRefreshPayload {
                code: OK_CODE,
                message: OK_MESSAGE.to_string(),
                refreshed_at: Some(token.refreshed_at),
            },
            Err(err) => {
                let (code, message) = error_payload(&err);
                TokenRefreshPayload {
                    code,
                    message,
                    refreshed_at: None,
                }
            }
        })
    }
}
