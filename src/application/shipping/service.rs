//! Shipping service — carrier API orchestration
//!
//! Wraps the carrier HTTP client: refreshes and persists the shared access
//! token, assembles label request envelopes from configured accounts, and
//! forwards tracking queries.

use std::sync::Arc;

use tracing::info;

use crate::domain::{CarrierToken, CarrierTokenRepositoryInterface, DomainError, DomainResult};
use crate::infrastructure::carrier::types::{
    Address, Envelope, LabelRequest, LabelRequestBody, LabelResponseData, LabelSpec,
    RequestHeader, ShipmentItem, TrackingRequest, TrackingRequestBody, TrackingResponseData,
};
use crate::infrastructure::carrier::{carrier_timestamp, CarrierClient, CarrierClientError};

const MESSAGE_VERSION: &str = "1.4";
const MESSAGE_LANGUAGE: &str = "en";

/// Account identifiers and credentials the service injects into every
/// carrier request.
#[derive(Debug, Clone, Default)]
pub struct CarrierSettings {
    pub client_id: String,
    pub password: String,
    pub pickup_account_id: String,
    pub sold_to_account_id: String,
}

/// Caller-supplied portion of a label request. Accounts, pickup time and
/// the inline-label flag are filled in by the service.
#[derive(Debug, Clone)]
pub struct LabelOrder {
    pub pickup_address: Option<Address>,
    pub shipper_address: Option<Address>,
    pub shipment_items: Vec<ShipmentItem>,
    pub label: Option<LabelSpec>,
}

/// Shipping service — generic over the token store so tests can swap in
/// an in-memory implementation.
pub struct ShippingService<T: CarrierTokenRepositoryInterface> {
    tokens: Arc<T>,
    client: CarrierClient,
    settings: CarrierSettings,
}

impl<T: CarrierTokenRepositoryInterface> ShippingService<T> {
    pub fn new(tokens: Arc<T>, client: CarrierClient, settings: CarrierSettings) -> Self {
        Self {
            tokens,
            client,
            settings,
        }
    }

    /// Fetch a fresh access token from the carrier and persist it.
    pub async fn refresh_token(&self) -> DomainResult<CarrierToken> {
        let token = self
            .client
            .request_access_token(&self.settings.client_id, &self.settings.password)
            .await
            .map_err(to_domain)?;

        let stored = self.tokens.store(&token).await?;
        info!(token_id = stored.id, "Carrier token refreshed");
        Ok(stored)
    }

    /// Create shipping labels for the given order using the persisted token.
    pub async fn create_label(&self, order: LabelOrder) -> DomainResult<LabelResponseData> {
        let token = self.require_token().await?;
        let request = build_label_request(&token.token, &self.settings, order, carrier_timestamp());

        let response = self.client.create_label(&request).await.map_err(to_domain)?;
        let data = response.label_response.bd;

        info!(labels = data.labels.len(), "Carrier label request completed");
        Ok(data)
    }

    /// Query tracking events for a set of reference numbers.
    pub async fn track_items(&self, references: Vec<String>) -> DomainResult<TrackingResponseData> {
        let token = self.require_token().await?;
        let request = TrackingRequest {
            track_item_request: Envelope {
                hdr: header("TRACKITEM", &token.token, carrier_timestamp()),
                bd: TrackingRequestBody {
                    tracking_reference_number: references,
                },
            },
        };

        let response = self.client.track_items(&request).await.map_err(to_domain)?;
        Ok(response.track_item_response.bd)
    }

    async fn require_token(&self) -> DomainResult<CarrierToken> {
        self.tokens
            .current()
            .await?
            .ok_or(DomainError::NotFound {
                entity: "CarrierToken",
                field: "id",
                value: "current".to_string(),
            })
    }
}

fn to_domain(err: CarrierClientError) -> DomainError {
    DomainError::Carrier(err.to_string())
}

fn header(message_type: &str, access_token: &str, timestamp: String) -> RequestHeader {
    RequestHeader {
        message_type: message_type.to_string(),
        message_date_time: timestamp,
        access_token: access_token.to_string(),
        message_language: MESSAGE_LANGUAGE.to_string(),
        message_version: MESSAGE_VERSION.to_string(),
    }
}

fn build_label_request(
    access_token: &str,
    settings: &CarrierSettings,
    order: LabelOrder,
    timestamp: String,
) -> LabelRequest {
    LabelRequest {
        label_request: Envelope {
            hdr: header("LABEL", access_token, timestamp.clone()),
            bd: LabelRequestBody {
                customer_account_id: None,
                pickup_account_id: Some(settings.pickup_account_id.clone()),
                sold_to_account_id: Some(settings.sold_to_account_id.clone()),
                pickup_date_time: Some(timestamp),
                inline_label_return: Some("Y".to_string()),
                handover_method: None,
                pickup_address: order.pickup_address,
                shipper_address: order.shipper_address,
                shipment_items: Some(order.shipment_items),
                label: order.label,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    struct MemoryTokens {
        token: Mutex<Option<CarrierToken>>,
    }

    #[async_trait]
    impl CarrierTokenRepositoryInterface for MemoryTokens {
        async fn current(&self) -> DomainResult<Option<CarrierToken>> {
            Ok(self.token.lock().unwrap().clone())
        }

        async fn store(&self, token: &str) -> DomainResult<CarrierToken> {
            let stored = CarrierToken {
                id: 1,
                token: token.to_string(),
                refreshed_at: Utc::now(),
            };
            *self.token.lock().unwrap() = Some(stored.clone());
            Ok(stored)
        }
    }

    fn settings() -> CarrierSettings {
        CarrierSettings {
            client_id: "client".to_string(),
            password: "secret".to_string(),
            pickup_account_id: "PICKUP1".to_string(),
            sold_to_account_id: "SOLD1".to_string(),
        }
    }

    fn empty_order() -> LabelOrder {
        LabelOrder {
            pickup_address: None,
            shipper_address: None,
            shipment_items: vec![],
            label: None,
        }
    }

    #[tokio::test]
    async fn create_label_requires_a_persisted_token() {
        let service = ShippingService::new(
            Arc::new(MemoryTokens::default()),
            CarrierClient::new("http://127.0.0.1:0".to_string()),
            settings(),
        );

        let err = service.create_label(empty_order()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn track_items_requires_a_persisted_token() {
        let service = ShippingService::new(
            Arc::new(MemoryTokens::default()),
            CarrierClient::new("http://127.0.0.1:0".to_string()),
            settings(),
        );

        let err = service.track_items(vec!["REF1".to_string()]).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn label_request_is_filled_from_settings() {
        let request = build_label_request(
            "tok",
            &settings(),
            empty_order(),
            "2024-06-01T12:00:00+08:00".to_string(),
        );

        let bd = &request.label_request.bd;
        assert_eq!(bd.pickup_account_id.as_deref(), Some("PICKUP1"));
        assert_eq!(bd.sold_to_account_id.as_deref(), Some("SOLD1"));
        assert_eq!(bd.inline_label_return.as_deref(), Some("Y"));
        assert_eq!(
            bd.pickup_date_time.as_deref(),
            Some("2024-06-01T12:00:00+08:00")
        );
        assert_eq!(request.label_request.hdr.message_type, "LABEL");
        assert_eq!(request.label_request.hdr.message_version, "1.4");
    }
}
