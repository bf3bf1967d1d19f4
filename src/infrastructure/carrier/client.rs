//! Carrier API client
//!
//! Thin reqwest wrapper over the carrier's REST API: token issuance, label
//! creation and shipment tracking. Authentication and message framing follow
//! the carrier's `{ hdr, bd }` envelope convention; business semantics live
//! in the shipping service.

use chrono::{FixedOffset, SecondsFormat, Utc};
use reqwest::Client;
use thiserror::Error;
use tracing::{error, trace};

use super::types::{
    LabelRequest, LabelResponse, TokenResponse, TrackingRequest, TrackingResponse,
};

const TOKEN_PATH: &str = "/rest/v1/OAuth/AccessToken";
const LABEL_PATH: &str = "/rest/v2/Label";
const TRACKING_PATH: &str = "/rest/v3/Tracking";

/// Carrier messages carry timestamps at UTC+8
const CARRIER_UTC_OFFSET_SECS: i32 = 8 * 3600;

#[derive(Debug, Error)]
pub enum CarrierClientError {
    #[error("carrier request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to parse carrier response: {error}; body: {body}")]
    Parse {
        body: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("carrier API error: {0}")]
    Api(String),
}

/// Current timestamp formatted the way the carrier expects.
pub fn carrier_timestamp() -> String {
    let offset = FixedOffset::east_opt(CARRIER_UTC_OFFSET_SECS).expect("offset in range");
    Utc::now()
        .with_timezone(&offset)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// HTTP client for the carrier API
pub struct CarrierClient {
    client: Client,
    base_url: String,
}

impl CarrierClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Request a fresh access token with the configured credentials.
    pub async fn request_access_token(
        &self,
        client_id: &str,
        password: &str,
    ) -> Result<String, CarrierClientError> {
        trace!("Requesting carrier access token");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, TOKEN_PATH))
            .query(&[
                ("clientId", client_id),
                ("password", password),
                ("returnFormat", "json"),
            ])
            .send()
            .await?;

        let body = response.text().await?;
        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| CarrierClientError::Parse {
                body: body.clone(),
                error: e,
            })?;

        match parsed.access_token_response.token {
            Some(token) => Ok(token),
            None => {
                let message = parsed
                    .access_token_response
                    .response_status
                    .and_then(|s| s.message)
                    .unwrap_or_else(|| "no token in response".to_string());
                error!(message = %message, "Carrier token request rejected");
                Err(CarrierClientError::Api(message))
            }
        }
    }

    /// Submit a label request and decode the carrier's response.
    pub async fn create_label(
        &self,
        request: &LabelRequest,
    ) -> Result<LabelResponse, CarrierClientError> {
        trace!("Posting label request to carrier");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, LABEL_PATH))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: LabelResponse =
            serde_json::from_str(&body).map_err(|e| CarrierClientError::Parse {
                body: body.clone(),
                error: e,
            })?;

        if !status.is_success() {
            error!(status = %status, "Carrier label request failed");
            return Err(CarrierClientError::Api(format!(
                "label request returned {}",
                status
            )));
        }

        Ok(parsed)
    }

    /// Query tracking events for a set of reference numbers.
    pub async fn track_items(
        &self,
        request: &TrackingRequest,
    ) -> Result<TrackingResponse, CarrierClientError> {
        trace!("Posting tracking request to carrier");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, TRACKING_PATH))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: TrackingResponse =
            serde_json::from_str(&body).map_err(|e| CarrierClientError::Parse {
                body: body.clone(),
                error: e,
            })?;

        if !status.is_success() {
            error!(status = %status, "Carrier tracking request failed");
            return Err(CarrierClientError::Api(format!(
                "tracking request returned {}",
                status
            )));
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_carries_the_carrier_offset() {
        let ts = carrier_timestamp();
        assert!(ts.ends_with("+08:00"), "unexpected timestamp: {}", ts);
    }
}
