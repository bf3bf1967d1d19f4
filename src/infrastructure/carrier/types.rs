//! Carrier wire types
//!
//! Request/response shapes for the carrier's REST API. Every message is an
//! envelope of `{ <request>: { hdr, bd } }`; field names are camelCase on
//! the wire. Responses are typed only to the fields the service surfaces.

use serde::{Deserialize, Serialize};

/// Common `hdr` block carried by every carrier request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    pub message_type: String,
    pub message_date_time: String,
    pub access_token: String,
    pub message_language: String,
    pub message_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub name: String,
    pub address1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    pub country: String,
    pub post_code: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentItem {
    /// Caller-assigned shipment id; must not repeat within 90 days
    #[serde(rename = "shipmentID")]
    pub shipment_id: String,
    pub shipment_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consignee_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<Address>,
    pub package_desc: String,
    pub total_weight: f64,
    #[serde(rename = "totalWeightUOM")]
    pub total_weight_uom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    pub product_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoterm: Option<String>,
    pub cod_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_value: Option<f64>,
    pub total_value: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSpec {
    pub page_size: String,
    /// PNG, ZPL or PDF
    pub format: String,
    /// 1x1 or 4x1
    pub layout: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_to_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_label_return: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handover_method: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipper_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_items: Option<Vec<ShipmentItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelRequest {
    #[serde(rename = "labelRequest")]
    pub label_request: Envelope<LabelRequestBody>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackingRequest {
    #[serde(rename = "trackItemRequest")]
    pub track_item_request: Envelope<TrackingRequestBody>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRequestBody {
    pub tracking_reference_number: Vec<String>,
}

/// The `{ hdr, bd }` pair every request wraps.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<B> {
    pub hdr: RequestHeader,
    pub bd: B,
}

// ── Responses ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStatus {
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token_response: AccessTokenResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub token: Option<String>,
    /// The carrier returns this one field in snake_case
    #[serde(rename = "expires_in_seconds")]
    pub expires_in_seconds: Option<String>,
    pub response_status: Option<ResponseStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponse {
    pub label_response: LabelResponseBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelResponseBody {
    pub bd: LabelResponseData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponseData {
    #[serde(default)]
    pub labels: Vec<LabelDetail>,
    pub response_status: Option<ResponseStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDetail {
    #[serde(rename = "shipmentID")]
    pub shipment_id: Option<String>,
    pub delivery_confirmation_no: Option<String>,
    /// Inline label payload, base64 when requested
    pub content: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResponse {
    pub track_item_response: TrackingResponseBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackingResponseBody {
    pub bd: TrackingResponseData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResponseData {
    #[serde(default)]
    pub shipment_items: Vec<TrackedShipment>,
    pub response_status: Option<ResponseStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedShipment {
    #[serde(rename = "shipmentID")]
    pub shipment_id: Option<String>,
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub events: Vec<TrackingEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub status: Option<String>,
    pub date_time: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_request_serializes_camel_case_and_skips_absent_fields() {
        let request = LabelRequest {
            label_request: Envelope {
                hdr: RequestHeader {
                    message_type: "LABEL".to_string(),
                    message_date_time: "2024-06-01T12:00:00+08:00".to_string(),
                    access_token: "tok".to_string(),
                    message_language: "en".to_string(),
                    message_version: "1.4".to_string(),
                },
                bd: LabelRequestBody {
                    customer_account_id: None,
                    pickup_account_id: Some("PICKUP1".to_string()),
                    sold_to_account_id: Some("SOLD1".to_string()),
                    pickup_date_time: Some("2024-06-01T12:00:00+08:00".to_string()),
                    inline_label_return: Some("Y".to_string()),
                    handover_method: None,
                    pickup_address: None,
                    shipper_address: None,
                    shipment_items: Some(vec![ShipmentItem {
                        shipment_id: "S123".to_string(),
                        shipment_no: "N123".to_string(),
                        consignee_address: None,
                        return_address: None,
                        package_desc: "books".to_string(),
                        total_weight: 1.5,
                        total_weight_uom: "kg".to_string(),
                        weight: None,
                        height: None,
                        length: None,
                        width: None,
                        product_code: "PDO".to_string(),
                        incoterm: None,
                        cod_value: "0".to_string(),
                        insurance_value: None,
                        total_value: 20.0,
                        currency: "USD".to_string(),
                        remarks: None,
                        customer_reference1: None,
                        invoice_number: None,
                    }]),
                    label: Some(LabelSpec {
                        page_size: "400x600".to_string(),
                        format: "PNG".to_string(),
                        layout: "1x1".to_string(),
                    }),
                },
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        let bd = &json["labelRequest"]["bd"];

        assert_eq!(json["labelRequest"]["hdr"]["messageType"], "LABEL");
        assert_eq!(bd["pickupAccountId"], "PICKUP1");
        assert_eq!(bd["shipmentItems"][0]["shipmentID"], "S123");
        assert_eq!(bd["shipmentItems"][0]["totalWeightUOM"], "kg");
        // Absent optionals never appear on the wire
        assert!(bd.get("customerAccountId").is_none());
        assert!(bd["shipmentItems"][0].get("incoterm").is_none());
    }

    #[test]
    fn token_response_parses() {
        let body = r#"{
            "accessTokenResponse": {
                "token": "abc123",
                "expires_in_seconds": "86399",
                "responseStatus": { "code": "100", "message": "OK" }
            }
        }"#;

        let parsed: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.access_token_response.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn tracking_response_parses_with_missing_optionals() {
        let body = r#"{
            "trackItemResponse": {
                "bd": {
                    "shipmentItems": [
                        { "shipmentID": "S1", "events": [ { "status": "DELIVERED" } ] }
                    ]
                }
            }
        }"#;

        let parsed: TrackingResponse = serde_json::from_str(body).unwrap();
        let items = &parsed.track_item_response.bd.shipment_items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].events[0].status.as_deref(), Some("DELIVERED"));
        assert!(items[0].tracking_number.is_none());
    }
}
