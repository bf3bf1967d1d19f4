//! GraphQL object and input types
//!
//! Every operation resolves to a payload carrying `{code, message}` plus
//! optional data, so clients branch on the payload code rather than on
//! GraphQL-level errors. Domain failures never surface as resolver errors.

use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::{DateTime, Utc};

use crate::application::identity::{
    LoginOutcome, ModerationAction, RevertStatus, UserListPage,
};
use crate::application::shipping::LabelOrder;
use crate::domain::{
    CreateUserDto, DomainError, InfoKvDto, ProjectedUserInfo, Role, RoleSwapDto, UpdateUserDto,
    UserProjection,
};
use crate::infrastructure::carrier::types::{
    Address, LabelDetail, LabelResponseData, LabelSpec, ShipmentItem, TrackedShipment,
    TrackingEvent, TrackingResponseData,
};
use crate::shared::Pager;

pub const OK_CODE: i32 = 200;
pub const OK_MESSAGE: &str = "success";

/// Payload `{code, message}` for a domain failure.
pub fn error_payload(err: &DomainError) -> (i32, String) {
    let code = match err {
        DomainError::NotFound { .. }
        | DomainError::Validation(_)
        | DomainError::Conflict(_)
        | DomainError::Unauthorized(_) => 404,
        DomainError::Forbidden(_) => 400,
        DomainError::Carrier(_) => 502,
        DomainError::Database(_) => 500,
    };
    (code, err.to_string())
}

// ── Enums ───────────────────────────────────────────────────────

/// Soft-removal switch: recycle bin or ban.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSwitch {
    Recycle,
    Ban,
}

impl From<UserSwitch> for ModerationAction {
    fn from(switch: UserSwitch) -> Self {
        match switch {
            UserSwitch::Recycle => ModerationAction::Recycle,
            UserSwitch::Ban => ModerationAction::Ban,
        }
    }
}

/// Which status flag a revert clears.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertTarget {
    Recycled,
    Banned,
}

impl From<RevertTarget> for RevertStatus {
    fn from(target: RevertTarget) -> Self {
        match target {
            RevertTarget::Recycled => RevertStatus::Recycled,
            RevertTarget::Banned => RevertStatus::Banned,
        }
    }
}

// ── Object types ────────────────────────────────────────────────

/// Generic result for mutations with no data to return.
#[derive(SimpleObject, Debug)]
pub struct MutationPayload {
    pub code: i32,
    pub message: String,
}

impl MutationPayload {
    pub fn ok() -> Self {
        Self {
            code: OK_CODE,
            message: OK_MESSAGE.to_string(),
        }
    }
}

impl From<&DomainError> for MutationPayload {
    fn from(err: &DomainError) -> Self {
        let (code, message) = error_payload(err);
        Self { code, message }
    }
}

#[derive(SimpleObject, Debug)]
pub struct TokenInfoData {
    pub access_token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

#[derive(SimpleObject, Debug)]
pub struct RoleData {
    pub id: i32,
    pub name: String,
}

impl From<&Role> for RoleData {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
        }
    }
}

/// One row of the user's reconciled info projection. `id` and `value` are
/// null when the user holds no value for the catalog item.
#[derive(SimpleObject, Debug)]
pub struct UserInfoRow {
    pub id: Option<i32>,
    pub order: i32,
    pub relation_id: i32,
    pub item_type: String,
    pub name: String,
    pub value: Option<String>,
    pub description: String,
    pub register_display: bool,
    pub information_display: bool,
}

impl From<&ProjectedUserInfo> for UserInfoRow {
    fn from(info: &ProjectedUserInfo) -> Self {
        Self {
            id: info.id,
            order: info.order,
            relation_id: info.relation_id,
            item_type: info.item_type.clone(),
            name: info.name.clone(),
            value: info.value.clone(),
            description: info.description.clone(),
            register_display: info.register_display,
            information_display: info.information_display,
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct UserData {
    pub user_id: i32,
    pub username: String,
    pub mobile: Option<String>,
    pub banned: bool,
    pub recycled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub roles: Vec<RoleData>,
    pub infos: Vec<UserInfoRow>,
}

impl From<&UserProjection> for UserData {
    fn from(projection: &UserProjection) -> Self {
        Self {
            user_id: projection.user_id,
            username: projection.username.clone(),
            mobile: projection.mobile.clone(),
            banned: projection.banned,
            recycled: projection.recycled,
            created_at: projection.created_at,
            updated_at: projection.updated_at,
            roles: projection.roles.iter().map(RoleData::from).collect(),
            infos: projection.infos.iter().map(UserInfoRow::from).collect(),
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct LoginPayload {
    pub code: i32,
    pub message: String,
    pub token_info: Option<TokenInfoData>,
    pub user: Option<UserData>,
}

impl LoginPayload {
    pub fn ok(outcome: LoginOutcome) -> Self {
        Self {
            code: OK_CODE,
            message: OK_MESSAGE.to_string(),
            token_info: Some(TokenInfoData {
                access_token: outcome.token_info.access_token,
                expires_in: outcome.token_info.expires_in,
            }),
            user: Some(UserData::from(&outcome.user)),
        }
    }

    pub fn err(err: &DomainError) -> Self {
        let (code, message) = error_payload(err);
        Self {
            code,
            message,
            token_info: None,
            user: None,
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct Pagination {
    pub current_page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl From<Pager> for Pagination {
    fn from(pager: Pager) -> Self {
        Self {
            current_page: pager.current_page,
            page_size: pager.page_size,
            total_items: pager.total_items,
            total_pages: pager.total_pages,
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct UserListPayload {
    pub code: i32,
    pub message: String,
    pub total: Option<u64>,
    pub pagination: Option<Pagination>,
    pub users: Option<Vec<UserData>>,
}

impl UserListPayload {
    pub fn ok(page: UserListPage) -> Self {
        Self {
            code: OK_CODE,
            message: OK_MESSAGE.to_string(),
            total: Some(page.total_items),
            pagination: Some(Pagination::from(page.pager)),
            users: Some(page.users.iter().map(UserData::from).collect()),
        }
    }

    pub fn err(err: &DomainError) -> Self {
        let (code, message) = error_payload(err);
        Self {
            code,
            message,
            total: None,
            pagination: None,
            users: None,
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct UserPayload {
    pub code: i32,
    pub message: String,
    pub user: Option<UserData>,
}

impl UserPayload {
    pub fn ok(projection: &UserProjection) -> Self {
        Self {
            code: OK_CODE,
            message: OK_MESSAGE.to_string(),
            user: Some(UserData::from(projection)),
        }
    }

    pub fn err(err: &DomainError) -> Self {
        let (code, message) = error_payload(err);
        Self {
            code,
            message,
            user: None,
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct LabelData {
    pub shipment_id: Option<String>,
    pub delivery_confirmation_no: Option<String>,
    /// Inline label payload, base64 when requested
    pub content: Option<String>,
    pub format: Option<String>,
}

impl From<&LabelDetail> for LabelData {
    fn from(detail: &LabelDetail) -> Self {
        Self {
            shipment_id: detail.shipment_id.clone(),
            delivery_confirmation_no: detail.delivery_confirmation_no.clone(),
            content: detail.content.clone(),
            format: detail.format.clone(),
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct LabelPayload {
    pub code: i32,
    pub message: String,
    pub labels: Option<Vec<LabelData>>,
}

impl LabelPayload {
    pub fn ok(data: &LabelResponseData) -> Self {
        Self {
            code: OK_CODE,
            message: OK_MESSAGE.to_string(),
            labels: Some(data.labels.iter().map(LabelData::from).collect()),
        }
    }

    pub fn err(err: &DomainError) -> Self {
        let (code, message) = error_payload(err);
        Self {
            code,
            message,
            labels: None,
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct TrackingEventData {
    pub status: Option<String>,
    pub date_time: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl From<&TrackingEvent> for TrackingEventData {
    fn from(event: &TrackingEvent) -> Self {
        Self {
            status: event.status.clone(),
            date_time: event.date_time.clone(),
            address: event.address.clone(),
            description: event.description.clone(),
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct TrackedShipmentData {
    pub shipment_id: Option<String>,
    pub tracking_number: Option<String>,
    pub events: Vec<TrackingEventData>,
}

impl From<&TrackedShipment> for TrackedShipmentData {
    fn from(shipment: &TrackedShipment) -> Self {
        Self {
            shipment_id: shipment.shipment_id.clone(),
            tracking_number: shipment.tracking_number.clone(),
            events: shipment.events.iter().map(TrackingEventData::from).collect(),
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct TrackingPayload {
    pub code: i32,
    pub message: String,
    pub shipments: Option<Vec<TrackedShipmentData>>,
}

impl TrackingPayload {
    pub fn ok(data: &TrackingResponseData) -> Self {
        Self {
            code: OK_CODE,
            message: OK_MESSAGE.to_string(),
            shipments: Some(
                data.shipment_items
                    .iter()
                    .map(TrackedShipmentData::from)
                    .collect(),
            ),
        }
    }

    pub fn err(err: &DomainError) -> Self {
        let (code, message) = error_payload(err);
        Self {
            code,
            message,
            shipments: None,
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct TokenRefreshPayload {
    pub code: i32,
    pub message: String,
    pub refreshed_at: Option<DateTime<Utc>>,
}

// ── Input types ─────────────────────────────────────────────────

/// An info key/value pair. On create, `key` is the info-item id. On update,
/// `key` addresses an existing value row; when null, a new row is inserted
/// for the item in `relation_id`.
#[derive(InputObject, Debug)]
pub struct InfoKvInput {
    pub key: Option<i32>,
    pub value: String,
    pub relation_id: Option<i32>,
}

impl From<InfoKvInput> for InfoKvDto {
    fn from(input: InfoKvInput) -> Self {
        Self {
            key: input.key,
            value: input.value,
            relation_id: input.relation_id,
        }
    }
}

#[derive(InputObject, Debug)]
pub struct CreateUserInput {
    pub username: String,
    pub password: String,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub role_ids: Option<Vec<i32>>,
    pub info_kvs: Option<Vec<InfoKvInput>>,
}

impl From<CreateUserInput> for CreateUserDto {
    fn from(input: CreateUserInput) -> Self {
        Self {
            username: input.username,
            password: input.password,
            mobile: input.mobile,
            email: input.email,
            role_ids: input.role_ids.unwrap_or_default(),
            info_kvs: input
                .info_kvs
                .unwrap_or_default()
                .into_iter()
                .map(InfoKvDto::from)
                .collect(),
        }
    }
}

/// Swap one role assignment for another.
#[derive(InputObject, Debug)]
pub struct RoleSwapInput {
    pub before: i32,
    pub after: i32,
}

#[derive(InputObject, Debug)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_ids: Option<Vec<RoleSwapInput>>,
    pub info_kvs: Option<Vec<InfoKvInput>>,
}

impl From<UpdateUserInput> for UpdateUserDto {
    fn from(input: UpdateUserInput) -> Self {
        Self {
            username: input.username,
            mobile: input.mobile,
            email: input.email,
            password: input.password,
            role_ids: input
                .role_ids
                .unwrap_or_default()
                .into_iter()
                .map(|swap| RoleSwapDto {
                    before: swap.before,
                    after: swap.after,
                })
                .collect(),
            info_kvs: input
                .info_kvs
                .unwrap_or_default()
                .into_iter()
                .map(InfoKvDto::from)
                .collect(),
        }
    }
}

#[derive(InputObject, Debug)]
pub struct AddressInput {
    pub company_name: Option<String>,
    pub name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: String,
    pub state: String,
    pub district: Option<String>,
    pub country: String,
    pub post_code: String,
    pub phone: String,
    pub email: Option<String>,
}

impl From<AddressInput> for Address {
    fn from(input: AddressInput) -> Self {
        Self {
            company_name: input.company_name,
            name: input.name,
            address1: input.address1,
            address2: input.address2,
            address3: input.address3,
            city: input.city,
            state: input.state,
            district: input.district,
            country: input.country,
            post_code: input.post_code,
            phone: input.phone,
            email: input.email,
        }
    }
}

#[derive(InputObject, Debug)]
pub struct ShipmentItemInput {
    pub shipment_id: String,
    pub shipment_no: String,
    pub consignee_address: Option<AddressInput>,
    pub return_address: Option<AddressInput>,
    pub package_desc: String,
    pub total_weight: f64,
    pub total_weight_uom: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub product_code: String,
    pub incoterm: Option<String>,
    pub cod_value: String,
    pub insurance_value: Option<f64>,
    pub total_value: f64,
    pub currency: String,
    pub remarks: Option<String>,
    pub customer_reference1: Option<String>,
    pub invoice_number: Option<String>,
}

impl From<ShipmentItemInput> for ShipmentItem {
    fn from(input: ShipmentItemInput) -> Self {
        Self {
            shipment_id: input.shipment_id,
            shipment_no: input.shipment_no,
            consignee_address: input.consignee_address.map(Address::from),
            return_address: input.return_address.map(Address::from),
            package_desc: input.package_desc,
            total_weight: input.total_weight,
            total_weight_uom: input.total_weight_uom,
            weight: input.weight,
            height: input.height,
            length: input.length,
            width: input.width,
            product_code: input.product_code,
            incoterm: input.incoterm,
            cod_value: input.cod_value,
            insurance_value: input.insurance_value,
            total_value: input.total_value,
            currency: input.currency,
            remarks: input.remarks,
            customer_reference1: input.customer_reference1,
            invoice_number: input.invoice_number,
        }
    }
}

#[derive(InputObject, Debug)]
pub struct LabelSpecInput {
    pub page_size: String,
    pub format: String,
    pub layout: String,
}

impl From<LabelSpecInput> for LabelSpec {
    fn from(input: LabelSpecInput) -> Self {
        Self {
            page_size: input.page_size,
            format: input.format,
            layout: input.layout,
        }
    }
}

#[derive(InputObject, Debug)]
pub struct CreateLabelInput {
    pub pickup_address: Option<AddressInput>,
    pub shipper_address: Option<AddressInput>,
    pub shipment_items: Vec<ShipmentItemInput>,
    pub label: Option<LabelSpecInput>,
}

impl From<CreateLabelInput> for LabelOrder {
    fn from(input: CreateLabelInput) -> Self {
        Self {
            pickup_address: input.pickup_address.map(Address::from),
            shipper_address: input.shipper_address.map(Address::from),
            shipment_items: input
                .shipment_items
                .into_iter()
                .map(ShipmentItem::from)
                .collect(),
            label: input.label.map(LabelSpec::from),
        }
    }
}
