//! Carrier token model

use chrono::{DateTime, Utc};

/// Persisted carrier access token. The service keeps a single logical row
/// and overwrites it on refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierToken {
    pub id: i32,
    pub token: String,
    pub refreshed_at: DateTime<Utc>,
}
