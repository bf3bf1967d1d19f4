pub mod client;
pub mod types;

pub use client::{carrier_timestamp, CarrierClient, CarrierClientError};
