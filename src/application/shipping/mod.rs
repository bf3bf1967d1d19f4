pub mod service;

pub use service::{CarrierSettings, LabelOrder, ShippingService};
