pub mod identity;
pub mod shipping;
