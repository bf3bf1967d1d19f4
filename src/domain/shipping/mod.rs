//! Shipping aggregate — the persisted carrier token

pub mod model;
pub mod repository;

pub use model::CarrierToken;
pub use repository::CarrierTokenRepositoryInterface;
