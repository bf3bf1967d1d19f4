pub mod carrier_token_repository;
pub mod user_repository;

pub use carrier_token_repository::CarrierTokenRepository;
pub use user_repository::UserRepository;
