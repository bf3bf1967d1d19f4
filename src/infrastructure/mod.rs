pub mod carrier;
pub mod crypto;
pub mod database;

pub use database::{init_database, DatabaseConfig};
