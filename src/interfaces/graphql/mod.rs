pub mod auth;
pub mod schema;
pub mod shipping;
pub mod types;
pub mod user;

pub use schema::{build_schema, AppSchema};
