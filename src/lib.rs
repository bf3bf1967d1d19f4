//! Backoffice service
//!
//! GraphQL admin backend for user and role management, backed by a
//! relational store, plus a thin wrapper over the carrier's shipping API
//! (labels, tracking, token refresh).
//!
//! Layers:
//! - `domain` — aggregates, the info-projection logic and repository traits
//! - `application` — user-management and shipping services
//! - `infrastructure` — sea-orm persistence, carrier HTTP client, crypto
//! - `interfaces` — GraphQL schema and the axum HTTP surface

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{init_database, DatabaseConfig};
pub use interfaces::graphql::{build_schema, AppSchema};
pub use interfaces::http::build_router;
