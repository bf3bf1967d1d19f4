//!
//! GraphQL admin backend for user management plus a carrier shipping wrapper.
//! Reads configuration from TOML file (~/.config/backoffice/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use backoffice::application::identity::UserService;
use backoffice::application::shipping::{CarrierSettings, ShippingService};
use backoffice::config::AppConfig;
use backoffice::infrastructure::carrier::CarrierClient;
use backoffice::infrastructure::crypto::jwt::JwtConfig;
use backoffice::infrastructure::database::migrator::Migrator;
use backoffice::infrastructure::database::repositories::{
    CarrierTokenRepository, UserRepository,
};
use backoffice::{
    build_router, build_schema, default_config_path, init_database, DatabaseConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("BACKOFFICE_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting backoffice service...");

    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        issuer: "backoffice".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Create default admin user if not exists
    create_default_admin(&db, &app_cfg).await;

    // ── Services ───────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db.clone()));
    let user_service = UserService::new(user_repo, jwt_config.clone());

    let token_repo = Arc::new(CarrierTokenRepository::new(db.clone()));
    let carrier_client = CarrierClient::new(app_cfg.carrier.base_url.clone());
    let shipping_service = ShippingService::new(
        token_repo,
        carrier_client,
        CarrierSettings {
            client_id: app_cfg.carrier.client_id.clone(),
            password: app_cfg.carrier.password.clone(),
            pickup_account_id: app_cfg.carrier.pickup_account_id.clone(),
            sold_to_account_id: app_cfg.carrier.sold_to_account_id.clone(),
        },
    );

    let schema = build_schema(user_service, shipping_service, jwt_config);
    let router = build_router(schema);

    // ── HTTP server ────────────────────────────────────────────
    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("GraphQL server listening on http://{}/graphql", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Backoffice service shutdown complete");
    Ok(())
}

/// Create default admin role and user if no users exist
async fn create_default_admin(db: &sea_orm::DatabaseConnection, app_cfg: &AppConfig) {
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

    use backoffice::infrastructure::crypto::password::hash_password;
    use backoffice::infrastructure::database::entities::{role, user, user_role};

    let users_count = user::Entity::find().count(db).await.unwrap_or(0);
    if users_count > 0 {
        return;
    }

    info!("Creating default admin user...");

    let password_hash = match hash_password(&app_cfg.admin.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash admin password: {}", e);
            return;
        }
    };

    let now = chrono::Utc::now();
    let admin = user::ActiveModel {
        username: Set(app_cfg.admin.username.clone()),
        mobile: Set(None),
        email: Set(None),
        password_hash: Set(password_hash),
        banned: Set(false),
        recycled: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        last_login_at: Set(None),
        ..Default::default()
    };

    let admin = match admin.insert(db).await {
        Ok(model) => model,
        Err(e) => {
            error!("Failed to create admin user: {}", e);
            return;
        }
    };

    let admin_role = role::ActiveModel {
        name: Set("admin".to_string()),
        ..Default::default()
    };
    let admin_role = match admin_role.insert(db).await {
        Ok(model) => model,
        Err(e) => {
            error!("Failed to create admin role: {}", e);
            return;
        }
    };

    let link = user_role::ActiveModel {
        user_id: Set(admin.id),
        role_id: Set(admin_role.id),
    };
    if let Err(e) = link.insert(db).await {
        error!("Failed to assign admin role: {}", e);
        return;
    }

    info!("Default admin created: {}", admin.username);
    info!("Please change the admin password immediately!");
}
