//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors render through
//! `kernel::error::AppError` inside the feature crates.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::{AuthConfig, AuthMiddlewareState, FreshnessFactor, PgAuthRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use project::{PgProjectRepository, project_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,project=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Auth configuration
    let auth_config = load_auth_config()?;
    auth_config
        .validate()
        .context("invalid auth configuration")?;

    tracing::info!(
        token_expiry_secs = auth_config.token_expiry_secs(),
        freshness_factor = auth_config.freshness_factor.get(),
        cookie_secure = auth_config.cookie_secure,
        "Auth configured"
    );

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    tracing::info!("Migrations completed");

    let auth_repo = PgAuthRepository::new(pool.clone());
    let session = AuthMiddlewareState::new(auth_repo.clone(), &auth_config);

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(auth_repo, auth_config))
        .nest(
            "/api",
            project_router(PgProjectRepository::new(pool), session),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the auth configuration from the environment
///
/// Debug builds fall back to a random signing secret and insecure cookies;
/// release builds require `TOKEN_SIGNING_SECRET`.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        AuthConfig::default()
    };

    match env::var("TOKEN_SIGNING_SECRET") {
        Ok(secret_b64) => config.signing_secret = decode_secret(&secret_b64)?,
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("TOKEN_SIGNING_SECRET not set, using a random secret");
        }
        Err(_) => bail!("TOKEN_SIGNING_SECRET must be set in production"),
    }

    if let Ok(raw) = env::var("TOKEN_EXPIRY_SECONDS") {
        config.token_expiry = parse_expiry(&raw)?;
    }

    if let Ok(raw) = env::var("TOKEN_FRESHNESS_FACTOR") {
        config.freshness_factor = parse_freshness(&raw)?;
    }

    Ok(config)
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("TOKEN_SIGNING_SECRET must be base64")?;

    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow::anyhow!("TOKEN_SIGNING_SECRET must decode to 32 bytes (got {})", b.len()))
}

fn parse_expiry(raw: &str) -> anyhow::Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .context("TOKEN_EXPIRY_SECONDS must be a whole number of seconds")?;
    if secs == 0 {
        bail!("TOKEN_EXPIRY_SECONDS must be positive");
    }
    Ok(Duration::from_secs(secs))
}

fn parse_freshness(raw: &str) -> anyhow::Result<FreshnessFactor> {
    let value: f64 = raw
        .trim()
        .parse()
        .context("TOKEN_FRESHNESS_FACTOR must be a number")?;
    FreshnessFactor::new(value)
        .with_context(|| format!("TOKEN_FRESHNESS_FACTOR must be in (0, 1], got {value}"))
}
