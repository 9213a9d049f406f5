//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through
//! `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use loan::{DirectoryConfig, HttpUserDirectory, LoanConfig, PgLoanStore, loan_router};
use platform::jwt::MIN_SECRET_LEN;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_AUTH_SERVICE_URL: &str = "http://localhost:8080";
const DEFAULT_AUTH_SERVICE_TIMEOUT_MS: u64 = 5000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,loan=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Loan configuration
    let loan_config = if cfg!(debug_assertions) {
        match env::var("TOKEN_SECRET") {
            Ok(secret_b64) => LoanConfig::with_token_secret(decode_token_secret(&secret_b64)?),
            Err(_) => {
                tracing::warn!("TOKEN_SECRET not set, using a random development secret");
                LoanConfig::development()
            }
        }
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("TOKEN_SECRET").context("TOKEN_SECRET must be set in production")?;
        LoanConfig::with_token_secret(decode_token_secret(&secret_b64)?)
    };

    let directory_config = directory_config_from_env()?;
    let directory = HttpUserDirectory::new(&directory_config)?;
    let loan_store = PgLoanStore::new(pool.clone());

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
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/api/v1",
            loan_router(loan_store, directory, loan_config),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 31113));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Decode a base64 HS256 secret of at least 256 bits
fn decode_token_secret(secret_b64: &str) -> anyhow::Result<Vec<u8>> {
    let bytes = platform::crypto::from_base64(secret_b64.trim())
        .context("TOKEN_SECRET is not valid base64")?;
    anyhow::ensure!(
        bytes.len() >= MIN_SECRET_LEN,
        "TOKEN_SECRET must decode to at least {MIN_SECRET_LEN} bytes, got {}",
        bytes.len()
    );
    Ok(bytes)
}

fn directory_config_from_env() -> anyhow::Result<DirectoryConfig> {
    let timeout_ms = match env::var("AUTH_SERVICE_TIMEOUT_MS") {
        Ok(raw) => raw
            .parse::<u64>()
            .context("AUTH_SERVICE_TIMEOUT_MS must be a number of milliseconds")?,
        Err(_) => DEFAULT_AUTH_SERVICE_TIMEOUT_MS,
    };

    let api_key = env::var("AUTH_SERVICE_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("AUTH_SERVICE_API_KEY not set, user directory calls will be unauthenticated");
        String::new()
    });

    Ok(DirectoryConfig {
        base_url: env::var("AUTH_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_AUTH_SERVICE_URL.to_string()),
        api_key,
        timeout: Duration::from_millis(timeout_ms),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_token_secret() {
        let secret = [5u8; 32];
        let encoded = platform::crypto::to_base64(&secret);
        assert_eq!(decode_token_secret(&encoded).unwrap(), secret);
        assert_eq!(decode_token_secret(&format!(" {encoded}\n")).unwrap(), secret);
    }

    #[test]
    fn test_decode_token_secret_accepts_longer_secrets() {
        for len in [48, 64] {
            let secret = vec![9u8; len];
            let encoded = platform::crypto::to_base64(&secret);
            assert_eq!(decode_token_secret(&encoded).unwrap(), secret);
        }
    }

    #[test]
    fn test_decode_token_secret_rejects_short_secret() {
        let short = platform::crypto::to_base64(&[1u8; 16]);
        let err = decode_token_secret(&short).unwrap_err();
        assert!(err.to_string().contains("got 16"));

        assert!(decode_token_secret("not base64!").is_err());
    }
}
