use std::sync::Arc;

use auth_service::config::Config;
use auth_service::domain::auth::service::AuthService;
use auth_service::domain::identity::service::IdentityService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryIdentityRepository;
use chrono::Duration;
use credentials::PasswordHasher;
use credentials::TokenCodec;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    if config.auth.signing_key.is_empty() {
        anyhow::bail!("auth.signing_key must be set (e.g. via AUTH__SIGNING_KEY)");
    }

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.auth.token_ttl_minutes,
        hash_time_cost = config.auth.hash_time_cost,
        "Configuration loaded"
    );

    let password_hasher = Arc::new(PasswordHasher::with_time_cost(config.auth.hash_time_cost)?);
    let token_codec = Arc::new(TokenCodec::new(config.auth.signing_key.as_bytes()));
    let repository = Arc::new(InMemoryIdentityRepository::new());

    let identity_service = Arc::new(IdentityService::new(
        Arc::clone(&repository),
        Arc::clone(&password_hasher),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&repository),
        Arc::clone(&password_hasher),
        Arc::clone(&token_codec),
        Duration::minutes(config.auth.token_ttl_minutes),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(identity_service, auth_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
