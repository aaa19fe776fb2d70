use std::sync::Arc;

use chirp_service::config::Config;
use chirp_service::domain::auth::service::AuthService;
use chirp_service::inbound::http::router::create_router;
use chirp_service::outbound::stores::InMemoryCredentialStore;
use chirp_service::outbound::stores::InMemorySessionStore;
use chrono::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirp_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "chirp-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_ttl_minutes = config.jwt.access_ttl_minutes,
        refresh_ttl_days = config.session.refresh_ttl_days,
        "Configuration loaded"
    );

    let credential_store = Arc::new(InMemoryCredentialStore::new());
    let session_store = Arc::new(InMemorySessionStore::new());

    let auth_service = Arc::new(AuthService::new(
        credential_store,
        session_store,
        config.jwt.secret.as_bytes(),
        Duration::minutes(config.jwt.access_ttl_minutes),
        Duration::days(config.session.refresh_ttl_days),
        config.webhook.api_key.clone(),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
