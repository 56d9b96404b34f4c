use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_marketplace::{DiscordWebhookProvider, NotificationService, handlers};
use tracing::{info, warn};

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    if let Err(e) = config.webhooks.destinations() {
        warn!("Webhooks not fully configured, notify requests will fail: {}", e);
    }

    let service = NotificationService::new(config.webhooks.clone(), DiscordWebhookProvider::new());

    // POST /api/notify plus GET /health
    let router = create_router(handlers::router(service), health_router(config.app));

    info!(
        "Starting {} v{} ({:?})",
        config.app.name, config.app.version, config.environment
    );

    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Marketplace notifier shutdown complete");
    Ok(())
}
