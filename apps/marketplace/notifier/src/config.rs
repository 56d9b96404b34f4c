use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_marketplace::WebhookConfig;

pub use core_config::Environment;

/// Notifier configuration, composed from the shared config components.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub webhooks: WebhookConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 by default
        // Missing webhook URLs are tolerated here and reported per request.
        let webhooks = WebhookConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            webhooks,
        })
    }
}
