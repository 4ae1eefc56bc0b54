//! Configuration for Products API

use core_config::{app_info, env_parse, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Load the demo catalog at startup (`SEED_CATALOG`)
    pub seed_catalog: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let seed_catalog = env_parse("SEED_CATALOG", false)?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_catalog,
        })
    }
}
