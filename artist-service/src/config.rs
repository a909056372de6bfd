use std::{env, net::SocketAddr, path::PathBuf, sync::OnceLock};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
///
/// Contains all configuration settings for the artist service,
/// including server, storage, notification and tracing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Distribution metadata configuration
    pub distribution: DistributionConfig,
    /// Server configuration settings
    pub server: ServerConfig,
    /// Artist store configuration
    pub database: DatabaseConfig,
    /// Event notifier configuration
    pub notifier: NotifierConfig,
    /// List pagination limits
    pub pagination: PaginationConfig,
    /// Tracing configuration
    pub tracing: TracingConfig,
}

/// Server configuration settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// gRPC server bind address
    pub grpc_address: SocketAddr,
}

/// Database configuration.
///
/// Supports either in-memory storage or an embedded sled database.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum DatabaseConfig {
    /// In-memory database storage
    Memory,
    /// Embedded sled key-value store
    Sled(SledConfig),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SledConfig {
    /// Directory of the sled database
    pub path: PathBuf,
}

/// Notifier configuration.
///
/// The recording memory notifier is a test double and cannot be selected here.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum NotifierConfig {
    /// In-process broadcast channel
    Broadcast(BroadcastConfig),
}

#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastConfig {
    /// Number of events buffered for slow subscribers
    pub capacity: usize,
}

/// Pagination limits applied by the artist stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when a request asks for zero or fewer items
    pub default_page_size: usize,
    /// Upper bound of a single page
    pub max_page_size: usize,
}

/// Tracing configuration.
///
/// Controls how tracing data is output from the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum TracingConfig {
    /// In-memory tracing (no output)
    Memory,
    /// Standard output tracing
    Stdout,
}

/// Distribution metadata configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributionConfig {
    /// Distribution name
    pub name: String,
    /// Distribution version
    pub version: Option<String>,
}

const CONFIG_PATH_ENV: &str = "ARTIST_CONFIG_PATH";
const CONFIG_DIR_ENV: &str = "ARTIST_CONFIG_DIR";
const ENV_PREFIX: &str = "ARTIST";
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DISTRIBUTION_VERSION_KEY: &str = "distribution.version";

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl PaginationConfig {
    /// Resolves a requested page size against the configured limits.
    pub fn page_size(&self, limit: i32) -> usize {
        let max_page_size = self.max_page_size.max(1);
        match usize::try_from(limit) {
            Ok(limit) if limit > 0 => limit.min(max_page_size),
            _ => self.default_page_size.clamp(1, max_page_size),
        }
    }
}

impl AppConfig {
    /// Gets the global application configuration instance.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be loaded.
    pub fn get() -> &'static Self {
        static INSTANCE: OnceLock<AppConfig> = OnceLock::new();
        INSTANCE.get_or_init(|| match Self::load() {
            Ok(config) => config,
            Err(err) => panic!("failed to load configuration: {err}"),
        })
    }

    /// Loads configuration from files and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> AppResult<Self> {
        let config_dir =
            PathBuf::from(env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| "config".into()));
        let default_path = config_dir.join("default");
        let local_path = config_dir.join("local");

        let mut config_builder =
            Config::builder().set_default(DISTRIBUTION_VERSION_KEY, VERSION)?;

        // Initial "default" configuration file
        config_builder =
            config_builder.add_source(File::with_name(&default_path.to_string_lossy()));

        // Add in a local configuration file
        // This file shouldn't be checked in to git
        config_builder = config_builder
            .add_source(File::with_name(&local_path.to_string_lossy()).required(false));

        // Add override settings file.
        if let Ok(override_path) = env::var(CONFIG_PATH_ENV) {
            config_builder =
                config_builder.add_source(File::with_name(&override_path).required(false));
        }

        // Add in settings from the environment (with a prefix of ARTIST)
        config_builder =
            config_builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        Ok(config_builder.build()?.try_deserialize()?)
    }
}
