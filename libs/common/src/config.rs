//! Configuration for the chat backend
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables prefixed with `CHAT__` (nested keys are separated by
//! `__`, e.g. `CHAT__SERVER__PORT=8080`).

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Secret used when none is configured. Only acceptable for local development.
pub const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

/// Longest accepted token lifetime (10 years)
pub const MAX_TOKEN_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Default config file location, overridable with `CHAT_CONFIG_FILE`
const DEFAULT_CONFIG_FILE: &str = "config/chat.toml";

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub generator: GeneratorConfig,
    pub cors: CorsConfig,
    /// Register the demo account and its sample chats on startup
    pub seed_demo_data: bool,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Token signing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds (default: 7 days)
    pub token_ttl_secs: u64,
}

/// Simulated reply latency bounds
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

/// Cross-origin settings for the browser client
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load the configuration from defaults, the config file and the environment
    ///
    /// # Environment Variables
    /// - `CHAT_CONFIG_FILE`: path of the TOML file (default: `config/chat.toml`, skipped when absent)
    /// - `CHAT__SERVER__HOST`, `CHAT__SERVER__PORT`: bind address (default: `0.0.0.0:5000`)
    /// - `CHAT__AUTH__JWT_SECRET`: token signing secret
    /// - `CHAT__AUTH__TOKEN_TTL_SECS`: token lifetime (default: 604800)
    /// - `CHAT__GENERATOR__MIN_DELAY_MS`, `CHAT__GENERATOR__MAX_DELAY_MS`: reply delay (default: 1000..3000)
    /// - `CHAT__SEED_DEMO_DATA`: register the demo account (default: true)
    pub fn load() -> Result<Self> {
        let config_file = std::env::var("CHAT_CONFIG_FILE")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("auth.jwt_secret", DEFAULT_JWT_SECRET)?
            .set_default("auth.token_ttl_secs", 604_800)?
            .set_default("generator.min_delay_ms", 1000)?
            .set_default("generator.max_delay_ms", 3000)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            .set_default("seed_demo_data", true)?;

        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::from(Path::new(&config_file)));
        }

        builder = builder.add_source(
            Environment::with_prefix("CHAT")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .context("failed to build configuration")?
            .try_deserialize()
            .context("failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            bail!("auth.jwt_secret must not be empty");
        }
        if self.auth.token_ttl_secs == 0 {
            bail!("auth.token_ttl_secs must be greater than zero");
        }
        if self.auth.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            bail!(
                "auth.token_ttl_secs ({}) exceeds the maximum of {}",
                self.auth.token_ttl_secs,
                MAX_TOKEN_TTL_SECS
            );
        }
        if self.generator.max_delay_ms < self.generator.min_delay_ms {
            bail!(
                "generator.max_delay_ms ({}) is below generator.min_delay_ms ({})",
                self.generator.max_delay_ms,
                self.generator.min_delay_ms
            );
        }
        if self.auth.jwt_secret == DEFAULT_JWT_SECRET {
            warn!("Using the built-in JWT secret; set CHAT__AUTH__JWT_SECRET outside development");
        }
        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
