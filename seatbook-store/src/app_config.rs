use serde::Deserialize;
use std::env;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub filter: String,
}

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 50051;
pub const DEFAULT_LOG_FILTER: &str = "seatbook_api=debug,seatbook_store=debug,tower_http=debug";

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::builder()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `SEATBOOK__SERVER__PORT=6000`
            .add_source(config::Environment::with_prefix("SEATBOOK").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only, ignoring files and the environment.
    pub fn defaults() -> Result<Self, config::ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, config::ConfigError> {
        let ip: IpAddr = self.server.host.parse().map_err(|_| {
            config::ConfigError::Message(format!("invalid server.host: {}", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
