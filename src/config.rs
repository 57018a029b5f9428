use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

/// Whether signup checks `max_participants`.
///
/// `Unenforced` is the default and lets an activity be over-subscribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    #[default]
    Unenforced,
    Enforced,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub capacity: CapacityPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            capacity: CapacityPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `STATIC_DIR` and `ENFORCE_CAPACITY`.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup("ENFORCE_CAPACITY") {
            config.capacity = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => CapacityPolicy::Enforced,
                "0" | "false" | "no" | "off" | "" => CapacityPolicy::Unenforced,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "ENFORCE_CAPACITY",
                        value: flag,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_with_port(self.port)
    }

    /// Next port up, used when the configured one is already taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_with_port(self.port.wrapping_add(1))
    }

    fn addr_with_port(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}
