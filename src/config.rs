use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::service::hasher::DEFAULT_COST;

/// Runtime configuration.
///
/// Defaults reproduce the fixed deployment: SQLite file `./mydb`, port 8000, bcrypt cost 8.
/// Every field can be overridden from `passgate.toml` or `PASSGATE_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub bcrypt_cost: u32,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./mydb".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            bcrypt_cost: DEFAULT_COST,
            body_limit: 64 * 1024,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("passgate.toml"))
            .merge(Env::prefixed("PASSGATE_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
