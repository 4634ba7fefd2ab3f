//! Server configuration, read from the environment (a `.env` file works).

use std::env;

pub struct Config {
    pub listen_addr: String,
    /// SQLite path of the margin replica source.
    pub replica_db_path: String,
    /// SQLite path of the prime-broker actuals source.
    pub pbactual_db_path: String,
    /// Base URL of the FX rates API.
    pub fx_api_url: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            listen_addr: env::var("MD_LISTEN_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            replica_db_path: env::var("MD_REPLICA_DB")
                .unwrap_or_else(|_| "data/margin_replica.db".to_string()),
            pbactual_db_path: env::var("MD_PBACTUAL_DB")
                .unwrap_or_else(|_| "data/pbactual.db".to_string()),
            fx_api_url: env::var("MD_FX_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:9000".to_string()),
            static_dir: env::var("MD_STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        }
    }
}
