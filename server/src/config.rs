//! Server configuration from environment variables

use std::path::PathBuf;

/// Runtime configuration, all overridable from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port (`PORT`, default 5000).
    pub port: u16,
    /// Directory holding the JSON dataset files (`NASMA_DATA_DIR`).
    pub data_dir: PathBuf,
    /// Directory holding the hand-edited state files (`NASMA_STATE_DIR`).
    pub state_dir: PathBuf,
    /// User names excluded from every people-derived metric
    /// (`NASMA_EXCLUDED_USERS`, comma-separated, default empty). Used to
    /// keep test and admin accounts out of the numbers.
    pub excluded_users: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .unwrap_or(5000);
        let data_dir = std::env::var("NASMA_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let state_dir = std::env::var("NASMA_STATE_DIR").unwrap_or_else(|_| "state".to_string());
        let excluded_users = std::env::var("NASMA_EXCLUDED_USERS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            port,
            data_dir: PathBuf::from(data_dir),
            state_dir: PathBuf::from(state_dir),
            excluded_users,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            data_dir: PathBuf::from("data"),
            state_dir: PathBuf::from("state"),
            excluded_users: Vec::new(),
        }
    }
}
