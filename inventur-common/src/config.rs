//! Configuration loading and data folder resolution
//!
//! Every setting is resolved in this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::api::auth::AdminCredentials;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_DATA_DIR: &str = "INVENTUR_DATA_DIR";
pub const ENV_HOST: &str = "INVENTUR_HOST";
pub const ENV_PORT: &str = "INVENTUR_PORT";
pub const ENV_ADMIN_USER: &str = "INVENTUR_ADMIN_USER";
pub const ENV_ADMIN_PASSWORD: &str = "INVENTUR_ADMIN_PASSWORD";

/// Mounted volume used when present (container deployments)
pub const PREFERRED_DATA_DIR: &str = "/data";
pub const DATABASE_FILE_NAME: &str = "inventur.db";
pub const CONFIG_FILE_NAME: &str = "inventur.toml";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ADMIN_USER: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "geheim123";

/// Settings as they appear in `inventur.toml`; all keys optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub admin_user: Option<String>,
    pub admin_password: Option<String>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub admin_user: Option<String>,
    pub admin_password: Option<String>,
    /// Explicit config file; missing or invalid file is an error
    pub config_file: Option<PathBuf>,
}

/// Fully resolved server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub admin_user: String,
    pub admin_password: String,
    /// Config file that contributed values, if any
    pub config_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Resolve configuration from CLI overrides, environment, config file and defaults
    pub fn resolve(cli: ConfigOverrides) -> Result<Self> {
        let env_data_dir = env_value(ENV_DATA_DIR).map(PathBuf::from);

        // The implicit config file lives in the data folder, so the data folder
        // is located first from the layers above the file
        let (file, config_file) = match cli.config_file {
            Some(path) => (load_config_file(&path)?, Some(path)),
            None => {
                let dir = cli
                    .data_dir
                    .clone()
                    .or_else(|| env_data_dir.clone())
                    .unwrap_or_else(default_data_dir);
                let candidate = dir.join(CONFIG_FILE_NAME);
                if candidate.is_file() {
                    (load_config_file(&candidate)?, Some(candidate))
                } else {
                    (FileConfig::default(), None)
                }
            }
        };

        let port = match cli.port {
            Some(port) => port,
            None => match env_value(ENV_PORT) {
                Some(raw) => raw.parse::<u16>().map_err(|e| {
                    Error::Config(format!("{} must be a port number: {}", ENV_PORT, e))
                })?,
                None => file.port.unwrap_or(DEFAULT_PORT),
            },
        };

        Ok(Self {
            data_dir: cli
                .data_dir
                .or(env_data_dir)
                .or(file.data_dir)
                .unwrap_or_else(default_data_dir),
            host: cli
                .host
                .or_else(|| env_value(ENV_HOST))
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            admin_user: cli
                .admin_user
                .or_else(|| env_value(ENV_ADMIN_USER))
                .or(file.admin_user)
                .unwrap_or_else(|| DEFAULT_ADMIN_USER.to_string()),
            admin_password: cli
                .admin_password
                .or_else(|| env_value(ENV_ADMIN_PASSWORD))
                .or(file.admin_password)
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
            config_file,
        })
    }

    /// Path of the SQLite database inside the data folder
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn credentials(&self) -> AdminCredentials {
        AdminCredentials::new(self.admin_user.clone(), self.admin_password.clone())
    }

    /// True when the compiled-in admin password is in effect
    pub fn uses_default_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}

/// `/data` if that mount exists, otherwise the working directory
pub fn default_data_dir() -> PathBuf {
    let preferred = Path::new(PREFERRED_DATA_DIR);
    if preferred.is_dir() {
        preferred.to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

/// Read and parse a TOML config file
pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}

// Empty variables count as unset
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
