//! Configuration loading and data folder resolution

use crate::{Error, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration assembled from CLI arguments and the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener
    pub bind_addr: SocketAddr,
    /// Folder holding gigboard.db
    pub data_folder: PathBuf,
}

impl ServerConfig {
    /// Path of the SQLite database file inside the data folder
    pub fn database_path(&self) -> PathBuf {
        self.data_folder.join("gigboard.db")
    }
}

/// Data folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`data_folder` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_folder(cli_arg: Option<&str>, env_var_name: &str) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        return Ok(PathBuf::from(path));
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(folder) = config.get("data_folder").and_then(|v| v.as_str()) {
                    return Ok(PathBuf::from(folder));
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    Ok(default_data_folder())
}

/// Get the configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/gigboard/config.toml first, then /etc/gigboard/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("gigboard").join("config.toml"));
        let system_config = PathBuf::from("/etc/gigboard/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let config_path = dirs::config_dir()
        .map(|d| d.join("gigboard").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {:?}",
            config_path
        )))
    }
}

/// OS-dependent default data folder path
fn default_data_folder() -> PathBuf {
    if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("gigboard"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\gigboard"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("gigboard"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/gigboard"))
    } else {
        dirs::data_local_dir()
            .map(|d| d.join("gigboard"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/gigboard"))
    }
}

/// Create the data folder if it does not exist yet
pub fn ensure_data_folder(folder: &std::path::Path) -> Result<()> {
    if !folder.exists() {
        std::fs::create_dir_all(folder)?;
    }
    Ok(())
}
