use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use snackflow_bridge::config::Config;
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};

/// Errors that can occur while loading or saving application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration directory. This usually
    /// occurs when required environment variables are missing (e.g. `$HOME`
    /// on Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing the configuration file.
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid TOML or does not match the expected structure.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the configuration to TOML (e.g. when saving a new locale).
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Location of `config.toml` in the user's configuration directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    match ProjectDirs::from("dev", "snackflow", "snackflow") {
        Some(dirs) => Ok(dirs.config_dir().join("config.toml")),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the configuration stored at `path`. When the file does not exist
/// yet, it is created with the default configuration.
pub async fn load_config(path: &Path) -> Result<Config, ConfigError> {
    log::info!("Loading configuration from {path:?}");
    if path.exists() {
        let contents = read_to_string(path).await?;
        return Ok(toml::from_str(&contents)?);
    }

    let config = Config::default();
    if let Some(parent) = path.parent() {
        create_dir_all(parent).await?;
    }

    let contents = toml::to_string_pretty(&config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;

    Ok(config)
}

/// Serializes `config` to pretty-printed TOML and writes it to `path`,
/// overwriting any existing file.
pub async fn save_config(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).await?;
    }

    let contents = toml::to_string_pretty(config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use snackflow_bridge::LifecycleState;

    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("snackflow-{name}-{}", std::process::id()))
            .join("config.toml")
    }

    #[tokio::test]
    async fn missing_file_is_created_with_defaults() {
        let path = scratch_path("defaults");
        let _ = std::fs::remove_file(&path);

        let config = load_config(&path).await.unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = load_config(&path).await.unwrap();
        assert_eq!(reloaded, config);
    }

    #[tokio::test]
    async fn saved_config_is_loaded_back() {
        let path = scratch_path("saved");
        let mut config = Config::default();
        config.locale = "my".to_string();
        config.snackbar.min_active_state = LifecycleState::Resumed;

        save_config(&path, &config).await.unwrap();
        assert_eq!(load_config(&path).await.unwrap(), config);
    }

    #[tokio::test]
    async fn partial_file_falls_back_to_defaults() {
        let path = scratch_path("partial");
        create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "[snackbar]\nshort_duration_ms = 1500\n")
            .await
            .unwrap();

        let config = load_config(&path).await.unwrap();
        assert_eq!(config.locale, "en");
        assert_eq!(config.snackbar.short_duration_ms, 1500);
        assert_eq!(config.snackbar.long_duration_ms, 10_000);
    }

    #[tokio::test]
    async fn malformed_file_is_reported() {
        let path = scratch_path("malformed");
        create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "locale = [").await.unwrap();

        let err = load_config(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::DeserializeError(_)));
    }
}
