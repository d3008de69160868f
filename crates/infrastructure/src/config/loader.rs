use super::settings::{AppConfig, GeolocationMode};
use common::ConfigError;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Переменная с ключом Gemini и её устаревший вариант
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const LEGACY_API_KEY_VAR: &str = "API_KEY";

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Default,
}

pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_paths: Self::default_config_paths(),
            env_prefix: "WARDROBE_".to_string(),
        }
    }

    /// Явный путь (`--config`) проверяется первым
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.config_paths.insert(0, path);
        self
    }

    /// Только указанные пути, без стандартных
    pub fn with_paths_only(mut self, paths: Vec<PathBuf>) -> Self {
        self.config_paths = paths;
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("wardrobe.toml")];

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".config").join("wardrobe").join("config.toml"));
        }

        paths
    }

    /// Загрузить конфигурацию: первый найденный файл, затем переменные окружения.
    /// Битый файл пропускается с предупреждением.
    pub async fn load(&self) -> (AppConfig, ConfigSource) {
        dotenv::dotenv().ok();

        let (config, source) = self.load_base_config().await;
        let config = self.apply_env_overrides(config, |key| env::var(key).ok());
        (config, source)
    }

    async fn load_base_config(&self) -> (AppConfig, ConfigSource) {
        for path in &self.config_paths {
            if !path.exists() {
                continue;
            }
            match Self::load_file(path).await {
                Ok(config) => {
                    info!("Loaded configuration from: {}", path.display());
                    return (config, ConfigSource::File(path.clone()));
                }
                Err(e) => {
                    warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }
        debug!("No config file found, using defaults");
        (AppConfig::default(), ConfigSource::Default)
    }

    async fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Переопределения `WARDROBE_*`. Некорректные значения игнорируются с предупреждением.
    pub fn apply_env_overrides<F>(&self, mut config: AppConfig, lookup: F) -> AppConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", self.env_prefix, name));

        if let Some(model) = var("GEMINI_MODEL") {
            config.gemini.model = model;
        }
        if let Some(url) = var("GEMINI_BASE_URL") {
            config.gemini.base_url = url;
        }
        if let Some(secs) = var("GEMINI_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(v) => config.gemini.timeout_secs = v,
                Err(_) => warn!("Ignoring invalid {}GEMINI_TIMEOUT_SECS={}", self.env_prefix, secs),
            }
        }

        if let Some(url) = var("WEATHER_BASE_URL") {
            config.weather.base_url = url;
        }
        if let Some(secs) = var("WEATHER_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(v) => config.weather.timeout_secs = v,
                Err(_) => warn!("Ignoring invalid {}WEATHER_TIMEOUT_SECS={}", self.env_prefix, secs),
            }
        }

        if let Some(mode) = var("GEO_MODE") {
            match mode.parse::<GeolocationMode>() {
                Ok(m) => config.geolocation.mode = m,
                Err(e) => warn!("{}", e),
            }
        }
        if let Some(allow) = var("GEO_ALLOW") {
            config.geolocation.allow = matches!(
                allow.to_lowercase().as_str(),
                "true" | "1" | "yes"
            );
        }
        if let Some(lat) = var("LATITUDE") {
            match lat.parse() {
                Ok(v) => config.geolocation.latitude = Some(v),
                Err(_) => warn!("Ignoring invalid {}LATITUDE={}", self.env_prefix, lat),
            }
        }
        if let Some(lon) = var("LONGITUDE") {
            match lon.parse() {
                Ok(v) => config.geolocation.longitude = Some(v),
                Err(_) => warn!("Ignoring invalid {}LONGITUDE={}", self.env_prefix, lon),
            }
        }
        if let Some(url) = var("IP_LOOKUP_URL") {
            config.geolocation.ip_lookup_url = url;
        }

        if let Some(dir) = var("DATA_DIR") {
            config.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(level) = var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = var("LOG_JSON") {
            config.logging.json = matches!(json.to_lowercase().as_str(), "true" | "1" | "yes");
        }

        config
    }

    pub async fn save_config(config: &AppConfig, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(config)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(path, content).await?;
        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    pub fn generate_example_config() -> String {
        toml::to_string_pretty(&AppConfig::default())
            .unwrap_or_else(|_| "Failed to generate example config".to_string())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Ключ Gemini из окружения или `.env`. Никогда не хранится в файле конфигурации.
pub fn require_api_key() -> Result<String, ConfigError> {
    dotenv::dotenv().ok();
    resolve_api_key(|key| env::var(key).ok())
}

pub fn resolve_api_key<F>(lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    [API_KEY_VAR, LEGACY_API_KEY_VAR]
        .iter()
        .filter_map(|var| lookup(var))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or(ConfigError::MissingCredential { var: API_KEY_VAR })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let loader = ConfigLoader::new();
        let config = loader.apply_env_overrides(
            AppConfig::default(),
            lookup(&[
                ("WARDROBE_GEMINI_MODEL", "gemini-test"),
                ("WARDROBE_GEO_MODE", "ip"),
                ("WARDROBE_GEO_ALLOW", "no"),
                ("WARDROBE_DATA_DIR", "/tmp/wardrobe"),
                ("WARDROBE_WEATHER_TIMEOUT_SECS", "abc"),
            ]),
        );

        assert_eq!(config.gemini.model, "gemini-test");
        assert_eq!(config.geolocation.mode, GeolocationMode::Ip);
        assert!(!config.geolocation.allow);
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/wardrobe")));
        // некорректное значение не ломает конфиг
        assert_eq!(config.weather.timeout_secs, 15);
    }

    #[test]
    fn test_api_key_resolution() {
        assert_eq!(
            resolve_api_key(lookup(&[("GEMINI_API_KEY", "k1"), ("API_KEY", "k2")])).unwrap(),
            "k1"
        );
        assert_eq!(resolve_api_key(lookup(&[("API_KEY", "legacy")])).unwrap(), "legacy");
        assert_eq!(
            resolve_api_key(lookup(&[("GEMINI_API_KEY", "  ")])),
            Err(ConfigError::MissingCredential { var: "GEMINI_API_KEY" })
        );
    }
}
