use common::ConfigError;
use domain::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_IP_LOOKUP_URL: &str = "http://ip-api.com";

/// Полная конфигурация приложения. Любая секция может отсутствовать в файле.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub weather: WeatherConfig,
    pub geolocation: GeolocationConfig,
    pub storage: StorageConfig,
    pub logging: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            timeout_secs: 15,
        }
    }
}

/// Откуда терминальное приложение берёт координаты
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeolocationMode {
    /// Возможность отсутствует
    #[default]
    None,
    /// Координаты из конфига или флагов
    Fixed,
    /// Определение по IP адресу
    Ip,
}

impl fmt::Display for GeolocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GeolocationMode::None => "none",
            GeolocationMode::Fixed => "fixed",
            GeolocationMode::Ip => "ip",
        };
        f.write_str(s)
    }
}

impl FromStr for GeolocationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(GeolocationMode::None),
            "fixed" => Ok(GeolocationMode::Fixed),
            "ip" => Ok(GeolocationMode::Ip),
            other => Err(ConfigError::InvalidValue {
                key: "geolocation.mode".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub mode: GeolocationMode,
    /// Разрешение пользователя на определение позиции
    pub allow: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub ip_lookup_url: String,
    pub timeout_secs: u64,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            mode: GeolocationMode::None,
            allow: true,
            latitude: None,
            longitude: None,
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.to_string(),
            timeout_secs: 15,
        }
    }
}

impl GeolocationConfig {
    pub fn fixed_coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Каталог данных; по умолчанию `$WARDROBE_HOME` или `~/.wardrobe`
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(crate::paths::wardrobe_home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.timeout_secs, 60);
        assert_eq!(config.weather.timeout_secs, 15);
        assert_eq!(config.geolocation.mode, GeolocationMode::None);
        assert!(config.geolocation.allow);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[geolocation]
mode = "fixed"
latitude = 55.75
longitude = 37.62
"#,
        )
        .unwrap();

        assert_eq!(config.geolocation.mode, GeolocationMode::Fixed);
        assert_eq!(
            config.geolocation.fixed_coordinates(),
            Some(Coordinates::new(55.75, 37.62))
        );
        assert_eq!(config.gemini, GeminiConfig::default());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("IP".parse::<GeolocationMode>().unwrap(), GeolocationMode::Ip);
        assert_eq!("off".parse::<GeolocationMode>().unwrap(), GeolocationMode::None);
        assert!("gps".parse::<GeolocationMode>().is_err());
    }
}
