use super::settings::{AppConfig, GeolocationConfig, GeolocationMode};
use common::ConfigError;
use tracing::warn;

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if config.gemini.model.trim().is_empty() {
            return Err(invalid("gemini.model", &config.gemini.model));
        }
        Self::validate_url("gemini.base_url", &config.gemini.base_url)?;
        Self::validate_timeout("gemini.timeout_secs", config.gemini.timeout_secs)?;

        Self::validate_url("weather.base_url", &config.weather.base_url)?;
        Self::validate_timeout("weather.timeout_secs", config.weather.timeout_secs)?;

        self.validate_geolocation(&config.geolocation)?;

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(invalid("logging.level", &config.logging.level));
        }

        Ok(())
    }

    fn validate_geolocation(&self, config: &GeolocationConfig) -> Result<(), ConfigError> {
        if let Some(lat) = config.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(invalid("geolocation.latitude", &lat.to_string()));
            }
        }
        if let Some(lon) = config.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(invalid("geolocation.longitude", &lon.to_string()));
            }
        }

        match config.mode {
            GeolocationMode::Fixed if config.fixed_coordinates().is_none() => {
                warn!("geolocation.mode = fixed without latitude/longitude");
            }
            GeolocationMode::Ip => {
                Self::validate_url("geolocation.ip_lookup_url", &config.ip_lookup_url)?;
                Self::validate_timeout("geolocation.timeout_secs", config.timeout_secs)?;
            }
            _ => {}
        }

        Ok(())
    }

    fn validate_url(key: &str, url: &str) -> Result<(), ConfigError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(invalid(key, url))
        }
    }

    fn validate_timeout(key: &str, secs: u64) -> Result<(), ConfigError> {
        if secs == 0 {
            Err(invalid(key, "0"))
        } else {
            Ok(())
        }
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
