pub mod loader;
pub mod settings;
pub mod validator;

pub use loader::{require_api_key, resolve_api_key, ConfigLoader, ConfigSource, API_KEY_VAR};
pub use settings::{
    AppConfig, GeminiConfig, GeolocationConfig, GeolocationMode, LogConfig, StorageConfig,
    WeatherConfig,
};
pub use validator::ConfigValidator;
