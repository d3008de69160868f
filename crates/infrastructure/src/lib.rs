//! Инфраструктура гардероба: конфигурация, локальное хранилище,
//! погода (Open-Meteo) и определение местоположения.

pub mod config;
pub mod geolocation;
mod http;
pub mod paths;
pub mod storage;
pub mod weather;

pub use config::{AppConfig, ConfigLoader, ConfigValidator};
pub use geolocation::{provider_from_config, FixedLocation, IpGeolocation, LocationProvider};
pub use storage::{FileStore, KeyValueStore, MemoryStore, OutfitRepository, WardrobeRepository};
pub use weather::{OpenMeteoClient, WeatherSource};
