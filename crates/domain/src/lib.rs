//! Domain Layer - бизнес-логика гардероба
//!
//! Содержит ТОЛЬКО чистую логику без зависимостей на:
//! - Infrastructure (хранилище, HTTP, геолокация)
//! - Frameworks (CLI, терминал)
//! - External systems (Gemini, Open-Meteo)
//!
//! - Entities: ClothingItem, Wardrobe, SavedOutfit, Recommendation
//! - Value Objects: Category, WeatherState, WeatherCondition, Coordinates
//! - Services: Matcher (локальный подбор верх/низ), OutfitCheck

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::{
    ClothingAnalysis, ClothingItem, ItemId, OutfitSuggestion, Recommendation, SavedOutfit,
    Wardrobe,
};
pub use errors::{DomainError, DomainResult};
pub use services::{Carousel, Matcher, OutfitCheck};
pub use value_objects::{
    Category, CategoryFilter, Coordinates, WeatherCondition, WeatherState, COLD_THRESHOLD_C,
    KNOWN_SEASONS,
};

/// Текущее время в epoch-миллисекундах (createdAt)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
