pub mod category;
pub mod weather;

pub use category::{Category, CategoryFilter};
pub use weather::{Coordinates, WeatherCondition, WeatherState, COLD_THRESHOLD_C};

/// Сезоны, которые просим у модели. В рантайме не валидируются.
pub const KNOWN_SEASONS: [&str; 5] = ["summer", "winter", "spring", "autumn", "all"];
