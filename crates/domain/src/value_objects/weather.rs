//! Погодный контекст для рекомендаций

use serde::{Deserialize, Serialize};
use std::fmt;

/// Порог "холодно": ниже него модели советуют добавить верхнюю одежду
pub const COLD_THRESHOLD_C: i32 = 15;

/// Состояние погоды. Не сохраняется между запусками.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherState {
    pub location: String,
    pub temperature: i32,
    pub condition: String,
}

impl Default for WeatherState {
    fn default() -> Self {
        Self {
            location: "Москва".to_string(),
            temperature: 15,
            condition: WeatherCondition::Cloudy.label().to_string(),
        }
    }
}

impl WeatherState {
    pub fn new(location: impl Into<String>, temperature: i32, condition: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            temperature,
            condition: condition.into(),
        }
    }

    /// Состояние по результату поиска погоды по координатам.
    /// Температура округляется до целых градусов.
    pub fn from_lookup(coords: Coordinates, temperature_c: f64, weather_code: i64) -> Self {
        Self {
            location: coords.label(),
            temperature: temperature_c.round() as i32,
            condition: WeatherCondition::from_code(weather_code).label().to_string(),
        }
    }

    pub fn is_cold(&self) -> bool {
        self.temperature < COLD_THRESHOLD_C
    }
}

impl fmt::Display for WeatherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}°C, {}", self.location, self.temperature, self.condition)
    }
}

/// Человекочитаемое состояние погоды
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Showers,
    Storm,
    Overcast,
    Windy,
}

impl WeatherCondition {
    /// Варианты для ручного ввода
    pub const MANUAL_CHOICES: [WeatherCondition; 5] = [
        WeatherCondition::Clear,
        WeatherCondition::Cloudy,
        WeatherCondition::Rain,
        WeatherCondition::Snow,
        WeatherCondition::Windy,
    ];

    /// Сопоставление числового кода погоды (WMO, Open-Meteo) с подписью.
    /// Проверки идут по порядку, всё непокрытое - "пасмурно".
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => WeatherCondition::Clear,
            1..=3 => WeatherCondition::Cloudy,
            45..=48 => WeatherCondition::Fog,
            51..=55 => WeatherCondition::Drizzle,
            61..=67 => WeatherCondition::Rain,
            71..=77 => WeatherCondition::Snow,
            80..=82 => WeatherCondition::Showers,
            c if c >= 95 => WeatherCondition::Storm,
            _ => WeatherCondition::Overcast,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Ясно",
            WeatherCondition::Cloudy => "Облачно",
            WeatherCondition::Fog => "Туман",
            WeatherCondition::Drizzle => "Морось",
            WeatherCondition::Rain => "Дождь",
            WeatherCondition::Snow => "Снег",
            WeatherCondition::Showers => "Ливень",
            WeatherCondition::Storm => "Гроза",
            WeatherCondition::Overcast => "Пасмурно",
            WeatherCondition::Windy => "Ветрено",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Координаты устройства
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Строка местоположения для WeatherState
    pub fn label(&self) -> String {
        format!("Коорд: {:.2}, {:.2}", self.latitude, self.longitude)
    }
}
