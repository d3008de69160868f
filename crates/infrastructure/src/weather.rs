//! Клиент Open-Meteo: текущая температура и код погоды по координатам.

use crate::config::WeatherConfig;
use crate::http::{build_client, ensure_success, from_reqwest_error};
use async_trait::async_trait;
use common::{NetworkError, OperationTimer};
use domain::{Coordinates, WeatherState};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Источник текущей погоды
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Готовое состояние погоды для координат. Частичного результата не бывает.
    async fn current(&self, coords: Coordinates) -> Result<WeatherState, NetworkError>;
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl OpenMeteoClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, NetworkError> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    pub fn from_config(config: &WeatherConfig) -> Result<Self, NetworkError> {
        Self::new(config.base_url.clone(), config.timeout_secs)
    }

    fn forecast_url(&self, coords: Coordinates) -> String {
        format!(
            "{}/v1/forecast?latitude={}&longitude={}&current=temperature_2m,weather_code&wind_speed_unit=ms",
            self.base_url, coords.latitude, coords.longitude
        )
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature_2m: f64,
    weather_code: i64,
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn current(&self, coords: Coordinates) -> Result<WeatherState, NetworkError> {
        let mut timer = OperationTimer::new("weather_lookup");
        timer.add_field("latitude", coords.latitude);
        timer.add_field("longitude", coords.longitude);

        let result = self.fetch(coords).await;
        timer.finish_with_result(&result);
        result
    }
}

impl OpenMeteoClient {
    async fn fetch(&self, coords: Coordinates) -> Result<WeatherState, NetworkError> {
        let url = self.forecast_url(coords);
        debug!("Requesting weather: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| from_reqwest_error(e, self.timeout_secs))?;
        let response = ensure_success(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| from_reqwest_error(e, self.timeout_secs))?;
        let forecast: ForecastResponse = serde_json::from_str(&body)
            .map_err(|e| NetworkError::InvalidBody(format!("Failed to parse forecast: {e}")))?;

        let current = forecast
            .current
            .ok_or_else(|| NetworkError::InvalidBody("Forecast has no current block".to_string()))?;

        let state = WeatherState::from_lookup(coords, current.temperature_2m, current.weather_code);
        info!("Weather at {}: {}", coords.label(), state);
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_url_shape() {
        let client = OpenMeteoClient::new("https://api.open-meteo.com/", 15).unwrap();
        let url = client.forecast_url(Coordinates::new(55.75, 37.62));
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=55.75&longitude=37.62&current=temperature_2m,weather_code&wind_speed_unit=ms"
        );
    }
}
