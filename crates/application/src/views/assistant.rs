//! Ассистент: погода (вручную или по геопозиции) и рекомендация образа.

use common::{WardrobeError, WardrobeResult};
use domain::{DomainError, OutfitCheck, Recommendation, Wardrobe, WeatherState};
use infrastructure::{LocationProvider, WeatherSource};
use llm::WardrobeAi;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct AssistantView {
    weather: WeatherState,
    recommendation: Option<Recommendation>,
}

impl AssistantView {
    pub fn new(weather: WeatherState) -> Self {
        Self {
            weather,
            recommendation: None,
        }
    }

    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Ручной ввод заменяет все три поля
    pub fn set_manual(&mut self, location: impl Into<String>, temperature: i32, condition: impl Into<String>) {
        self.weather = WeatherState::new(location, temperature, condition);
    }

    /// Координаты → погода. При любой ошибке прежнее состояние не меняется.
    pub async fn locate(
        &mut self,
        location: &dyn LocationProvider,
        weather: &dyn WeatherSource,
    ) -> WardrobeResult<&WeatherState> {
        let coords = location.locate().await.map_err(|e| {
            warn!("Geolocation failed: {}", e);
            WardrobeError::Location(e)
        })?;

        let state = weather.current(coords).await.map_err(|e| {
            warn!("Weather lookup failed: {}", e);
            WardrobeError::Weather(e)
        })?;

        self.weather = state;
        Ok(&self.weather)
    }

    /// Прежняя рекомендация сбрасывается до запроса. Пустой гардероб
    /// отклоняется без обращения к модели.
    pub async fn recommend(
        &mut self,
        ai: &dyn WardrobeAi,
        wardrobe: &Wardrobe,
    ) -> WardrobeResult<&Recommendation> {
        self.recommendation = None;

        if wardrobe.is_empty() {
            return Err(DomainError::EmptyWardrobe.into());
        }

        let suggestion = ai.suggest_outfit(wardrobe, &self.weather).await?;
        let recommendation = Recommendation::resolve(suggestion, wardrobe);

        if recommendation.dropped > 0 {
            info!(
                "Dropped {} unknown ids from recommendation",
                recommendation.dropped
            );
        }

        let check = OutfitCheck::evaluate(&recommendation.items, wardrobe, &self.weather);
        if !check.is_satisfied() {
            warn!(issues = ?check.issues(), "Recommendation does not follow outfit rules");
        }

        Ok(&*self.recommendation.insert(recommendation))
    }

    /// Уход с экрана отбрасывает результат
    pub fn clear(&mut self) {
        self.recommendation = None;
    }
}
