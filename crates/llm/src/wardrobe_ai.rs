//! AI Gateway: классификация фото и подбор образа под погоду.

use crate::image::ImagePayload;
use crate::prompts;
use crate::providers::{GooglePart, GoogleProvider};
use async_trait::async_trait;
use common::{NetworkError, WardrobeError, WardrobeResult};
use domain::{ClothingAnalysis, OutfitSuggestion, Wardrobe, WeatherState};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Операции внешней модели. Сбой не меняет состояние приложения.
#[async_trait]
pub trait WardrobeAi: Send + Sync {
    async fn analyze_image(&self, image: &ImagePayload) -> WardrobeResult<ClothingAnalysis>;

    async fn suggest_outfit(
        &self,
        wardrobe: &Wardrobe,
        weather: &WeatherState,
    ) -> WardrobeResult<OutfitSuggestion>;
}

/// Настройки Gemini для сборки шлюза
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

pub struct GeminiWardrobeAi {
    provider: GoogleProvider,
}

impl GeminiWardrobeAi {
    pub fn new(settings: GeminiSettings) -> WardrobeResult<Self> {
        let provider = GoogleProvider::new(settings.api_key, settings.model, settings.timeout)?
            .with_base_url(settings.base_url);
        Ok(Self { provider })
    }

    pub fn from_provider(provider: GoogleProvider) -> Self {
        Self { provider }
    }
}

/// Текст ответа модели → запись. Битый JSON и нарушение схемы различаются.
pub(crate) fn parse_structured<T: DeserializeOwned>(text: &str) -> Result<T, NetworkError> {
    let value: serde_json::Value = serde_json::from_str(text.trim())
        .map_err(|e| NetworkError::InvalidBody(format!("Model returned invalid JSON: {e}")))?;
    serde_json::from_value(value).map_err(|e| NetworkError::SchemaViolation(e.to_string()))
}

#[async_trait]
impl WardrobeAi for GeminiWardrobeAi {
    async fn analyze_image(&self, image: &ImagePayload) -> WardrobeResult<ClothingAnalysis> {
        let parts = vec![
            GooglePart::inline(image.mime_type.clone(), image.data.clone()),
            GooglePart::text(prompts::classification_prompt()),
        ];

        let text = self
            .provider
            .generate_json("classify_image", parts, prompts::classification_schema())
            .await?;

        let analysis: ClothingAnalysis = parse_structured(&text).map_err(|e| {
            warn!("Classification response rejected: {}", e);
            WardrobeError::Ai(e)
        })?;
        debug!("Classified as {} ({})", analysis.category, analysis.description);
        Ok(analysis)
    }

    async fn suggest_outfit(
        &self,
        wardrobe: &Wardrobe,
        weather: &WeatherState,
    ) -> WardrobeResult<OutfitSuggestion> {
        let prompt = prompts::recommendation_prompt(wardrobe, weather);

        let text = self
            .provider
            .generate_json(
                "suggest_outfit",
                vec![GooglePart::text(prompt)],
                prompts::recommendation_schema(),
            )
            .await?;

        let suggestion: OutfitSuggestion = parse_structured(&text).map_err(|e| {
            warn!("Recommendation response rejected: {}", e);
            WardrobeError::Ai(e)
        })?;
        debug!(
            "Model suggested {} items",
            suggestion.recommended_item_ids.len()
        );
        Ok(suggestion)
    }
}
