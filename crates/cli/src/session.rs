//! Сборка зависимостей одного запуска: хранилище, гардероб, AI, погода.

use application::{OutfitBook, WardrobeContext};
use common::{WardrobeError, WardrobeResult};
use infrastructure::config::require_api_key;
use infrastructure::{
    provider_from_config, AppConfig, FileStore, KeyValueStore, LocationProvider,
    OpenMeteoClient, OutfitRepository, WardrobeRepository,
};
use llm::{GeminiSettings, GeminiWardrobeAi};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub struct Session {
    config: AppConfig,
    store: Arc<dyn KeyValueStore>,
    pub context: WardrobeContext,
}

impl Session {
    pub async fn open(config: AppConfig) -> Self {
        let data_dir = config.data_dir();
        debug!("Data directory: {}", data_dir.display());

        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(data_dir));
        let context = WardrobeContext::hydrate(WardrobeRepository::new(store.clone())).await;

        Self {
            config,
            store,
            context,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub async fn outfit_book(&self) -> OutfitBook {
        OutfitBook::load(OutfitRepository::new(self.store.clone())).await
    }

    /// Отсутствие ключа не мешает сборке: ошибка появится при первом запросе
    pub fn ai(&self) -> WardrobeResult<GeminiWardrobeAi> {
        let gemini = &self.config.gemini;
        GeminiWardrobeAi::new(GeminiSettings {
            api_key: require_api_key().ok(),
            model: gemini.model.clone(),
            base_url: gemini.base_url.clone(),
            timeout: Duration::from_secs(gemini.timeout_secs),
        })
    }

    pub fn location(&self) -> Arc<dyn LocationProvider> {
        provider_from_config(&self.config.geolocation)
    }

    pub fn weather(&self) -> WardrobeResult<OpenMeteoClient> {
        OpenMeteoClient::from_config(&self.config.weather).map_err(WardrobeError::Weather)
    }
}
