use super::store::KeyValueStore;
use common::StorageError;
use domain::{SavedOutfit, Wardrobe};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// Фиксированный ключ гардероба
pub const WARDROBE_KEY: &str = "wardrobe_ai_data";
/// Фиксированный ключ сохранённых образов
pub const OUTFITS_KEY: &str = "wardrobe_ai_outfits";

/// Читает и пишет весь гардероб под одним ключом
#[derive(Clone)]
pub struct WardrobeRepository {
    store: Arc<dyn KeyValueStore>,
}

impl WardrobeRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Отсутствующее, нечитаемое или битое значение даёт пустой гардероб.
    /// Повторные ID отбрасываются, остаётся первое вхождение.
    pub async fn load(&self) -> Wardrobe {
        let mut wardrobe: Wardrobe = load_or_default(self.store.as_ref(), WARDROBE_KEY).await;
        let duplicates = wardrobe.dedup_ids();
        if duplicates > 0 {
            warn!("Dropped {} items with duplicate ids from stored wardrobe", duplicates);
        }
        debug!("Hydrated wardrobe with {} items", wardrobe.len());
        wardrobe
    }

    pub async fn save(&self, wardrobe: &Wardrobe) -> Result<(), StorageError> {
        let json = serde_json::to_string(wardrobe)?;
        self.store.set(WARDROBE_KEY, &json).await
    }
}

/// Список сохранённых образов
#[derive(Clone)]
pub struct OutfitRepository {
    store: Arc<dyn KeyValueStore>,
}

impl OutfitRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Vec<SavedOutfit> {
        load_or_default(self.store.as_ref(), OUTFITS_KEY).await
    }

    pub async fn save(&self, outfits: &[SavedOutfit]) -> Result<(), StorageError> {
        let json = serde_json::to_string(outfits)?;
        self.store.set(OUTFITS_KEY, &json).await
    }
}

async fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Stored value under '{}' is malformed, starting empty: {}", key, e);
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            warn!("Failed to read '{}' from storage, starting empty: {}", key, e);
            T::default()
        }
    }
}
