//! Сохранённые образы из подборщика

use common::WardrobeResult;
use domain::{now_millis, ClothingItem, ItemId, SavedOutfit, Wardrobe};
use infrastructure::OutfitRepository;
use tracing::info;

pub struct OutfitBook {
    repository: OutfitRepository,
    outfits: Vec<SavedOutfit>,
}

/// Образ вместе с вещами, ещё существующими в гардеробе
#[derive(Debug)]
pub struct ResolvedOutfit<'a> {
    pub outfit: &'a SavedOutfit,
    pub items: Vec<&'a ClothingItem>,
}

impl OutfitBook {
    pub async fn load(repository: OutfitRepository) -> Self {
        let outfits = repository.load().await;
        Self {
            repository,
            outfits,
        }
    }

    pub fn outfits(&self) -> &[SavedOutfit] {
        &self.outfits
    }

    /// Новый образ идёт первым, список сохраняется целиком
    pub async fn save(&mut self, item_ids: Vec<ItemId>) -> WardrobeResult<&SavedOutfit> {
        let outfit = SavedOutfit::new(item_ids, now_millis());
        info!("Saving outfit {} ({} items)", outfit.id, outfit.item_ids.len());
        self.outfits.insert(0, outfit);
        self.repository.save(&self.outfits).await?;
        Ok(&self.outfits[0])
    }

    pub fn resolved<'a>(&'a self, wardrobe: &'a Wardrobe) -> Vec<ResolvedOutfit<'a>> {
        self.outfits
            .iter()
            .map(|outfit| ResolvedOutfit {
                outfit,
                items: outfit.resolve(wardrobe),
            })
            .collect()
    }
}
