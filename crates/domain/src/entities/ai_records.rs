//! Структурированные ответы внешней модели.
//!
//! Все поля обязательны: отсутствие любого из них - ошибка десериализации,
//! ответ не принимается частично.

use crate::value_objects::Category;
use serde::{Deserialize, Serialize};

/// Результат классификации фото
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingAnalysis {
    pub category: Category,
    pub description: String,
    pub tags: Vec<String>,
    pub color: String,
    pub seasons: Vec<String>,
}

/// Ответ рекомендателя: ID выбранных вещей и объяснение
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    #[serde(rename = "recommendedItemsIds")]
    pub recommended_item_ids: Vec<String>,
    pub reasoning: String,
}
