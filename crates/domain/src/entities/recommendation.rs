//! Рекомендация образа и сохранённые образы

use super::{ClothingItem, ItemId, OutfitSuggestion, Wardrobe};
use serde::{Deserialize, Serialize};

/// Результат одного запроса к рекомендателю.
/// Живёт до следующего запроса, не сохраняется.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub items: Vec<ClothingItem>,
    pub reasoning: String,
    /// Сколько ID из ответа не нашлось в гардеробе
    pub dropped: usize,
}

impl Recommendation {
    /// Сопоставить ID из ответа модели с гардеробом.
    ///
    /// Порядок ответа сохраняется, неизвестные ID молча отбрасываются.
    /// Пустой список - допустимый результат.
    pub fn resolve(suggestion: OutfitSuggestion, wardrobe: &Wardrobe) -> Self {
        let total = suggestion.recommended_item_ids.len();
        let items: Vec<ClothingItem> = suggestion
            .recommended_item_ids
            .iter()
            .filter_map(|id| wardrobe.find_str(id).cloned())
            .collect();

        Self {
            dropped: total - items.len(),
            items,
            reasoning: suggestion.reasoning,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Образ, сохранённый из режима подбора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedOutfit {
    pub id: ItemId,
    pub item_ids: Vec<ItemId>,
    pub created_at: i64,
    pub is_favorite: bool,
}

impl SavedOutfit {
    pub fn new(item_ids: Vec<ItemId>, created_at: i64) -> Self {
        Self {
            id: ItemId::new(),
            item_ids,
            created_at,
            is_favorite: false,
        }
    }

    /// Вещи образа, которые ещё есть в гардеробе
    pub fn resolve<'a>(&self, wardrobe: &'a Wardrobe) -> Vec<&'a ClothingItem> {
        self.item_ids
            .iter()
            .filter_map(|id| wardrobe.find(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Category;

    fn item(id: &str) -> ClothingItem {
        ClothingItem {
            id: ItemId::from(id),
            image_url: String::new(),
            category: Category::Top,
            description: id.to_string(),
            tags: vec![],
            color: String::new(),
            seasons: vec![],
            created_at: 0,
        }
    }

    #[test]
    fn test_resolve_drops_unknown_ids_and_keeps_order() {
        let wardrobe = Wardrobe::from_items(vec![item("x"), item("z")]);
        let suggestion = OutfitSuggestion {
            recommended_item_ids: vec!["z".into(), "y".into(), "x".into()],
            reasoning: "Прохладно".into(),
        };

        let rec = Recommendation::resolve(suggestion, &wardrobe);
        let ids: Vec<_> = rec.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "x"]);
        assert_eq!(rec.dropped, 1);
        assert_eq!(rec.reasoning, "Прохладно");
    }

    #[test]
    fn test_saved_outfit_skips_deleted_items() {
        let wardrobe = Wardrobe::from_items(vec![item("a")]);
        let outfit = SavedOutfit::new(vec![ItemId::from("a"), ItemId::from("gone")], 5);
        let items = outfit.resolve(&wardrobe);
        assert_eq!(items.len(), 1);
        assert!(!outfit.is_favorite);
    }
}
