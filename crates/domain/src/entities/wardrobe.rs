//! Wardrobe - упорядоченная коллекция вещей, новые впереди

use super::{ClothingItem, ItemId};
use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{Category, CategoryFilter};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Весь гардероб пользователя.
///
/// Меняется только через `add` (вставка в начало) и `remove` (по ID).
/// Сериализуется как JSON-массив вещей.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wardrobe {
    items: Vec<ClothingItem>,
}

impl Wardrobe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<ClothingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClothingItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Добавить вещь в начало. ID должен быть уникальным.
    pub fn add(&mut self, item: ClothingItem) -> DomainResult<()> {
        if self.contains(&item.id) {
            return Err(DomainError::DuplicateItem(item.id.to_string()));
        }
        self.items.insert(0, item);
        Ok(())
    }

    /// Удалить первую вещь с этим ID. Порядок остальных не меняется.
    pub fn remove(&mut self, id: &ItemId) -> Option<ClothingItem> {
        let pos = self.items.iter().position(|i| &i.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Оставить только первое вхождение каждого ID. Возвращает число убранных.
    pub fn dedup_ids(&mut self) -> usize {
        let before = self.items.len();
        let mut seen = HashSet::new();
        self.items.retain(|i| seen.insert(i.id.clone()));
        before - self.items.len()
    }

    pub fn find(&self, id: &ItemId) -> Option<&ClothingItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn find_str(&self, id: &str) -> Option<&ClothingItem> {
        self.items.iter().find(|i| i.id.as_str() == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.find(id).is_some()
    }

    /// Вещи, подходящие под фильтр, в исходном порядке
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&ClothingItem> {
        self.items
            .iter()
            .filter(|i| filter.matches(i.category))
            .collect()
    }

    /// "Верх" для подбора: TOP и OUTERWEAR
    pub fn tops(&self) -> Vec<ClothingItem> {
        self.items
            .iter()
            .filter(|i| i.category.is_top_layer())
            .cloned()
            .collect()
    }

    /// "Низ" для подбора: только BOTTOM
    pub fn bottoms(&self) -> Vec<ClothingItem> {
        self.items
            .iter()
            .filter(|i| i.category == Category::Bottom)
            .cloned()
            .collect()
    }

    pub fn count_by_category(&self) -> HashMap<Category, usize> {
        let mut counts = HashMap::new();
        for item in &self.items {
            *counts.entry(item.category).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Wardrobe {
    type Item = &'a ClothingItem;
    type IntoIter = std::slice::Iter<'a, ClothingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: Category) -> ClothingItem {
        ClothingItem {
            id: ItemId::from(id),
            image_url: "data:image/jpeg;base64,AA==".to_string(),
            category,
            description: format!("item {id}"),
            tags: vec![],
            color: "Черный".to_string(),
            seasons: vec!["all".to_string()],
            created_at: 0,
        }
    }

    #[test]
    fn test_add_prepends() {
        let mut w = Wardrobe::new();
        w.add(item("a", Category::Top)).unwrap();
        w.add(item("b", Category::Bottom)).unwrap();
        assert_eq!(w.items()[0].id.as_str(), "b");
        assert_eq!(w.items()[1].id.as_str(), "a");
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut w = Wardrobe::new();
        w.add(item("a", Category::Top)).unwrap();
        let err = w.add(item("a", Category::Shoes)).unwrap_err();
        assert_eq!(err, DomainError::DuplicateItem("a".to_string()));
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut first = item("a", Category::Top);
        first.description = "first".to_string();
        let mut wardrobe = Wardrobe::from_items(vec![
            first,
            item("b", Category::Bottom),
            item("a", Category::Shoes),
        ]);

        assert_eq!(wardrobe.dedup_ids(), 1);
        assert_eq!(wardrobe.len(), 2);
        assert_eq!(wardrobe.items()[0].description, "first");
        assert_eq!(wardrobe.items()[1].id.as_str(), "b");
        assert_eq!(wardrobe.dedup_ids(), 0);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut w = Wardrobe::from_items(vec![item("a", Category::Top)]);
        assert!(w.remove(&ItemId::from("zzz")).is_none());
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn test_tops_include_outerwear() {
        let w = Wardrobe::from_items(vec![
            item("coat", Category::Outerwear),
            item("jeans", Category::Bottom),
            item("tee", Category::Top),
            item("boots", Category::Shoes),
        ]);
        let tops: Vec<_> = w.tops().into_iter().map(|i| i.id.to_string()).collect();
        assert_eq!(tops, vec!["coat", "tee"]);
        assert_eq!(w.bottoms().len(), 1);
    }

    #[test]
    fn test_serializes_as_array() {
        let w = Wardrobe::from_items(vec![item("a", Category::Top)]);
        let json = serde_json::to_value(&w).unwrap();
        assert!(json.is_array());
    }
}
