//! ClothingItem - одна запись каталога

use super::{ClothingAnalysis, ItemId};
use crate::value_objects::Category;
use serde::{Deserialize, Serialize};

const DEFAULT_DESCRIPTION: &str = "Новая вещь";
const DEFAULT_COLOR: &str = "Неизвестно";
const DEFAULT_SEASON: &str = "all";

/// Вещь в гардеробе. Поля сериализуются в camelCase (`imageUrl`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: ItemId,
    /// Изображение в виде data URL
    pub image_url: String,
    pub category: Category,
    pub description: String,
    pub tags: Vec<String>,
    pub color: String,
    pub seasons: Vec<String>,
    /// Epoch-миллисекунды, только для порядка вставки
    pub created_at: i64,
}

impl ClothingItem {
    /// Собрать новую вещь из фото и подтверждённого анализа.
    /// Пустые поля заменяются значениями по умолчанию.
    pub fn from_analysis(image_url: impl Into<String>, analysis: ClothingAnalysis, created_at: i64) -> Self {
        let description = if analysis.description.trim().is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            analysis.description
        };
        let color = if analysis.color.trim().is_empty() {
            DEFAULT_COLOR.to_string()
        } else {
            analysis.color
        };
        let seasons = if analysis.seasons.is_empty() {
            vec![DEFAULT_SEASON.to_string()]
        } else {
            analysis.seasons
        };

        Self {
            id: ItemId::new(),
            image_url: image_url.into(),
            category: analysis.category,
            description,
            tags: analysis.tags,
            color,
            seasons,
            created_at,
        }
    }

    /// Первые `n` тегов для компактного отображения
    pub fn display_tags(&self, n: usize) -> &[String] {
        &self.tags[..self.tags.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis() -> ClothingAnalysis {
        ClothingAnalysis {
            category: Category::Top,
            description: "Белая льняная рубашка".to_string(),
            tags: vec!["лен".to_string(), "casual".to_string(), "лето".to_string()],
            color: "Белый".to_string(),
            seasons: vec!["summer".to_string()],
        }
    }

    #[test]
    fn test_from_analysis_keeps_fields() {
        let item = ClothingItem::from_analysis("data:image/png;base64,AAA", analysis(), 42);
        assert_eq!(item.category, Category::Top);
        assert_eq!(item.description, "Белая льняная рубашка");
        assert_eq!(item.color, "Белый");
        assert_eq!(item.seasons, vec!["summer"]);
        assert_eq!(item.created_at, 42);
        assert_eq!(item.image_url, "data:image/png;base64,AAA");
    }

    #[test]
    fn test_from_analysis_fills_defaults() {
        let mut a = analysis();
        a.description = "  ".to_string();
        a.color = String::new();
        a.seasons.clear();
        a.tags.clear();

        let item = ClothingItem::from_analysis("data:", a, 1);
        assert_eq!(item.description, "Новая вещь");
        assert_eq!(item.color, "Неизвестно");
        assert_eq!(item.seasons, vec!["all"]);
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let item = ClothingItem::from_analysis("data:", analysis(), 7);
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("imageUrl").is_some());
        assert_eq!(value["createdAt"], 7);
        assert_eq!(value["category"], "TOP");
    }

    #[test]
    fn test_display_tags_truncates_in_order() {
        let item = ClothingItem::from_analysis("data:", analysis(), 1);
        assert_eq!(item.display_tags(2), &["лен".to_string(), "casual".to_string()]);
        assert_eq!(item.display_tags(10).len(), 3);
    }
}
