//! Проверка рекомендации против правил из промпта.
//!
//! Только диагностика: результат модели не меняется и не отбрасывается.

use crate::entities::{ClothingItem, Wardrobe};
use crate::value_objects::{Category, WeatherState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutfitCheck {
    pub has_top: bool,
    pub has_bottom: bool,
    /// Холодно, верхняя одежда есть в гардеробе, но не выбрана
    pub missing_outerwear: bool,
    /// Обувь есть в гардеробе, но не выбрана
    pub missing_shoes: bool,
}

impl OutfitCheck {
    pub fn evaluate(selected: &[ClothingItem], wardrobe: &Wardrobe, weather: &WeatherState) -> Self {
        let picked = |c: Category| selected.iter().any(|i| i.category == c);
        let available = |c: Category| wardrobe.iter().any(|i| i.category == c);

        Self {
            has_top: picked(Category::Top),
            has_bottom: picked(Category::Bottom),
            missing_outerwear: weather.is_cold()
                && available(Category::Outerwear)
                && !picked(Category::Outerwear),
            missing_shoes: available(Category::Shoes) && !picked(Category::Shoes),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.issues().is_empty()
    }

    pub fn issues(&self) -> Vec<&'static str> {
        let mut issues = Vec::new();
        if !self.has_top {
            issues.push("no TOP selected");
        }
        if !self.has_bottom {
            issues.push("no BOTTOM selected");
        }
        if self.missing_outerwear {
            issues.push("cold weather but no OUTERWEAR");
        }
        if self.missing_shoes {
            issues.push("SHOES available but not selected");
        }
        issues
    }
}
