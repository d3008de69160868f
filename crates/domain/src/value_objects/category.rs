//! Category - закрытая классификация вещей

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Категория вещи. Сериализуется как `TOP`, `BOTTOM`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    Accessory,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Top,
        Category::Bottom,
        Category::Shoes,
        Category::Outerwear,
        Category::Accessory,
    ];

    /// Имя в формате схемы ответа модели
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "TOP",
            Category::Bottom => "BOTTOM",
            Category::Shoes => "SHOES",
            Category::Outerwear => "OUTERWEAR",
            Category::Accessory => "ACCESSORY",
        }
    }

    /// Подпись для пользователя
    pub fn label(&self) -> &'static str {
        match self {
            Category::Top => "Верх",
            Category::Bottom => "Низ",
            Category::Shoes => "Обувь",
            Category::Outerwear => "Верхняя одежда",
            Category::Accessory => "Аксессуары",
        }
    }

    /// Участвует в "верхней" карусели подбора
    pub fn is_top_layer(&self) -> bool {
        matches!(self, Category::Top | Category::Outerwear)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TOP" => Ok(Category::Top),
            "BOTTOM" => Ok(Category::Bottom),
            "SHOES" => Ok(Category::Shoes),
            "OUTERWEAR" => Ok(Category::Outerwear),
            "ACCESSORY" => Ok(Category::Accessory),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}

/// Фильтр каталога: все вещи или одна категория
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Все",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "ALL"),
            CategoryFilter::Only(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_uses_schema_names() {
        let json = serde_json::to_string(&Category::Outerwear).unwrap();
        assert_eq!(json, "\"OUTERWEAR\"");

        let parsed: Category = serde_json::from_str("\"ACCESSORY\"").unwrap();
        assert_eq!(parsed, Category::Accessory);

        assert!(serde_json::from_str::<Category>("\"DRESS\"").is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("top".parse::<Category>().unwrap(), Category::Top);
        assert_eq!(" Shoes ".parse::<Category>().unwrap(), Category::Shoes);
        assert!(matches!(
            "hat".parse::<Category>(),
            Err(DomainError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "bottom".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Bottom)
        );
        assert!("socks".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_top_layer() {
        assert!(Category::Top.is_top_layer());
        assert!(Category::Outerwear.is_top_layer());
        assert!(!Category::Bottom.is_top_layer());
        assert!(!Category::Shoes.is_top_layer());
    }
}
