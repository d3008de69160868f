//! Domain Errors - нарушения бизнес-правил
//!
//! Только ошибки бизнес-логики, не infrastructure errors

use thiserror::Error;

/// Domain-specific errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Неизвестная категория одежды
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Вещь с таким ID отсутствует в гардеробе
    #[error("Item not found with ID: {0}")]
    ItemNotFound(String),

    /// ID уже занят другой вещью
    #[error("Duplicate item ID: {0}")]
    DuplicateItem(String),

    /// Рекомендация невозможна без вещей
    #[error("Wardrobe is empty")]
    EmptyWardrobe,

    /// Подбор требует хотя бы один верх и один низ
    #[error("Not enough items for matching: {tops} tops, {bottoms} bottoms")]
    InsufficientItems { tops: usize, bottoms: usize },

    /// Карусель не может быть пустой
    #[error("Carousel cannot be empty")]
    EmptyCarousel,
}

pub type DomainResult<T> = Result<T, DomainError>;
