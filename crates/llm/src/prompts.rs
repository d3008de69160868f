use domain::{Category, ClothingItem, WeatherState, COLD_THRESHOLD_C, KNOWN_SEASONS};
use serde::Serialize;
use serde_json::{json, Value};

pub fn classification_prompt() -> String {
    let categories = Category::ALL
        .iter()
        .map(|c| format!("{} ({})", c.as_str(), c.label()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Проанализируй изображение одежды.\n\
         Игнорируй фон.\n\
         Классифицируй вещь в одну из категорий: {categories}.\n\n\
         Дай:\n\
         1. Короткое описание на РУССКОМ языке (макс 10 слов).\n\
         2. Список из 3-5 тегов на РУССКОМ (стиль, материал, повод).\n\
         3. Основной цвет на РУССКОМ.\n\
         4. Подходящие сезоны ({}).",
        KNOWN_SEASONS.join(", ")
    )
}

pub fn classification_schema() -> Value {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "category": { "type": "STRING", "enum": categories },
            "description": { "type": "STRING" },
            "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
            "color": { "type": "STRING" },
            "seasons": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["category", "description", "tags", "color", "seasons"]
    })
}

pub fn recommendation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recommendedItemsIds": { "type": "ARRAY", "items": { "type": "STRING" } },
            "reasoning": { "type": "STRING" }
        },
        "required": ["recommendedItemsIds", "reasoning"]
    })
}

/// Сокращённое представление вещи для модели, без изображения
#[derive(Debug, Serialize)]
struct PromptItem<'a> {
    id: &'a str,
    category: &'static str,
    description: &'a str,
    color: &'a str,
    seasons: &'a [String],
    tags: &'a [String],
}

impl<'a> From<&'a ClothingItem> for PromptItem<'a> {
    fn from(item: &'a ClothingItem) -> Self {
        Self {
            id: item.id.as_str(),
            category: item.category.as_str(),
            description: &item.description,
            color: &item.color,
            seasons: &item.seasons,
            tags: &item.tags,
        }
    }
}

pub fn simplified_wardrobe_json<'a>(items: impl IntoIterator<Item = &'a ClothingItem>) -> String {
    let simplified: Vec<PromptItem<'_>> = items.into_iter().map(PromptItem::from).collect();
    serde_json::to_string(&simplified).unwrap_or_else(|_| "[]".to_string())
}

pub fn recommendation_prompt<'a>(
    items: impl IntoIterator<Item = &'a ClothingItem>,
    weather: &WeatherState,
) -> String {
    format!(
        "Контекст: Пользователь находится в городе: {location}. Погода: {temp}°C, условия: {condition}.\n\n\
         Задача: Выбери лучший наряд из гардероба пользователя.\n\
         Правила:\n\
         1. Выбери как минимум один TOP (Верх) и один BOTTOM (Низ).\n\
         2. Если холодно (< {cold}°C), постарайся добавить OUTERWEAR (Верхнюю одежду).\n\
         3. Выбери SHOES (Обувь), если есть.\n\
         4. Верни ID выбранных вещей и короткое дружелюбное объяснение на РУССКОМ языке \
         (почему этот выбор подходит под погоду).\n\n\
         Wardrobe JSON:\n{wardrobe}",
        location = weather.location,
        temp = weather.temperature,
        condition = weather.condition,
        cold = COLD_THRESHOLD_C,
        wardrobe = simplified_wardrobe_json(items),
    )
}
