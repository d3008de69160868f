use crate::context::WardrobeContext;
use common::WardrobeResult;
use domain::{Category, CategoryFilter, ClothingItem, ItemId, Wardrobe};

pub const EMPTY_CATEGORY_MESSAGE: &str = "В этой категории пока пусто.";

/// Каталог: фильтр по категории и удаление
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogView {
    filter: CategoryFilter,
}

impl CatalogView {
    pub fn new(filter: CategoryFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Вещи под текущим фильтром, порядок гардероба сохраняется
    pub fn visible<'a>(&self, wardrobe: &'a Wardrobe) -> Vec<&'a ClothingItem> {
        wardrobe.filter(self.filter)
    }

    pub fn empty_message(&self, wardrobe: &Wardrobe) -> Option<&'static str> {
        if self.visible(wardrobe).is_empty() {
            Some(EMPTY_CATEGORY_MESSAGE)
        } else {
            None
        }
    }

    /// Вкладки фильтра с количеством вещей
    pub fn tabs(&self, wardrobe: &Wardrobe) -> Vec<(CategoryFilter, usize)> {
        let counts = wardrobe.count_by_category();
        std::iter::once((CategoryFilter::All, wardrobe.len()))
            .chain(Category::ALL.iter().map(|c| {
                (
                    CategoryFilter::Only(*c),
                    counts.get(c).copied().unwrap_or(0),
                )
            }))
            .collect()
    }

    /// Удаление с немедленным сохранением
    pub async fn delete(
        &self,
        context: &mut WardrobeContext,
        id: &ItemId,
    ) -> WardrobeResult<Option<ClothingItem>> {
        context.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: Category) -> ClothingItem {
        ClothingItem {
            id: ItemId::from(id),
            image_url: String::new(),
            category,
            description: String::new(),
            tags: vec![],
            color: String::new(),
            seasons: vec![],
            created_at: 0,
        }
    }

    #[test]
    fn test_empty_state_message() {
        let wardrobe = Wardrobe::from_items(vec![item("t", Category::Top)]);
        let mut view = CatalogView::default();
        assert_eq!(view.empty_message(&wardrobe), None);

        view.set_filter(CategoryFilter::Only(Category::Shoes));
        assert_eq!(view.empty_message(&wardrobe), Some(EMPTY_CATEGORY_MESSAGE));
    }

    #[test]
    fn test_tabs_count_items() {
        let wardrobe = Wardrobe::from_items(vec![
            item("t1", Category::Top),
            item("t2", Category::Top),
            item("s", Category::Shoes),
        ]);
        let tabs = CatalogView::default().tabs(&wardrobe);
        assert_eq!(tabs[0], (CategoryFilter::All, 3));
        assert!(tabs.contains(&(CategoryFilter::Only(Category::Top), 2)));
        assert!(tabs.contains(&(CategoryFilter::Only(Category::Accessory), 0)));
    }

    #[tokio::test]
    async fn test_delete_goes_through_context() {
        let mut ctx = WardrobeContext::new(Wardrobe::from_items(vec![
            item("a", Category::Top),
            item("b", Category::Bottom),
        ]));
        let removed = CatalogView::default()
            .delete(&mut ctx, &ItemId::from("a"))
            .await
            .unwrap();
        assert_eq!(removed.map(|i| i.id), Some(ItemId::from("a")));
        assert_eq!(ctx.wardrobe().len(), 1);
    }
}
