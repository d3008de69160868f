//! WardrobeContext - единственный владелец гардероба.
//!
//! Экраны получают `&Wardrobe` только на чтение. Мутаций две (`add`, `remove`),
//! после каждой по порядку вызываются хуки. Сохранение - один из хуков.

use async_trait::async_trait;
use common::WardrobeResult;
use domain::{ClothingItem, ItemId, Wardrobe};
use infrastructure::WardrobeRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Событие изменения гардероба
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WardrobeEvent {
    Added(ItemId),
    Removed(ItemId),
}

/// Обработчик, вызываемый строго после применения мутации в памяти
#[async_trait]
pub trait MutationHook: Send + Sync {
    async fn on_mutation(&self, event: &WardrobeEvent, wardrobe: &Wardrobe) -> WardrobeResult<()>;
}

/// Полная перезапись сохранённого гардероба после каждой мутации
pub struct PersistHook {
    repository: WardrobeRepository,
}

impl PersistHook {
    pub fn new(repository: WardrobeRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl MutationHook for PersistHook {
    async fn on_mutation(&self, event: &WardrobeEvent, wardrobe: &Wardrobe) -> WardrobeResult<()> {
        self.repository.save(wardrobe).await?;
        debug!("Persisted wardrobe after {:?} ({} items)", event, wardrobe.len());
        Ok(())
    }
}

pub struct WardrobeContext {
    wardrobe: Wardrobe,
    hooks: Vec<Arc<dyn MutationHook>>,
}

impl WardrobeContext {
    /// Контекст без хуков (тесты, временная сессия)
    pub fn new(wardrobe: Wardrobe) -> Self {
        Self {
            wardrobe,
            hooks: Vec::new(),
        }
    }

    /// Загрузить сохранённый гардероб и подключить сохранение на мутации.
    /// Битые или отсутствующие данные дают пустой гардероб.
    pub async fn hydrate(repository: WardrobeRepository) -> Self {
        let wardrobe = repository.load().await;
        info!("Wardrobe hydrated: {} items", wardrobe.len());
        Self::new(wardrobe).with_hook(Arc::new(PersistHook::new(repository)))
    }

    pub fn with_hook(mut self, hook: Arc<dyn MutationHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn wardrobe(&self) -> &Wardrobe {
        &self.wardrobe
    }

    /// Вставка в начало. Ошибка хука не откатывает мутацию в памяти.
    pub async fn add(&mut self, item: ClothingItem) -> WardrobeResult<()> {
        let id = item.id.clone();
        self.wardrobe.add(item)?;
        self.notify(WardrobeEvent::Added(id)).await
    }

    /// Удаление по id; отсутствующий id - без изменений и без сохранения
    pub async fn remove(&mut self, id: &ItemId) -> WardrobeResult<Option<ClothingItem>> {
        let Some(removed) = self.wardrobe.remove(id) else {
            debug!("Remove of unknown item {} ignored", id);
            return Ok(None);
        };
        self.notify(WardrobeEvent::Removed(removed.id.clone())).await?;
        Ok(Some(removed))
    }

    async fn notify(&self, event: WardrobeEvent) -> WardrobeResult<()> {
        for hook in &self.hooks {
            if let Err(e) = hook.on_mutation(&event, &self.wardrobe).await {
                warn!("Mutation hook failed for {:?}: {}", event, e);
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Category;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<(WardrobeEvent, usize)>>);

    #[async_trait]
    impl MutationHook for Recorder {
        async fn on_mutation(&self, event: &WardrobeEvent, wardrobe: &Wardrobe) -> WardrobeResult<()> {
            self.0.lock().unwrap().push((event.clone(), wardrobe.len()));
            Ok(())
        }
    }

    fn item(id: &str) -> ClothingItem {
        ClothingItem {
            id: ItemId::from(id),
            image_url: String::new(),
            category: Category::Top,
            description: String::new(),
            tags: vec![],
            color: String::new(),
            seasons: vec![],
            created_at: 0,
        }
    }

    #[tokio::test]
    async fn test_hook_sees_state_after_mutation() {
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let mut ctx = WardrobeContext::new(Wardrobe::new()).with_hook(recorder.clone());

        ctx.add(item("a")).await.unwrap();
        ctx.add(item("b")).await.unwrap();
        ctx.remove(&ItemId::from("a")).await.unwrap();
        ctx.remove(&ItemId::from("missing")).await.unwrap();

        let events = recorder.0.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                (WardrobeEvent::Added(ItemId::from("a")), 1),
                (WardrobeEvent::Added(ItemId::from("b")), 2),
                (WardrobeEvent::Removed(ItemId::from("a")), 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected_without_hook_call() {
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let mut ctx = WardrobeContext::new(Wardrobe::new()).with_hook(recorder.clone());

        ctx.add(item("a")).await.unwrap();
        assert!(ctx.add(item("a")).await.is_err());
        assert_eq!(recorder.0.lock().unwrap().len(), 1);
        assert_eq!(ctx.wardrobe().len(), 1);
    }
}
