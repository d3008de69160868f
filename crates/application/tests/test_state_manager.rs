use application::WardrobeContext;
use async_trait::async_trait;
use common::{StorageError, WardrobeError};
use domain::{Category, ClothingItem, ItemId};
use infrastructure::storage::WARDROBE_KEY;
use infrastructure::{FileStore, KeyValueStore, WardrobeRepository};
use std::sync::Arc;
use tempfile::TempDir;

fn item(id: &str, category: Category) -> ClothingItem {
    ClothingItem {
        id: ItemId::from(id),
        image_url: "data:image/jpeg;base64,AAAA".to_string(),
        category,
        description: format!("Вещь {id}"),
        tags: vec!["база".to_string()],
        color: "Серый".to_string(),
        seasons: vec!["all".to_string()],
        created_at: 1,
    }
}

fn repo(dir: &TempDir) -> WardrobeRepository {
    WardrobeRepository::new(Arc::new(FileStore::new(dir.path())))
}

/// Хранилище, в которое нельзя записать
struct ReadOnlyStore;

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }
}

#[tokio::test]
async fn test_every_mutation_is_persisted() {
    let dir = TempDir::new().unwrap();

    let mut ctx = WardrobeContext::hydrate(repo(&dir)).await;
    assert!(ctx.wardrobe().is_empty());

    ctx.add(item("t1", Category::Top)).await.unwrap();
    ctx.add(item("b1", Category::Bottom)).await.unwrap();
    assert_eq!(WardrobeContext::hydrate(repo(&dir)).await.wardrobe().len(), 2);

    ctx.remove(&ItemId::from("t1")).await.unwrap();
    let restarted = WardrobeContext::hydrate(repo(&dir)).await;
    let ids: Vec<&str> = restarted.wardrobe().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["b1"]);
}

#[tokio::test]
async fn test_removing_last_item_persists_empty_wardrobe() {
    let dir = TempDir::new().unwrap();
    let mut ctx = WardrobeContext::hydrate(repo(&dir)).await;
    ctx.add(item("only", Category::Shoes)).await.unwrap();

    ctx.remove(&ItemId::from("only")).await.unwrap();

    let stored = std::fs::read_to_string(dir.path().join(format!("{WARDROBE_KEY}.json"))).unwrap();
    assert_eq!(stored, "[]");
    assert!(WardrobeContext::hydrate(repo(&dir)).await.wardrobe().is_empty());
}

#[tokio::test]
async fn test_hydrate_restores_newest_first_order() {
    let dir = TempDir::new().unwrap();
    {
        let mut ctx = WardrobeContext::hydrate(repo(&dir)).await;
        for id in ["first", "second", "third"] {
            ctx.add(item(id, Category::Accessory)).await.unwrap();
        }
    }

    let ctx = WardrobeContext::hydrate(repo(&dir)).await;
    assert_eq!(ctx.wardrobe().items()[0].id.as_str(), "third");
    assert_eq!(ctx.wardrobe().items()[2].id.as_str(), "first");
}

#[tokio::test]
async fn test_malformed_payload_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    store.set(WARDROBE_KEY, "definitely not json").await.unwrap();

    let mut ctx = WardrobeContext::hydrate(repo(&dir)).await;
    assert!(ctx.wardrobe().is_empty());

    // первая же мутация перезаписывает битые данные
    ctx.add(item("x", Category::Shoes)).await.unwrap();
    assert_eq!(WardrobeContext::hydrate(repo(&dir)).await.wardrobe().len(), 1);
}

#[tokio::test]
async fn test_storage_failure_is_reported_not_fatal() {
    let mut ctx =
        WardrobeContext::hydrate(WardrobeRepository::new(Arc::new(ReadOnlyStore))).await;

    let err = ctx.add(item("x", Category::Top)).await.unwrap_err();
    assert!(matches!(err, WardrobeError::Storage(_)));
    assert_eq!(ctx.wardrobe().len(), 1);
}

#[tokio::test]
async fn test_removing_unknown_id_is_noop() {
    let mut ctx =
        WardrobeContext::hydrate(WardrobeRepository::new(Arc::new(ReadOnlyStore))).await;
    // без мутации нет записи, значит нет и ошибки хранилища
    assert!(ctx.remove(&ItemId::from("ghost")).await.unwrap().is_none());
}
