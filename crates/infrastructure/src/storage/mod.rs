pub mod repository;
pub mod store;

pub use repository::{OutfitRepository, WardrobeRepository, OUTFITS_KEY, WARDROBE_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
