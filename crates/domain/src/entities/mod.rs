pub mod ai_records;
pub mod clothing_item;
pub mod item_id;
pub mod recommendation;
pub mod wardrobe;

pub use ai_records::{ClothingAnalysis, OutfitSuggestion};
pub use clothing_item::ClothingItem;
pub use item_id::ItemId;
pub use recommendation::{Recommendation, SavedOutfit};
pub use wardrobe::Wardrobe;
