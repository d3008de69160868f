//! Application Layer гардероба
//!
//! - `WardrobeContext`: владелец гардероба, хуки мутаций (сохранение)
//! - `OutfitBook`: сохранённые образы
//! - `views`: контроллеры экранов Catalog, Capture, Matcher, Assistant

pub mod context;
pub mod outfits;
pub mod views;

pub use context::{MutationHook, PersistHook, WardrobeContext, WardrobeEvent};
pub use outfits::{OutfitBook, ResolvedOutfit};
pub use views::{save_current, AssistantView, CaptureFlow, CaptureState, CatalogView, MatcherScreen};
