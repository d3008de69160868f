pub mod assistant;
pub mod capture;
pub mod catalog;
pub mod matcher;

pub use assistant::AssistantView;
pub use capture::{CaptureFlow, CaptureState};
pub use catalog::{CatalogView, EMPTY_CATEGORY_MESSAGE};
pub use matcher::{save_current, MatcherScreen};
