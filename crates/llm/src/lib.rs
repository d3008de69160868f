//! AI Gateway гардероба поверх Gemini `generateContent`.

pub mod image;
pub mod prompts;
pub mod providers;
pub mod wardrobe_ai;

pub use image::ImagePayload;
pub use providers::{GooglePart, GoogleProvider};
pub use wardrobe_ai::{GeminiSettings, GeminiWardrobeAi, WardrobeAi};
