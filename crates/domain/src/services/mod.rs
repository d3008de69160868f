pub mod matcher;
pub mod outfit_check;

pub use matcher::{Carousel, Matcher};
pub use outfit_check::OutfitCheck;
