pub mod google_provider;

pub use google_provider::{GooglePart, GoogleProvider, InlineData};
