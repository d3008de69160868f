pub mod add;
pub mod catalog;
pub mod config;
pub mod matcher;
pub mod outfits;
pub mod suggest;
pub mod weather;

pub use add::AddCommand;
pub use catalog::{DeleteCommand, ListCommand, ShowCommand};
pub use config::ConfigCommand;
pub use matcher::MatchCommand;
pub use outfits::OutfitsCommand;
pub use suggest::SuggestCommand;
pub use weather::WeatherCommand;
