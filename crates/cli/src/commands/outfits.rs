use crate::session::Session;
use crate::util::{item_line, print_info};
use anyhow::Result;
use clap::Args;
use colored::*;

#[derive(Debug, Args)]
pub struct OutfitsCommand {
    /// Показать не больше N образов
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

impl OutfitsCommand {
    pub async fn execute(self, session: &Session) -> Result<()> {
        let book = session.outfit_book().await;
        let wardrobe = session.context.wardrobe();

        if book.outfits().is_empty() {
            print_info("Сохранённых образов пока нет. Соберите пару в `wardrobe match`.");
            return Ok(());
        }

        for resolved in book.resolved(wardrobe).into_iter().take(self.limit) {
            let saved = chrono::DateTime::from_timestamp_millis(resolved.outfit.created_at)
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            println!("{} {}", resolved.outfit.id.to_string().dimmed(), saved);

            if resolved.items.is_empty() {
                println!("  {}", "вещи образа удалены".dimmed());
            }
            for item in resolved.items {
                println!("  {}", item_line(item));
            }
        }
        Ok(())
    }
}
