use crate::session::Session;
use crate::util::{item_line, print_info, print_success};
use anyhow::Result;
use application::CatalogView;
use clap::Args;
use colored::*;
use common::WardrobeError;
use domain::{CategoryFilter, DomainError, ItemId};

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Категория: all, top, bottom, shoes, outerwear, accessory
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,

    /// Вывести вещи в JSON (без изображений)
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub async fn execute(self, session: &Session) -> Result<()> {
        let view = CatalogView::new(self.category);
        let wardrobe = session.context.wardrobe();

        if self.json {
            let items: Vec<_> = view
                .visible(wardrobe)
                .into_iter()
                .map(|item| {
                    serde_json::json!({
                        "id": item.id,
                        "category": item.category,
                        "description": item.description,
                        "tags": item.tags,
                        "color": item.color,
                        "seasons": item.seasons,
                        "createdAt": item.created_at,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
            return Ok(());
        }

        let tabs = view
            .tabs(wardrobe)
            .into_iter()
            .map(|(filter, count)| {
                let tab = format!("{} ({})", filter.label(), count);
                if filter == view.filter() {
                    tab.bold().underline().to_string()
                } else {
                    tab.dimmed().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("{tabs}");
        println!();

        if let Some(message) = view.empty_message(wardrobe) {
            print_info(message);
            return Ok(());
        }

        for item in view.visible(wardrobe) {
            println!("{}", item_line(item));
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// ID вещи из `wardrobe list`
    pub id: String,
}

impl DeleteCommand {
    pub async fn execute(self, session: &mut Session) -> Result<()> {
        let id = ItemId::from(self.id.trim());
        let removed = CatalogView::default()
            .delete(&mut session.context, &id)
            .await?;

        match removed {
            Some(item) => {
                print_success(&format!("Удалено: {}", item.description));
                Ok(())
            }
            None => Err(WardrobeError::from(DomainError::ItemNotFound(id.to_string())).into()),
        }
    }
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    pub id: String,
}

impl ShowCommand {
    pub async fn execute(self, session: &Session) -> Result<()> {
        let item = session
            .context
            .wardrobe()
            .find_str(self.id.trim())
            .ok_or_else(|| WardrobeError::from(DomainError::ItemNotFound(self.id.clone())))?;

        println!("{}", item.description.bold());
        println!("  {}: {}", "ID".bold(), item.id);
        println!("  {}: {}", "Категория".bold(), item.category.label());
        println!("  {}: {}", "Цвет".bold(), item.color);
        println!("  {}: {}", "Теги".bold(), item.tags.join(", "));
        println!("  {}: {}", "Сезоны".bold(), item.seasons.join(", "));
        if let Some(added) = chrono::DateTime::from_timestamp_millis(item.created_at) {
            println!("  {}: {}", "Добавлено".bold(), added.format("%Y-%m-%d %H:%M"));
        }
        Ok(())
    }
}
