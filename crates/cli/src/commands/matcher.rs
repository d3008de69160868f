use crate::session::Session;
use crate::util::{item_line, print_failure, print_success};
use anyhow::Result;
use application::{save_current, MatcherScreen, OutfitBook};
use clap::Args;
use colored::*;
use common::WardrobeError;
use console::{Key, Term};
use domain::{DomainError, Matcher};
use tracing::warn;

#[derive(Debug, Args)]
pub struct MatchCommand {
    /// Начать со случайной пары
    #[arg(long)]
    pub shuffle: bool,

    /// Сохранить показанную пару и выйти
    #[arg(long)]
    pub save: bool,
}

enum Action {
    Redraw,
    Save,
    Quit,
    Ignore,
}

impl MatchCommand {
    pub async fn execute(self, session: &Session) -> Result<()> {
        let mut screen = MatcherScreen::from_wardrobe(session.context.wardrobe());
        if let MatcherScreen::NotEnough { tops, bottoms } = &screen {
            let error = DomainError::InsufficientItems {
                tops: *tops,
                bottoms: *bottoms,
            };
            return Err(WardrobeError::from(error).into());
        }

        let mut rng = rand::thread_rng();
        if self.shuffle {
            screen.shuffle(&mut rng);
        }
        let Some(matcher) = screen.matcher_mut() else {
            return Ok(());
        };

        let term = Term::stdout();
        if self.save || !term.is_term() {
            render(matcher);
            if self.save {
                let mut book = session.outfit_book().await;
                save_current(matcher, &mut book).await?;
                print_success("Образ сохранён");
            }
            return Ok(());
        }

        let mut book = session.outfit_book().await;
        render(matcher);
        print_keys();
        loop {
            let key = term.read_key()?;
            match handle_key(matcher, &key, &mut rng) {
                Action::Redraw => render(matcher),
                Action::Save => {
                    save_and_report(matcher, &mut book).await;
                }
                Action::Quit => break,
                Action::Ignore => {}
            }
        }
        Ok(())
    }
}

/// Ошибка записи показывается пользователю, карусель продолжает работать
async fn save_and_report(matcher: &Matcher, book: &mut OutfitBook) -> bool {
    match save_current(matcher, book).await {
        Ok(_) => {
            print_success("Образ сохранён");
            true
        }
        Err(e) => {
            warn!("Outfit was not saved: {}", e);
            print_failure(&e);
            false
        }
    }
}

fn handle_key<R: rand::Rng + ?Sized>(matcher: &mut Matcher, key: &Key, rng: &mut R) -> Action {
    match key {
        Key::ArrowLeft | Key::Char('a') => matcher.previous_top(),
        Key::ArrowRight | Key::Char('d') => matcher.next_top(),
        Key::ArrowUp | Key::Char('w') => matcher.previous_bottom(),
        Key::ArrowDown | Key::Char('x') => matcher.next_bottom(),
        Key::Char('r') => matcher.randomize(rng),
        Key::Char('s') | Key::Enter => return Action::Save,
        Key::Char('q') | Key::Escape => return Action::Quit,
        _ => return Action::Ignore,
    }
    Action::Redraw
}

fn render(matcher: &Matcher) {
    let (top, tops) = matcher.top_position();
    let (bottom, bottoms) = matcher.bottom_position();
    println!();
    println!("{} {top}/{tops}  {}", "Верх".bold(), item_line(matcher.current_top()));
    println!("{} {bottom}/{bottoms}  {}", "Низ ".bold(), item_line(matcher.current_bottom()));
}

fn print_keys() {
    println!(
        "{}",
        "←/→ верх  ↑/↓ низ  r случайно  s сохранить  q выход".dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Category, ClothingItem, ItemId, Wardrobe};
    use infrastructure::{FileStore, OutfitRepository};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn item(id: &str, category: Category) -> ClothingItem {
        ClothingItem {
            id: ItemId::from(id),
            image_url: String::new(),
            category,
            description: id.to_string(),
            tags: vec![],
            color: String::new(),
            seasons: vec![],
            created_at: 0,
        }
    }

    fn matcher() -> Matcher {
        let wardrobe = Wardrobe::from_items(vec![
            item("t1", Category::Top),
            item("t2", Category::Outerwear),
            item("b1", Category::Bottom),
        ]);
        Matcher::from_wardrobe(&wardrobe).unwrap()
    }

    #[test]
    fn test_arrow_keys_move_carousels() {
        let mut m = matcher();
        let mut rng = StdRng::seed_from_u64(7);

        assert!(matches!(handle_key(&mut m, &Key::ArrowRight, &mut rng), Action::Redraw));
        assert_eq!(m.current_top().id.as_str(), "t2");

        handle_key(&mut m, &Key::Char('d'), &mut rng);
        assert_eq!(m.current_top().id.as_str(), "t1");

        handle_key(&mut m, &Key::ArrowDown, &mut rng);
        assert_eq!(m.current_bottom().id.as_str(), "b1");
    }

    #[test]
    fn test_save_and_quit_keys() {
        let mut m = matcher();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(handle_key(&mut m, &Key::Char('s'), &mut rng), Action::Save));
        assert!(matches!(handle_key(&mut m, &Key::Char('q'), &mut rng), Action::Quit));
        assert!(matches!(handle_key(&mut m, &Key::Char('?'), &mut rng), Action::Ignore));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_carousel_running() {
        let dir = TempDir::new().unwrap();
        // Каталог данных занят обычным файлом: запись невозможна
        let blocked = dir.path().join("data");
        std::fs::write(&blocked, "").unwrap();
        let mut book = OutfitBook::load(OutfitRepository::new(Arc::new(FileStore::new(&blocked)))).await;

        let mut m = matcher();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(!save_and_report(&m, &mut book).await);

        assert!(matches!(handle_key(&mut m, &Key::ArrowRight, &mut rng), Action::Redraw));
        assert_eq!(m.current_top().id.as_str(), "t2");
        assert!(!save_and_report(&m, &mut book).await);
    }

    #[tokio::test]
    async fn test_save_writes_current_pair() {
        let dir = TempDir::new().unwrap();
        let mut book = OutfitBook::load(OutfitRepository::new(Arc::new(FileStore::new(dir.path())))).await;

        let m = matcher();
        assert!(save_and_report(&m, &mut book).await);
        assert_eq!(book.outfits().len(), 1);
        assert_eq!(book.outfits()[0].item_ids, vec![ItemId::from("t1"), ItemId::from("b1")]);
    }
}
