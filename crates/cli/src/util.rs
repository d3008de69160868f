use colored::*;
use common::WardrobeError;
use console::Term;
use domain::{ClothingAnalysis, ClothingItem};

/// Сколько тегов показывать в строке каталога
pub const LIST_TAGS: usize = 3;

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Уведомление об ошибке идёт в stderr, stdout остаётся чистым
pub fn print_failure(error: &WardrobeError) {
    eprintln!("{} {}", "✗".red(), error.user_message());
}

pub fn item_line(item: &ClothingItem) -> String {
    let tags = item
        .display_tags(LIST_TAGS)
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{} {} {} · {} {}",
        item.id.to_string().dimmed(),
        format!("[{}]", item.category.label()).cyan(),
        item.description.bold(),
        item.color,
        tags.dimmed()
    )
}

pub fn print_analysis(analysis: &ClothingAnalysis) {
    println!("  {}: {}", "Категория".bold(), analysis.category.label());
    println!("  {}: {}", "Описание".bold(), analysis.description);
    println!("  {}: {}", "Цвет".bold(), analysis.color);
    println!("  {}: {}", "Теги".bold(), analysis.tags.join(", "));
    println!("  {}: {}", "Сезоны".bold(), analysis.seasons.join(", "));
}

/// Вопрос да/нет. Без терминала ответ всегда "нет".
pub fn confirm(prompt: &str) -> bool {
    let term = Term::stdout();
    if !term.is_term() {
        return false;
    }
    print!("{} {} [y/N] ", "?".yellow(), prompt);
    let _ = std::io::Write::flush(&mut std::io::stdout());
    match term.read_line() {
        Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "д" | "да"),
        Err(_) => false,
    }
}
