use std::path::PathBuf;

/// Каталог данных: `$WARDROBE_HOME` или `~/.wardrobe`
pub fn wardrobe_home() -> PathBuf {
    if let Ok(custom) = std::env::var("WARDROBE_HOME") {
        if !custom.trim().is_empty() {
            return PathBuf::from(custom);
        }
    }
    let mut dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push(".wardrobe");
    dir
}
