use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Внешние вызовы, во время которых крутится спиннер
#[derive(Debug, Clone, Copy)]
pub enum ProgressType {
    /// Классификация фото
    Analyze,
    /// Подбор образа
    Recommend,
    /// Геопозиция и погода
    Weather,
}

#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub spinner_chars: &'static str,
    pub tick_interval: Duration,
    pub color: &'static str,
}

impl ProgressType {
    pub fn config(self) -> ProgressConfig {
        match self {
            ProgressType::Analyze => ProgressConfig {
                spinner_chars: "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏",
                tick_interval: Duration::from_millis(80),
                color: "cyan",
            },
            ProgressType::Recommend => ProgressConfig {
                spinner_chars: "⠋⠙⠚⠞⠖⠦⠴⠲⠳⠓",
                tick_interval: Duration::from_millis(120),
                color: "magenta",
            },
            ProgressType::Weather => ProgressConfig {
                spinner_chars: "⠋⠙⠚⠒⠂⠂⠒⠲⠴⠦⠖⠒⠐⠐⠒⠓⠋",
                tick_interval: Duration::from_millis(150),
                color: "yellow",
            },
        }
    }

    /// Спиннер рисуется в stderr и скрывается, если это не терминал
    pub fn create_spinner(self, message: &str) -> Spinner {
        let config = self.config();
        let bar = ProgressBar::new_spinner();
        let template = format!("{{spinner:.{}}} {{msg}}", config.color);

        let style = ProgressStyle::default_spinner()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(config.spinner_chars);
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(config.tick_interval);

        Spinner { bar }
    }
}

pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
