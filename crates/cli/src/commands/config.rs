use crate::util::{print_info, print_success};
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use colored::*;
use infrastructure::config::{require_api_key, ConfigSource, API_KEY_VAR};
use infrastructure::{AppConfig, ConfigLoader};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Записать файл настроек со значениями по умолчанию
    #[command(alias = "gen")]
    Init {
        #[arg(short, long, default_value = "wardrobe.toml")]
        output: PathBuf,

        /// Перезаписать существующий файл
        #[arg(short, long)]
        force: bool,
    },

    /// Показать итоговые настройки с учётом окружения
    Show,
}

impl ConfigCommand {
    pub async fn execute(self, config: &AppConfig, source: &ConfigSource) -> Result<()> {
        match self.command {
            ConfigSubcommand::Init { output, force } => init_config(&output, force).await,
            ConfigSubcommand::Show => show_config(config, source),
        }
    }
}

async fn init_config(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "Файл {} уже существует, используйте --force для перезаписи",
            output.display()
        );
    }
    ConfigLoader::save_config(&AppConfig::default(), output).await?;
    print_success(&format!("Настройки записаны в {}", output.display()));
    print_info(&format!("Ключ Gemini задаётся через {API_KEY_VAR} или файл .env"));
    Ok(())
}

fn show_config(config: &AppConfig, source: &ConfigSource) -> Result<()> {
    let origin = match source {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Default => "значения по умолчанию".to_string(),
    };
    println!("{} {}", "Источник:".bold(), origin);
    println!("{} {}", "Данные:".bold(), config.data_dir().display());

    let key_state = if require_api_key().is_ok() {
        "задан".green()
    } else {
        "не задан".red()
    };
    println!("{} {}", format!("{API_KEY_VAR}:").bold(), key_state);
    println!();
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
