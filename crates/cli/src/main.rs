use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use common::{init_structured_logging, LoggingConfig, WardrobeError};
use infrastructure::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

mod commands;
mod progress;
mod session;
mod util;

use commands::{
    AddCommand, ConfigCommand, DeleteCommand, ListCommand, MatchCommand, OutfitsCommand,
    ShowCommand, SuggestCommand, WeatherCommand,
};
use session::Session;

#[derive(Parser)]
#[command(name = "wardrobe")]
#[command(about = "Гардероб: каталог вещей по фото и подбор образов под погоду")]
#[command(version)]
struct Cli {
    /// Файл настроек (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Логи в JSON (stderr)
    #[arg(long, global = true)]
    json_logs: bool,

    /// Подробные логи
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Каталог вещей с фильтром по категории
    #[command(alias = "ls")]
    List(ListCommand),
    /// Подробности о вещи
    Show(ShowCommand),
    /// Добавить вещь по фото (классификация через Gemini)
    Add(AddCommand),
    /// Удалить вещь
    #[command(alias = "rm")]
    Delete(DeleteCommand),
    /// Подбор пары верх + низ
    Match(MatchCommand),
    /// AI-стилист: образ под погоду
    Suggest(SuggestCommand),
    /// Текущая погода (вручную или по местоположению)
    Weather(WeatherCommand),
    /// Сохранённые образы
    Outfits(OutfitsCommand),
    /// Настройки
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let loader = match cli.config {
        Some(path) => ConfigLoader::new().with_path(path),
        None => ConfigLoader::new(),
    };
    let (config, source) = loader.load().await;

    let logging = LoggingConfig::from_level_str(
        &config.logging.level,
        cli.json_logs || config.logging.json,
    )
    .verbose(cli.verbose);
    init_structured_logging(logging)?;
    debug!("Configuration source: {:?}", source);

    ConfigValidator::new()
        .validate(&config)
        .map_err(WardrobeError::from)?;

    if let Commands::Config(cmd) = cli.command {
        return cmd.execute(&config, &source).await;
    }

    let mut session = Session::open(config).await;
    match cli.command {
        Commands::List(cmd) => cmd.execute(&session).await,
        Commands::Show(cmd) => cmd.execute(&session).await,
        Commands::Add(cmd) => cmd.execute(&mut session).await,
        Commands::Delete(cmd) => cmd.execute(&mut session).await,
        Commands::Match(cmd) => cmd.execute(&session).await,
        Commands::Suggest(cmd) => cmd.execute(&session).await,
        Commands::Weather(cmd) => cmd.execute(&session).await,
        Commands::Outfits(cmd) => cmd.execute(&session).await,
        Commands::Config(_) => Ok(()),
    }
}

/// Ошибки приложения показываются текстом уведомления, остальные как есть
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<WardrobeError>() {
        Some(e) => {
            error!("{}", e);
            util::print_failure(e);
        }
        None => {
            error!("{:#}", err);
            eprintln!("{} {:#}", "✗".red(), err);
        }
    }
}
