use super::weather::WeatherArgs;
use crate::progress::ProgressType;
use crate::session::Session;
use crate::util::{item_line, print_info};
use anyhow::Result;
use application::AssistantView;
use clap::Args;
use colored::*;

#[derive(Debug, Args)]
pub struct SuggestCommand {
    #[command(flatten)]
    pub weather: WeatherArgs,
}

impl SuggestCommand {
    pub async fn execute(self, session: &Session) -> Result<()> {
        let mut view = AssistantView::default();
        self.weather.apply(session, &mut view).await?;
        println!("{} {}", "Погода:".bold(), view.weather());

        let ai = session.ai()?;
        let spinner = ProgressType::Recommend.create_spinner("Подбираю образ...");
        let recommended = view
            .recommend(&ai, session.context.wardrobe())
            .await
            .map(|_| ());
        spinner.finish_and_clear();
        recommended?;

        let Some(recommendation) = view.recommendation() else {
            return Ok(());
        };

        println!();
        println!("{}", "Рекомендация стилиста".bold().magenta());
        println!("{}", recommendation.reasoning);
        println!();

        if recommendation.is_empty() {
            print_info("Модель не выбрала ни одной вещи из гардероба.");
            return Ok(());
        }
        for item in &recommendation.items {
            println!("  {}", item_line(item));
        }
        Ok(())
    }
}
