use crate::progress::ProgressType;
use crate::session::Session;
use crate::util::print_success;
use anyhow::Result;
use application::AssistantView;
use clap::Args;
use domain::{Coordinates, WeatherCondition, WeatherState};
use infrastructure::{FixedLocation, LocationProvider};
use std::sync::Arc;

/// Источник погоды: ручной ввод или геопозиция
#[derive(Debug, Clone, Args)]
pub struct WeatherArgs {
    /// Определить погоду по местоположению
    #[arg(long, conflicts_with_all = ["location", "temperature", "condition"])]
    pub locate: bool,

    /// Город или место
    #[arg(long)]
    pub location: Option<String>,

    /// Температура, °C
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: Option<i32>,

    /// Ясно, Облачно, Дождь, Снег, Ветрено
    #[arg(long, value_parser = parse_condition)]
    pub condition: Option<String>,

    /// Широта для определения погоды (вместе с --longitude)
    #[arg(
        long,
        requires = "longitude",
        allow_hyphen_values = true,
        conflicts_with_all = ["location", "temperature", "condition"]
    )]
    pub latitude: Option<f64>,

    /// Долгота для определения погоды (вместе с --latitude)
    #[arg(
        long,
        requires = "latitude",
        allow_hyphen_values = true,
        conflicts_with_all = ["location", "temperature", "condition"]
    )]
    pub longitude: Option<f64>,
}

impl WeatherArgs {
    fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    fn wants_lookup(&self) -> bool {
        self.locate || self.coordinates().is_some()
    }

    /// Заполнить погоду ассистента. Ошибка поиска оставляет прежнее состояние.
    pub async fn apply(&self, session: &Session, view: &mut AssistantView) -> Result<()> {
        if self.wants_lookup() {
            let location: Arc<dyn LocationProvider> = match self.coordinates() {
                Some(coords) => Arc::new(FixedLocation(coords)),
                None => session.location(),
            };
            let weather = session.weather()?;

            let spinner = ProgressType::Weather.create_spinner("Определяю погоду...");
            let located = view
                .locate(location.as_ref(), &weather)
                .await
                .map(|_| ());
            spinner.finish_and_clear();
            located?;
            return Ok(());
        }

        if self.location.is_some() || self.temperature.is_some() || self.condition.is_some() {
            let defaults = WeatherState::default();
            view.set_manual(
                self.location.clone().unwrap_or(defaults.location),
                self.temperature.unwrap_or(defaults.temperature),
                self.condition.clone().unwrap_or(defaults.condition),
            );
        }
        Ok(())
    }
}

/// Подпись из ручного списка; принимает и английские названия
pub fn parse_condition(value: &str) -> Result<String, String> {
    let wanted = value.trim().to_lowercase();
    WeatherCondition::MANUAL_CHOICES
        .iter()
        .find(|c| {
            c.label().to_lowercase() == wanted || format!("{c:?}").to_lowercase() == wanted
        })
        .map(|c| c.label().to_string())
        .ok_or_else(|| {
            let choices = WeatherCondition::MANUAL_CHOICES
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", ");
            format!("неизвестная погода '{value}', варианты: {choices}")
        })
}

#[derive(Debug, Args)]
pub struct WeatherCommand {
    #[command(flatten)]
    pub weather: WeatherArgs,
}

impl WeatherCommand {
    pub async fn execute(self, session: &Session) -> Result<()> {
        let mut view = AssistantView::default();
        self.weather.apply(session, &mut view).await?;
        print_success(&view.weather().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct WeatherCli {
        #[command(flatten)]
        weather: WeatherArgs,
    }

    #[test]
    fn test_coordinates_and_manual_fields_are_exclusive() {
        let args = ["wardrobe", "--latitude", "1", "--longitude", "2", "--temperature", "5"];
        assert!(WeatherCli::try_parse_from(args).is_err());

        let args = ["wardrobe", "--longitude", "2", "--latitude", "1", "--condition", "rain"];
        assert!(WeatherCli::try_parse_from(args).is_err());

        let parsed = WeatherCli::try_parse_from(["wardrobe", "--latitude", "-33.9", "--longitude", "18.4"])
            .unwrap();
        assert!(parsed.weather.wants_lookup());

        let parsed = WeatherCli::try_parse_from(["wardrobe", "--temperature", "-5"]).unwrap();
        assert!(!parsed.weather.wants_lookup());
    }

    #[test]
    fn test_parse_condition_accepts_labels_and_names() {
        assert_eq!(parse_condition("дождь").unwrap(), "Дождь");
        assert_eq!(parse_condition("Snow").unwrap(), "Снег");
        assert_eq!(parse_condition(" windy ").unwrap(), "Ветрено");
        assert!(parse_condition("Гроза").is_err());
    }
}
