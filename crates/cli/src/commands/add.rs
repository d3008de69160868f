use crate::progress::ProgressType;
use crate::session::Session;
use crate::util::{confirm, print_analysis, print_info, print_success};
use anyhow::Result;
use application::CaptureFlow;
use clap::Args;
use llm::ImagePayload;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Фото вещи (png, jpg, jpeg, webp)
    pub photo: PathBuf,

    /// Сохранить без подтверждения
    #[arg(short, long)]
    pub yes: bool,
}

impl AddCommand {
    pub async fn execute(self, session: &mut Session) -> Result<()> {
        let mut flow = CaptureFlow::new();
        flow.select_image(ImagePayload::from_file(&self.photo).await?);

        let ai = session.ai()?;
        let spinner = ProgressType::Analyze.create_spinner("Анализирую фото...");
        let analyzed = flow.analyze(&ai).await.map(|_| ());
        spinner.finish_and_clear();
        analyzed?;

        if let Some(analysis) = flow.analysis() {
            println!("Распознано:");
            print_analysis(analysis);
        }

        if !self.yes && !confirm("Добавить в гардероб?") {
            flow.cancel();
            print_info("Отменено, гардероб не изменён.");
            return Ok(());
        }

        let item = flow.commit(&mut session.context).await?;
        print_success(&format!("Добавлено: {} ({})", item.description, item.id));
        Ok(())
    }
}
