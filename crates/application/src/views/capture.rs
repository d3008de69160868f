//! Добавление вещи: фото → классификация → подтверждение → запись.
//!
//! Метаданные от модели не редактируются, пользователь только подтверждает
//! или отменяет. Сбой классификации оставляет выбранное фото для повтора.

use crate::context::WardrobeContext;
use common::{WardrobeError, WardrobeResult};
use domain::{now_millis, ClothingAnalysis, ClothingItem};
use llm::{ImagePayload, WardrobeAi};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CaptureState {
    #[default]
    Empty,
    /// Фото выбрано, анализа ещё нет (или он не удался)
    Selected(ImagePayload),
    /// Анализ готов, ждём подтверждения
    Review {
        image: ImagePayload,
        analysis: ClothingAnalysis,
    },
}

#[derive(Debug, Default)]
pub struct CaptureFlow {
    state: CaptureState,
}

impl CaptureFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    /// Новое фото сбрасывает прежний анализ
    pub fn select_image(&mut self, image: ImagePayload) {
        self.state = CaptureState::Selected(image);
    }

    pub fn analysis(&self) -> Option<&ClothingAnalysis> {
        match &self.state {
            CaptureState::Review { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    pub async fn analyze(&mut self, ai: &dyn WardrobeAi) -> WardrobeResult<&ClothingAnalysis> {
        let image = match &self.state {
            CaptureState::Selected(image) | CaptureState::Review { image, .. } => image.clone(),
            CaptureState::Empty => {
                return Err(WardrobeError::Image("no photo selected".to_string()));
            }
        };

        match ai.analyze_image(&image).await {
            Ok(analysis) => {
                info!("Photo classified as {}", analysis.category);
                self.state = CaptureState::Review { image, analysis };
                self.analysis()
                    .ok_or_else(|| WardrobeError::Image("analysis was not stored".to_string()))
            }
            Err(e) => {
                warn!("Classification failed: {}", e);
                self.state = CaptureState::Selected(image);
                Err(e)
            }
        }
    }

    /// Создать вещь из подтверждённого анализа и добавить в гардероб
    pub async fn commit(&mut self, context: &mut WardrobeContext) -> WardrobeResult<ClothingItem> {
        if !matches!(self.state, CaptureState::Review { .. }) {
            return Err(WardrobeError::Image("nothing to commit".to_string()));
        }
        let CaptureState::Review { image, analysis } = std::mem::take(&mut self.state) else {
            return Err(WardrobeError::Image("nothing to commit".to_string()));
        };

        let item = ClothingItem::from_analysis(image.to_data_url(), analysis, now_millis());
        context.add(item.clone()).await?;
        info!("Added item {} ({})", item.id, item.category);
        Ok(item)
    }

    pub fn cancel(&mut self) {
        self.state = CaptureState::Empty;
    }
}
