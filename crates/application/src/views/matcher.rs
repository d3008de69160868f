use crate::outfits::OutfitBook;
use common::WardrobeResult;
use domain::{DomainError, Matcher, SavedOutfit, Wardrobe};
use rand::Rng;

/// Экран подборщика: либо карусели, либо сообщение о нехватке вещей
#[derive(Debug, Clone)]
pub enum MatcherScreen {
    Ready(Matcher),
    NotEnough { tops: usize, bottoms: usize },
}

impl MatcherScreen {
    pub fn from_wardrobe(wardrobe: &Wardrobe) -> Self {
        match Matcher::from_wardrobe(wardrobe) {
            Ok(matcher) => MatcherScreen::Ready(matcher),
            Err(DomainError::InsufficientItems { tops, bottoms }) => {
                MatcherScreen::NotEnough { tops, bottoms }
            }
            Err(_) => MatcherScreen::NotEnough {
                tops: wardrobe.tops().len(),
                bottoms: wardrobe.bottoms().len(),
            },
        }
    }

    pub fn matcher_mut(&mut self) -> Option<&mut Matcher> {
        match self {
            MatcherScreen::Ready(matcher) => Some(matcher),
            MatcherScreen::NotEnough { .. } => None,
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(matcher) = self.matcher_mut() {
            matcher.randomize(rng);
        }
    }
}

/// Сохранить показанную пару верх+низ
pub async fn save_current<'a>(
    matcher: &Matcher,
    outfits: &'a mut OutfitBook,
) -> WardrobeResult<&'a SavedOutfit> {
    outfits.save(matcher.current_ids()).await
}
