//! Matcher - локальный подбор верх/низ без AI

use crate::entities::{ClothingItem, ItemId, Wardrobe};
use crate::errors::{DomainError, DomainResult};
use rand::Rng;

/// Циклический индекс по непустому набору
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> DomainResult<Self> {
        if len == 0 {
            return Err(DomainError::EmptyCarousel);
        }
        Ok(Self { len, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Всегда false: пустую карусель создать нельзя
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Равномерно случайная позиция
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        self.index = rng.gen_range(0..self.len);
        self.index
    }
}

/// Две независимые карусели: "верх" (TOP + OUTERWEAR) и "низ" (BOTTOM).
///
/// Создаётся только когда оба набора непусты, поэтому индексация всегда
/// попадает в границы.
#[derive(Debug, Clone)]
pub struct Matcher {
    tops: Vec<ClothingItem>,
    bottoms: Vec<ClothingItem>,
    top: Carousel,
    bottom: Carousel,
}

impl Matcher {
    pub fn from_wardrobe(wardrobe: &Wardrobe) -> DomainResult<Self> {
        let tops = wardrobe.tops();
        let bottoms = wardrobe.bottoms();

        if tops.is_empty() || bottoms.is_empty() {
            return Err(DomainError::InsufficientItems {
                tops: tops.len(),
                bottoms: bottoms.len(),
            });
        }

        let top = Carousel::new(tops.len())?;
        let bottom = Carousel::new(bottoms.len())?;
        Ok(Self {
            tops,
            bottoms,
            top,
            bottom,
        })
    }

    pub fn current_top(&self) -> &ClothingItem {
        &self.tops[self.top.index()]
    }

    pub fn current_bottom(&self) -> &ClothingItem {
        &self.bottoms[self.bottom.index()]
    }

    pub fn top_position(&self) -> (usize, usize) {
        (self.top.index() + 1, self.top.len())
    }

    pub fn bottom_position(&self) -> (usize, usize) {
        (self.bottom.index() + 1, self.bottom.len())
    }

    pub fn next_top(&mut self) {
        self.top.next();
    }

    pub fn previous_top(&mut self) {
        self.top.previous();
    }

    pub fn next_bottom(&mut self) {
        self.bottom.next();
    }

    pub fn previous_bottom(&mut self) {
        self.bottom.previous();
    }

    /// Случайная позиция в каждой карусели независимо
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.top.randomize(rng);
        self.bottom.randomize(rng);
    }

    /// ID текущей пары (верх, низ)
    pub fn current_ids(&self) -> Vec<ItemId> {
        vec![self.current_top().id.clone(), self.current_bottom().id.clone()]
    }
}
