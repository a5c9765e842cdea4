//! Ordered pool of source image references

use rand::Rng;
use rand::seq::SliceRandom;

/// Source images in consumption order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePool<T> {
    items: Vec<T>,
}

/// Slots of a pool stretched or cut to an exact length
///
/// `None` slots are blank cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittedPool<T> {
    /// One entry per cell
    pub slots: Vec<Option<T>>,
    /// Images available before fitting
    pub available: usize,
}

impl<T> FittedPool<T> {
    /// Number of blank slots added
    pub fn padded(&self) -> usize {
        self.slots.len().saturating_sub(self.available)
    }

    /// Number of images cut off the end
    pub fn truncated(&self) -> usize {
        self.available.saturating_sub(self.slots.len())
    }

    /// Reorder the slots, blanks included, uniformly at random
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.slots.shuffle(rng);
    }
}

impl<T> ImagePool<T> {
    /// Create a pool preserving the given order
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of images
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool holds no images
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Images in consumption order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Reorder the pool uniformly at random
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }

    /// Keep only the first `count` images
    pub fn truncate(&mut self, count: usize) {
        self.items.truncate(count);
    }

    /// Split into the first `large` images and the remainder
    pub fn split_large(mut self, large: usize) -> (Vec<T>, Vec<T>) {
        let small = self.items.split_off(large.min(self.items.len()));
        (self.items, small)
    }

    /// Pad with blanks or truncate to exactly `count` slots
    pub fn fit_to(self, count: usize) -> FittedPool<T> {
        let available = self.items.len();
        let mut slots: Vec<Option<T>> = self.items.into_iter().take(count).map(Some).collect();
        slots.resize_with(count, || None);
        FittedPool { slots, available }
    }
}

impl<T> FromIterator<T> for ImagePool<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
