//! One-shot entrance reveals.

use folio_protocol::SectionBounds;

/// Tracks which animated elements have already been shown.
///
/// An element is revealed the first time any part of it is inside the
/// viewport and never hidden again.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// Mark every element intersecting `[scroll, scroll + viewport_height)`
    /// and return the indices that were not revealed before.
    ///
    /// `bounds` yields one entry per element, in the same order as at
    /// construction; unmeasured elements are `None`. Extra entries are
    /// ignored.
    pub fn update<I>(&mut self, scroll: f64, viewport_height: f64, bounds: I) -> Vec<usize>
    where
        I: IntoIterator<Item = Option<SectionBounds>>,
    {
        let mut newly = Vec::new();
        for ((index, seen), bounds) in self.revealed.iter_mut().enumerate().zip(bounds) {
            if *seen {
                continue;
            }
            if bounds.is_some_and(|b| b.intersects(scroll, viewport_height)) {
                *seen = true;
                newly.push(index);
            }
        }
        newly
    }
}
