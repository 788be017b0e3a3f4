//! Layout measurement seam between the scroll-spy and whatever renders the
//! page (the DOM, the terminal viewer, tests).

use folio_protocol::{SectionBounds, SectionId};

/// Source of section geometry, queried at scroll-event time.
///
/// `None` means the section is not currently mounted or measured.
pub trait SectionLayout {
    fn bounds(&self, id: SectionId) -> Option<SectionBounds>;
}

/// A fixed table of measurements, one slot per [`SectionId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasuredLayout {
    slots: [Option<SectionBounds>; 6],
}

impl MeasuredLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay sections end to end, starting at 0, with the given heights.
    /// Sections past the end of `heights` stay unmeasured.
    pub fn stacked(heights: &[(SectionId, f64)]) -> Self {
        let mut layout = Self::new();
        let mut top = 0.0;
        for &(id, height) in heights {
            layout.set(id, SectionBounds::new(top, height));
            top += height;
        }
        layout
    }

    pub fn set(&mut self, id: SectionId, bounds: SectionBounds) {
        self.slots[id.index()] = Some(bounds);
    }

    pub fn clear(&mut self, id: SectionId) {
        self.slots[id.index()] = None;
    }

    /// Total height of the measured sections' extent (bottom of the lowest one).
    pub fn document_height(&self) -> f64 {
        self.slots
            .iter()
            .flatten()
            .map(SectionBounds::bottom)
            .fold(0.0, f64::max)
    }
}

impl SectionLayout for MeasuredLayout {
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self.slots[id.index()]
    }
}

impl<F> SectionLayout for F
where
    F: Fn(SectionId) -> Option<SectionBounds>,
{
    fn bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_sections_are_contiguous() {
        let layout = MeasuredLayout::stacked(&[
            (SectionId::Home, 800.0),
            (SectionId::About, 600.0),
            (SectionId::Education, 500.0),
        ]);
        assert_eq!(
            layout.bounds(SectionId::About),
            Some(SectionBounds::new(800.0, 600.0))
        );
        assert_eq!(
            layout.bounds(SectionId::Education),
            Some(SectionBounds::new(1400.0, 500.0))
        );
        assert_eq!(layout.bounds(SectionId::Skills), None);
        assert_eq!(layout.document_height(), 1900.0);
    }

    #[test]
    fn closures_act_as_layouts() {
        let layout = |id: SectionId| {
            (id == SectionId::Contact).then(|| SectionBounds::new(10.0, 5.0))
        };
        assert!(layout.bounds(SectionId::Home).is_none());
        assert!(layout.bounds(SectionId::Contact).is_some());
    }
}
