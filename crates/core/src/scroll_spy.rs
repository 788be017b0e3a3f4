//! Scroll-spy: decides which section the navigation bar highlights.

use folio_protocol::SectionId;
use tracing::debug;

use crate::layout::SectionLayout;

/// Height compensation for the fixed navigation bar, in CSS pixels.
///
/// A section counts as entered once its top edge is this close to the top of
/// the viewport.
pub const NAV_BAR_BIAS: f64 = 100.0;

/// Return the first section, in display order, whose `[top, top + height)`
/// range contains `scroll_offset + bias`.
///
/// Unmeasured sections are skipped. `None` means no section matched; callers
/// keep whatever was active before.
pub fn compute_active_section_with_bias(
    scroll_offset: f64,
    bias: f64,
    layout: &impl SectionLayout,
) -> Option<SectionId> {
    let position = scroll_offset + bias;
    SectionId::ALL.into_iter().find(|&id| {
        layout
            .bounds(id)
            .is_some_and(|bounds| bounds.contains(position))
    })
}

/// [`compute_active_section_with_bias`] with the standard [`NAV_BAR_BIAS`].
pub fn compute_active_section(scroll_offset: f64, layout: &impl SectionLayout) -> Option<SectionId> {
    compute_active_section_with_bias(scroll_offset, NAV_BAR_BIAS, layout)
}

/// The page's single piece of scroll state.
///
/// Starts on [`SectionId::Home`] and only moves when a scroll event lands
/// inside a different section. Offsets that fall outside every measured
/// section leave the active section as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    active: SectionId,
    bias: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::with_bias(NAV_BAR_BIAS)
    }

    pub fn with_bias(bias: f64) -> Self {
        Self {
            active: SectionId::Home,
            bias,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Handle one scroll event.
    ///
    /// Returns `Some(section)` when the active section changed, at most once
    /// per call, and `None` when it stayed the same.
    pub fn on_scroll(&mut self, scroll_offset: f64, layout: &impl SectionLayout) -> Option<SectionId> {
        let computed = compute_active_section_with_bias(scroll_offset, self.bias, layout)?;
        if computed == self.active {
            return None;
        }
        debug!(from = %self.active, to = %computed, scroll_offset, "active section changed");
        self.active = computed;
        Some(computed)
    }
}
