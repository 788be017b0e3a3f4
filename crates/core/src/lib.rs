//! Portfolio page core: content, scroll-spy, section views, and HTML output.

pub mod html;
pub mod layout;
pub mod model;
pub mod reveal;
pub mod scroll_spy;
pub mod views;

pub use layout::{MeasuredLayout, SectionLayout};
pub use model::{ContentError, Portfolio};
pub use reveal::RevealSet;
pub use scroll_spy::{NAV_BAR_BIAS, ScrollSpy, compute_active_section};
