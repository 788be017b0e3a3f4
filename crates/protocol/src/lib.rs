pub mod blocks;
pub mod section;
pub mod theme;
pub mod types;

pub use blocks::{Block, ContactKind, LinkTarget, Reveal, RevealFrom, SectionView};
pub use section::{ParseSectionIdError, SectionId};
pub use theme::ThemeToken;
pub use types::{Color, SectionBounds};
