use serde::{Deserialize, Serialize};

use crate::section::SectionId;
use crate::theme::ThemeToken;

/// A single, self-contained piece of section content.
///
/// The core emits a [`SectionView`] per section. Renderers walk its blocks in
/// order; each block carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A heading below the section title (level 3 or 4).
    Heading { level: u8, text: String },

    /// A paragraph of body text.
    Text { text: String, color: ThemeToken },

    /// A small pill label, e.g. a date range or fluency level.
    Badge { text: String },

    /// A label with a badge aligned to the right.
    KeyValue { key: String, value: String },

    /// A bulleted list.
    Bullets { items: Vec<String> },

    /// A labelled percentage bar.
    Progress { label: String, percent: u8 },

    /// A line of contact information with its icon.
    ContactLine { kind: ContactKind, text: String },

    /// A button-like link.
    Link { label: String, target: LinkTarget, primary: bool },

    /// A round portrait image.
    Avatar { src: String, alt: String, size: u32 },

    /// A visually grouped run of blocks, optionally animated in.
    Card { blocks: Vec<Block>, reveal: Option<Reveal> },

    /// Side-by-side columns; collapses to a single column on narrow screens.
    Columns { columns: Vec<Vec<Block>> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactKind {
    Phone,
    Email,
    Location,
    Grade,
}

impl ContactKind {
    /// Single-glyph icon used by text-only renderers.
    pub const fn glyph(self) -> &'static str {
        match self {
            ContactKind::Phone => "☎",
            ContactKind::Email => "✉",
            ContactKind::Location => "⌖",
            ContactKind::Grade => "★",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    /// Smooth-scrolls to a section of the same page.
    Section(SectionId),
    /// Leaves the page (`mailto:`, external profile).
    External(String),
}

/// Where an entrance animation starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealFrom {
    Below,
    Left,
    Right,
}

impl RevealFrom {
    pub const fn as_str(self) -> &'static str {
        match self {
            RevealFrom::Below => "below",
            RevealFrom::Left => "left",
            RevealFrom::Right => "right",
        }
    }
}

/// One-shot entrance animation, played the first time a block scrolls into
/// view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub from: RevealFrom,
    pub delay_ms: u32,
}

impl Reveal {
    pub const fn new(from: RevealFrom) -> Self {
        Self { from, delay_ms: 0 }
    }

    /// Staggered variant for the `index`-th item of a list. Saturates at
    /// `u32::MAX` milliseconds.
    pub fn staggered(from: RevealFrom, index: usize) -> Self {
        Self {
            from,
            delay_ms: u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(100),
        }
    }
}

/// Everything needed to render one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionView {
    pub id: SectionId,
    /// Large section heading; the hero's title is the person's name.
    pub title: String,
    pub subtitle: Option<String>,
    /// Animation for the title block.
    pub title_reveal: Option<Reveal>,
    pub blocks: Vec<Block>,
}
