use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by each renderer's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    // Navigation bar
    NavBackground,
    NavText,
    NavActive,

    TextPrimary,
    TextSecondary,
    Accent,

    // Skill bars
    ProgressTrack,
    ProgressFill,

    BadgeBackground,
    BadgeText,
    Highlight,
}
