use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the six vertically stacked regions of the page, in display order.
///
/// The string form (`as_str`) doubles as the DOM element id and the nav
/// button's `data-section` attribute, so renderers and the browser bridge
/// agree on it without a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Education,
    Experience,
    Skills,
    Contact,
}

impl SectionId {
    /// Every section, top to bottom.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Caption shown in the navigation bar.
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in [`SectionId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section id: {0:?}")]
pub struct ParseSectionIdError(pub String);

impl FromStr for SectionId {
    type Err = ParseSectionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseSectionIdError(s.to_string()))
    }
}
