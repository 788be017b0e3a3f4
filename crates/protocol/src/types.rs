use serde::{Deserialize, Serialize};

/// Vertical placement of a rendered section, in CSS pixels from the top of
/// the document.
///
/// Covers the half-open range `[top, top + height)`: an offset equal to
/// `bottom()` already belongs to whatever comes next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.bottom()
    }

    /// Whether any part of the section is inside the window
    /// `[scroll, scroll + viewport_height)`.
    pub fn intersects(&self, scroll: f64, viewport_height: f64) -> bool {
        self.top < scroll + viewport_height && self.bottom() > scroll
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS notation: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}
