use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Scroll-dependent decorations of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

/// Vertical extent of a page section linked from the navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Bounding box of an element relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBar {
    /// Target width, e.g. `"90%"`.
    pub width: String,
}

/// One step of the staggered skill bar animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBarStep {
    pub index: usize,
    pub width: String,
    pub delay: Duration,
}

impl ElementRect {
    /// Position of the element after the page has been scrolled down by
    /// `offset`.
    pub fn scrolled_by(self, offset: f64) -> Self {
        Self {
            top: self.top - offset,
            bottom: self.bottom - offset,
        }
    }
}

/// An image whose source is only assigned once it comes into view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LazyImage {
    /// Deferred source (`data-src`).
    pub src: String,
    pub rect: ElementRect,
}

/// Instruction to load the image at `index`: set its source to `src` and drop
/// its placeholder styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LazyImageLoad {
    pub index: usize,
    pub src: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileMenu {
    pub open: bool,
}

impl MobileMenu {
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }

    /// The page body must not scroll while the menu covers it.
    pub fn body_scroll_locked(self) -> bool {
        self.open
    }
}
