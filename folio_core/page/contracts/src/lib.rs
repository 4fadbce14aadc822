use std::time::{Duration, Instant};

use folio_models::page::{
    ElementRect, LazyImage, LazyImageLoad, ScrollState, SectionBounds, SkillBar, SkillBarStep,
};

/// View-state calculations for the decorative parts of the page.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PageFeatureService: Send + Sync + 'static {
    /// Return the navbar and back-to-top button state for the given vertical
    /// scroll offset.
    fn scroll_state(&self, scroll_top: f64) -> ScrollState;

    /// Return the id of the section whose navigation link should be
    /// highlighted. If several sections contain the reference position, the
    /// last one wins.
    fn active_section(&self, scroll_y: f64, sections: &[SectionBounds]) -> Option<String>;

    /// Return the scroll offset that brings a section to the top of the
    /// viewport without hiding it behind the fixed navbar.
    fn nav_scroll_target(&self, section_top: f64) -> f64;

    /// Return the scroll offset the back-to-top button scrolls to.
    fn back_to_top_target(&self) -> f64;

    /// Whether an element is far enough inside the viewport to be animated.
    fn is_in_viewport(&self, rect: ElementRect, viewport_height: f64) -> bool;

    /// Return a random delay before a fade-in animation starts.
    fn fade_in_delay(&self) -> Duration;

    /// Return the animation schedule for the skill bars the first time the
    /// skills section becomes visible, and `None` on every other call.
    fn reveal_skill_bars(
        &self,
        section: ElementRect,
        viewport_height: f64,
        bars: &[SkillBar],
    ) -> Option<Vec<SkillBarStep>>;

    /// Return the images that have just come into view and must be loaded.
    /// Every image is reported at most once; `images` must be passed in the
    /// same order on every call.
    fn reveal_lazy_images(&self, images: &[LazyImage], viewport_height: f64) -> Vec<LazyImageLoad>;

    /// Whether a scroll event arriving at `now` should be handled or dropped
    /// by the scroll throttle.
    fn admit_scroll(&self, now: Instant) -> bool;
}

#[cfg(feature = "mock")]
impl MockPageFeatureService {
    pub fn with_scroll_state(mut self, scroll_top: f64, result: ScrollState) -> Self {
        self.expect_scroll_state()
            .once()
            .with(mockall::predicate::eq(scroll_top))
            .return_const(result);
        self
    }

    pub fn with_back_to_top_target(mut self, result: f64) -> Self {
        self.expect_back_to_top_target().return_const(result);
        self
    }

    pub fn with_admit_scroll(mut self, result: bool) -> Self {
        self.expect_admit_scroll().once().return_const(result);
        self
    }
}
