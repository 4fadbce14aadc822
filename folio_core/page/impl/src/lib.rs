use std::{
    collections::BTreeSet,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    time::{Duration, Instant},
};

use folio_core_page_contracts::PageFeatureService;
use folio_models::page::{
    ElementRect, LazyImage, LazyImageLoad, ScrollState, SectionBounds, SkillBar, SkillBarStep,
};
use folio_utils::LockExt;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PageFeatureServiceImpl {
    config: PageFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct PageFeatureConfig {
    /// The navbar switches to its scrolled style below this offset.
    pub navbar_scroll_offset: f64,
    /// The back-to-top button is shown below this offset.
    pub back_to_top_offset: f64,
    /// Distance below the top of the viewport used to pick the active section.
    pub active_section_offset: f64,
    pub navbar_height: f64,
    /// Fraction of the viewport height an element's top must be above.
    pub viewport_threshold: f64,
    /// Upper bound of the random fade-in delay.
    pub animation_delay: Duration,
    pub skill_bar_stagger: Duration,
    pub scroll_throttle: Duration,
}

#[derive(Debug, Default)]
struct State {
    skills_revealed: AtomicBool,
    images_loaded: Mutex<BTreeSet<usize>>,
    last_scroll: Mutex<Option<Instant>>,
}

impl PageFeatureServiceImpl {
    pub fn new(config: PageFeatureConfig) -> Self {
        Self {
            config,
            state: Default::default(),
        }
    }
}

impl PageFeatureService for PageFeatureServiceImpl {
    fn scroll_state(&self, scroll_top: f64) -> ScrollState {
        ScrollState {
            navbar_scrolled: scroll_top > self.config.navbar_scroll_offset,
            back_to_top_visible: scroll_top > self.config.back_to_top_offset,
        }
    }

    fn active_section(&self, scroll_y: f64, sections: &[SectionBounds]) -> Option<String> {
        let position = scroll_y + self.config.active_section_offset;
        sections
            .iter()
            .rev()
            .find(|s| position >= s.top && position < s.top + s.height)
            .map(|s| s.id.clone())
    }

    fn nav_scroll_target(&self, section_top: f64) -> f64 {
        (section_top - self.config.navbar_height).max(0.0)
    }

    fn back_to_top_target(&self) -> f64 {
        0.0
    }

    fn is_in_viewport(&self, rect: ElementRect, viewport_height: f64) -> bool {
        rect.top <= viewport_height * self.config.viewport_threshold && rect.bottom >= 0.0
    }

    fn fade_in_delay(&self) -> Duration {
        if self.config.animation_delay.is_zero() {
            return Duration::ZERO;
        }
        rand::thread_rng().gen_range(Duration::ZERO..self.config.animation_delay)
    }

    fn reveal_skill_bars(
        &self,
        section: ElementRect,
        viewport_height: f64,
        bars: &[SkillBar],
    ) -> Option<Vec<SkillBarStep>> {
        if !self.is_in_viewport(section, viewport_height)
            || self.state.skills_revealed.swap(true, Ordering::Relaxed)
        {
            return None;
        }

        debug!(bars = bars.len(), "revealing skill bars");
        Some(
            bars.iter()
                .enumerate()
                .map(|(index, bar)| SkillBarStep {
                    index,
                    width: bar.width.clone(),
                    delay: self
                        .config
                        .skill_bar_stagger
                        .saturating_mul(index.try_into().unwrap_or(u32::MAX)),
                })
                .collect(),
        )
    }

    fn reveal_lazy_images(
        &self,
        images: &[LazyImage],
        viewport_height: f64,
    ) -> Vec<LazyImageLoad> {
        let mut loaded = self.state.images_loaded.lock_state();
        let loads = images
            .iter()
            .enumerate()
            .filter(|(_, image)| image.rect.top <= viewport_height && image.rect.bottom >= 0.0)
            .filter(|&(index, _)| loaded.insert(index))
            .map(|(index, image)| LazyImageLoad {
                index,
                src: image.src.clone(),
            })
            .collect::<Vec<_>>();

        if !loads.is_empty() {
            debug!(images = loads.len(), "loading lazy images");
        }
        loads
    }

    fn admit_scroll(&self, now: Instant) -> bool {
        let mut last = self.state.last_scroll.lock_state();
        match *last {
            Some(prev) if now.saturating_duration_since(prev) < self.config.scroll_throttle => {
                false
            }
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sut() -> PageFeatureServiceImpl {
        PageFeatureServiceImpl::new(PageFeatureConfig {
            navbar_scroll_offset: 50.0,
            back_to_top_offset: 300.0,
            active_section_offset: 150.0,
            navbar_height: 80.0,
            viewport_threshold: 0.8,
            animation_delay: Duration::from_millis(100),
            skill_bar_stagger: Duration::from_millis(200),
            scroll_throttle: Duration::from_millis(16),
        })
    }

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.into(),
            top,
            height,
        }
    }

    #[test]
    fn scroll_state() {
        let sut = sut();

        for (scroll_top, navbar_scrolled, back_to_top_visible) in [
            (0.0, false, false),
            (50.0, false, false),
            (51.0, true, false),
            (300.0, true, false),
            (301.0, true, true),
        ] {
            assert_eq!(
                sut.scroll_state(scroll_top),
                ScrollState {
                    navbar_scrolled,
                    back_to_top_visible,
                },
                "{scroll_top}"
            );
        }
    }

    #[test]
    fn active_section() {
        let sut = sut();
        let sections = [
            section("home", 0.0, 600.0),
            section("about", 600.0, 800.0),
            section("contact", 1400.0, 500.0),
        ];

        assert_eq!(sut.active_section(0.0, &sections).as_deref(), Some("home"));
        assert_eq!(sut.active_section(449.0, &sections).as_deref(), Some("home"));
        assert_eq!(sut.active_section(450.0, &sections).as_deref(), Some("about"));
        assert_eq!(
            sut.active_section(1300.0, &sections).as_deref(),
            Some("contact")
        );
        assert_eq!(sut.active_section(1750.0, &sections), None);
        assert_eq!(sut.active_section(0.0, &[]), None);
    }

    #[test]
    fn active_section_overlap_last_wins() {
        let sut = sut();
        let sections = [section("outer", 0.0, 1000.0), section("inner", 100.0, 200.0)];

        assert_eq!(sut.active_section(0.0, &sections).as_deref(), Some("inner"));
    }

    #[test]
    fn nav_scroll_target() {
        let sut = sut();

        assert_eq!(sut.nav_scroll_target(600.0), 520.0);
        assert_eq!(sut.nav_scroll_target(40.0), 0.0);
    }

    #[test]
    fn is_in_viewport() {
        let sut = sut();

        for (top, bottom, expected) in [
            (0.0, 100.0, true),
            (800.0, 900.0, true),
            (801.0, 900.0, false),
            (-200.0, 0.0, true),
            (-200.0, -1.0, false),
        ] {
            assert_eq!(
                sut.is_in_viewport(ElementRect { top, bottom }, 1000.0),
                expected,
                "{top}..{bottom}"
            );
        }
    }

    #[test]
    fn fade_in_delay_in_range() {
        let sut = sut();

        for _ in 0..100 {
            assert!(sut.fade_in_delay() < Duration::from_millis(100));
        }
    }

    #[test]
    fn reveal_skill_bars_once() {
        let sut = sut();
        let bars = ["90%", "75%", "60%"].map(|width| SkillBar {
            width: width.into(),
        });
        let hidden = ElementRect {
            top: 2000.0,
            bottom: 2600.0,
        };
        let visible = ElementRect {
            top: 300.0,
            bottom: 900.0,
        };

        assert_eq!(sut.reveal_skill_bars(hidden, 1000.0, &bars), None);

        let steps = sut.reveal_skill_bars(visible, 1000.0, &bars).unwrap();
        assert_eq!(
            steps,
            [
                SkillBarStep {
                    index: 0,
                    width: "90%".into(),
                    delay: Duration::ZERO,
                },
                SkillBarStep {
                    index: 1,
                    width: "75%".into(),
                    delay: Duration::from_millis(200),
                },
                SkillBarStep {
                    index: 2,
                    width: "60%".into(),
                    delay: Duration::from_millis(400),
                },
            ]
        );

        assert_eq!(sut.reveal_skill_bars(visible, 1000.0, &bars), None);
    }

    #[test]
    fn back_to_top_target() {
        assert_eq!(sut().back_to_top_target(), 0.0);
    }

    #[test]
    fn reveal_lazy_images_once_each() {
        let sut = sut();
        let images = [("a.jpg", 100.0), ("b.jpg", 900.0), ("c.jpg", 1800.0)].map(|(src, top)| {
            LazyImage {
                src: src.into(),
                rect: ElementRect {
                    top,
                    bottom: top + 300.0,
                },
            }
        });
        let scrolled = |offset: f64| {
            images.clone().map(|image| LazyImage {
                rect: image.rect.scrolled_by(offset),
                ..image
            })
        };

        assert_eq!(
            sut.reveal_lazy_images(&images, 1000.0),
            [
                LazyImageLoad {
                    index: 0,
                    src: "a.jpg".into(),
                },
                LazyImageLoad {
                    index: 1,
                    src: "b.jpg".into(),
                },
            ]
        );
        assert!(sut.reveal_lazy_images(&images, 1000.0).is_empty());
        assert_eq!(
            sut.reveal_lazy_images(&scrolled(1000.0), 1000.0),
            [LazyImageLoad {
                index: 2,
                src: "c.jpg".into(),
            }]
        );
        assert!(sut.reveal_lazy_images(&scrolled(0.0), 1000.0).is_empty());
    }

    #[test]
    fn reveal_lazy_images_edges() {
        let sut = sut();
        let image = |top: f64, bottom: f64| LazyImage {
            src: "img.png".into(),
            rect: ElementRect { top, bottom },
        };

        let outside = [image(1001.0, 1200.0), image(-300.0, -1.0)];
        let touching = [image(1000.0, 1200.0), image(-300.0, 0.0)];

        assert!(sut.reveal_lazy_images(&outside, 1000.0).is_empty());
        assert_eq!(sut.reveal_lazy_images(&touching, 1000.0).len(), 2);
    }

    #[test]
    fn scroll_throttle() {
        let sut = sut();
        let start = Instant::now();

        assert!(sut.admit_scroll(start));
        assert!(!sut.admit_scroll(start + Duration::from_millis(10)));
        assert!(sut.admit_scroll(start + Duration::from_millis(16)));
        assert!(!sut.admit_scroll(start + Duration::from_millis(20)));
        assert!(sut.admit_scroll(start + Duration::from_millis(40)));
    }
}
