use std::{
    str::FromStr,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use folio_config::Config;
use folio_core_page_contracts::PageFeatureService;
use folio_models::page::{ElementRect, LazyImage, MobileMenu, SectionBounds, SkillBar};
use serde_json::{json, Value};

use super::print_json;
use crate::environment::page_feature;

#[derive(Debug, Subcommand)]
pub enum PageCommand {
    /// Show the navbar and back-to-top button state for a scroll offset
    Scroll { offset: f64 },
    /// Determine which navigation link is highlighted
    Section {
        scroll_y: f64,
        /// Sections as `id:top:height`
        #[arg(required = true)]
        sections: Vec<SectionArg>,
    },
    /// Check whether an element is far enough inside the viewport to animate
    #[command(allow_negative_numbers = true)]
    Viewport {
        top: f64,
        bottom: f64,
        #[arg(long, default_value_t = 800.0)]
        viewport_height: f64,
    },
    /// Print the skill bar animation schedule for a visible skills section
    #[command(allow_negative_numbers = true)]
    Skills {
        top: f64,
        bottom: f64,
        #[arg(long, default_value_t = 800.0)]
        viewport_height: f64,
        /// Target width of a skill bar, e.g. `90%`
        #[arg(long = "width", required = true)]
        widths: Vec<String>,
    },
    /// List the lazy images that get loaded while scrolling through the page
    #[command(allow_negative_numbers = true)]
    Images {
        /// Images as `src:top:bottom`, measured with the page scrolled to the
        /// top
        #[arg(required = true)]
        images: Vec<LazyImageArg>,
        #[arg(long, default_value_t = 800.0)]
        viewport_height: f64,
        /// Scroll offsets visited in order
        #[arg(long = "scroll", default_values_t = [0.0])]
        offsets: Vec<f64>,
    },
    /// Show which scroll events pass the scroll throttle
    Throttle {
        /// Arrival time of each scroll event in milliseconds
        #[arg(required = true)]
        events_ms: Vec<u64>,
    },
    /// Replay clicks on the mobile menu
    Menu {
        #[arg(required = true)]
        actions: Vec<MenuAction>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MenuAction {
    /// The hamburger button
    Toggle,
    /// A navigation link, which always closes the menu
    Link,
}

#[derive(Debug, Clone)]
pub struct SectionArg(SectionBounds);

impl FromStr for SectionArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(height), Some(top), Some(id)) = (parts.next(), parts.next(), parts.next())
        else {
            anyhow::bail!("Expected `id:top:height`, got `{s}`");
        };
        Ok(Self(SectionBounds {
            id: id.into(),
            top: top.parse().context("Invalid section top")?,
            height: height.parse().context("Invalid section height")?,
        }))
    }
}

#[derive(Debug, Clone)]
pub struct LazyImageArg(LazyImage);

impl FromStr for LazyImageArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(bottom), Some(top), Some(src)) = (parts.next(), parts.next(), parts.next())
        else {
            anyhow::bail!("Expected `src:top:bottom`, got `{s}`");
        };
        Ok(Self(LazyImage {
            src: src.into(),
            rect: ElementRect {
                top: top.parse().context("Invalid image top")?,
                bottom: bottom.parse().context("Invalid image bottom")?,
            },
        }))
    }
}

impl PageCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        print_json(&self.run(&page_feature(&config)))
    }

    pub fn run(self, page: &impl PageFeatureService) -> Value {
        match self {
            PageCommand::Scroll { offset } => {
                let state = page.scroll_state(offset);
                json!({
                    "state": state,
                    "back_to_top_target": state
                        .back_to_top_visible
                        .then(|| page.back_to_top_target()),
                })
            }
            PageCommand::Section { scroll_y, sections } => {
                let sections = sections.into_iter().map(|s| s.0).collect::<Vec<_>>();
                let active = page.active_section(scroll_y, &sections);
                let target = active
                    .as_ref()
                    .and_then(|id| sections.iter().find(|s| &s.id == id))
                    .map(|s| page.nav_scroll_target(s.top));
                json!({ "active": active, "scroll_target": target })
            }
            PageCommand::Viewport {
                top,
                bottom,
                viewport_height,
            } => {
                let visible = page.is_in_viewport(ElementRect { top, bottom }, viewport_height);
                json!({
                    "visible": visible,
                    "fade_in_delay_ms": visible.then(|| page.fade_in_delay().as_millis() as u64),
                })
            }
            PageCommand::Skills {
                top,
                bottom,
                viewport_height,
                widths,
            } => {
                let bars = widths
                    .into_iter()
                    .map(|width| SkillBar { width })
                    .collect::<Vec<_>>();
                let steps =
                    page.reveal_skill_bars(ElementRect { top, bottom }, viewport_height, &bars);
                json!(steps)
            }
            PageCommand::Images {
                images,
                viewport_height,
                offsets,
            } => {
                let images = images.into_iter().map(|i| i.0).collect::<Vec<_>>();
                let passes = offsets
                    .into_iter()
                    .map(|offset| {
                        let visible = images
                            .iter()
                            .map(|image| LazyImage {
                                src: image.src.clone(),
                                rect: image.rect.scrolled_by(offset),
                            })
                            .collect::<Vec<_>>();
                        json!({
                            "scroll": offset,
                            "load": page.reveal_lazy_images(&visible, viewport_height),
                        })
                    })
                    .collect::<Vec<_>>();
                json!(passes)
            }
            PageCommand::Throttle { events_ms } => {
                let start = Instant::now();
                let events = events_ms
                    .into_iter()
                    .map(|ms| {
                        let admitted = page.admit_scroll(start + Duration::from_millis(ms));
                        json!({ "at_ms": ms, "handled": admitted })
                    })
                    .collect::<Vec<_>>();
                json!(events)
            }
            PageCommand::Menu { actions } => {
                let states = actions
                    .into_iter()
                    .scan(MobileMenu::default(), |menu, action| {
                        *menu = match action {
                            MenuAction::Toggle => menu.toggle(),
                            MenuAction::Link => menu.close(),
                        };
                        Some(json!({
                            "open": menu.open,
                            "body_scroll_locked": menu.body_scroll_locked(),
                        }))
                    })
                    .collect::<Vec<_>>();
                json!(states)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_core_page_contracts::MockPageFeatureService;
    use folio_models::page::ScrollState;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scroll_shows_back_to_top_target() {
        // Arrange
        let page = MockPageFeatureService::new()
            .with_scroll_state(
                400.0,
                ScrollState {
                    navbar_scrolled: true,
                    back_to_top_visible: true,
                },
            )
            .with_back_to_top_target(0.0);

        // Act
        let output = PageCommand::Scroll { offset: 400.0 }.run(&page);

        // Assert
        assert_eq!(
            output,
            json!({
                "state": { "navbar_scrolled": true, "back_to_top_visible": true },
                "back_to_top_target": 0.0,
            })
        );
    }

    #[test]
    fn scroll_hides_back_to_top_target() {
        let page = MockPageFeatureService::new().with_scroll_state(0.0, ScrollState::default());

        let output = PageCommand::Scroll { offset: 0.0 }.run(&page);

        assert_eq!(output["back_to_top_target"], Value::Null);
    }

    #[test]
    fn throttle_reports_each_event() {
        // Arrange
        let page = MockPageFeatureService::new().with_admit_scroll(false);

        // Act
        let output = PageCommand::Throttle { events_ms: vec![8] }.run(&page);

        // Assert
        assert_eq!(output, json!([{ "at_ms": 8, "handled": false }]));
    }

    #[test]
    fn menu_link_closes_menu() {
        let page = MockPageFeatureService::new();

        let output = PageCommand::Menu {
            actions: vec![MenuAction::Toggle, MenuAction::Link, MenuAction::Link],
        }
        .run(&page);

        assert_eq!(
            output,
            json!([
                { "open": true, "body_scroll_locked": true },
                { "open": false, "body_scroll_locked": false },
                { "open": false, "body_scroll_locked": false },
            ])
        );
    }

    #[test]
    fn parse_lazy_image_arg() {
        let LazyImageArg(image) = "https://example.com/a.jpg:-20:180".parse().unwrap();
        assert_eq!(image.src, "https://example.com/a.jpg");
        assert_eq!(
            image.rect,
            ElementRect {
                top: -20.0,
                bottom: 180.0,
            }
        );

        assert!("a.jpg:100".parse::<LazyImageArg>().is_err());
    }

    #[test]
    fn parse_section_arg() {
        let SectionArg(section) = "about-me:600:800.5".parse().unwrap();
        assert_eq!(section.id, "about-me");
        assert_eq!(section.top, 600.0);
        assert_eq!(section.height, 800.5);

        assert!("about:600".parse::<SectionArg>().is_err());
        assert!("about:x:800".parse::<SectionArg>().is_err());
    }
}
