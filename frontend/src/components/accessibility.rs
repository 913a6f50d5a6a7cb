use log::{debug, info};
use web_sys::HtmlElement;

use crate::config::SiteConfig;
use crate::dom::{set_styles, style_on, Page};
use crate::error::SiteResult;

const FOCUS_RING: &[(&str, &str)] = &[
    ("outline", "2px solid #0EA5E9"),
    ("outline-offset", "2px"),
];
const NO_FOCUS_RING: &[(&str, &str)] = &[("outline", ""), ("outline-offset", "")];

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const HIGH_CONTRAST_QUERY: &str = "(prefers-contrast: high)";

/// Platform accessibility preferences, read once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub reduced_motion: bool,
    pub high_contrast: bool,
}

impl DisplayPreferences {
    pub fn detect(page: &Page) -> Self {
        Self {
            reduced_motion: media_matches(page, REDUCED_MOTION_QUERY),
            high_contrast: media_matches(page, HIGH_CONTRAST_QUERY),
        }
    }

    /// Custom properties to override on the root element.
    pub fn root_overrides(&self) -> Vec<(&'static str, &'static str)> {
        let mut overrides = Vec::new();
        if self.reduced_motion {
            overrides.push(("--animation-duration", "0.01ms"));
        }
        if self.high_contrast {
            overrides.push(("--accent-color", "#00BFFF"));
        }
        overrides
    }

    pub fn disables_hero_animation(&self) -> bool {
        self.reduced_motion
    }
}

fn media_matches(page: &Page, query: &str) -> bool {
    page.window
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn init(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let focusable: Vec<HtmlElement> = page.query_all(config.focusable)?;
    for element in &focusable {
        style_on(element, "focus", FOCUS_RING)?;
        style_on(element, "blur", NO_FOCUS_RING)?;
    }
    debug!("Focus rings attached to {} elements", focusable.len());

    let preferences = DisplayPreferences::detect(page);
    if preferences != DisplayPreferences::default() {
        info!("Display preferences: {:?}", preferences);
    }

    let root = page.root()?;
    for (property, value) in preferences.root_overrides() {
        root.style().set_property(property, value)?;
    }

    if preferences.disables_hero_animation() {
        for image in page.query_all::<HtmlElement>(config.hero_images)? {
            set_styles(&image, &[("animation", "none")]);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_preferences_means_no_overrides() {
        let preferences = DisplayPreferences::default();
        assert!(preferences.root_overrides().is_empty());
        assert!(!preferences.disables_hero_animation());
    }

    #[test]
    fn reduced_motion_collapses_animation_duration() {
        let preferences = DisplayPreferences {
            reduced_motion: true,
            high_contrast: false,
        };
        assert_eq!(preferences.root_overrides(), vec![("--animation-duration", "0.01ms")]);
        assert!(preferences.disables_hero_animation());
    }

    #[test]
    fn high_contrast_only_touches_the_accent() {
        let preferences = DisplayPreferences {
            reduced_motion: false,
            high_contrast: true,
        };
        assert_eq!(preferences.root_overrides(), vec![("--accent-color", "#00BFFF")]);
        assert!(!preferences.disables_hero_animation());
    }

    #[test]
    fn both_preferences_apply_independently() {
        let preferences = DisplayPreferences {
            reduced_motion: true,
            high_contrast: true,
        };
        assert_eq!(preferences.root_overrides().len(), 2);
    }
}
