use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose attach/skip messages while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Selectors and tuning constants shared by every interaction layer.
///
/// The markup and stylesheet are owned elsewhere, so everything the layers
/// rely on about them is collected here rather than scattered as literals.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub menu_toggle: &'static str,
    pub menu_panel: &'static str,
    pub hamburger_lines: &'static str,
    pub menu_nav_links: &'static str,

    pub reveal_targets: &'static str,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub reveal_stagger_ms: u32,

    pub anchor_links: &'static str,
    pub header: &'static str,
    pub anchor_margin: f64,
    pub header_solid_after: f64,

    pub buttons: &'static str,
    pub primary_button_class: &'static str,
    pub ripple_lifetime_ms: u32,

    pub floating_button: &'static str,
    pub footer_margin: f64,
    pub call_target: &'static str,

    pub images: &'static str,
    pub hero_images: &'static str,
    pub parallax_rate: f64,
    pub parallax_step: f64,

    pub focusable: &'static str,
    pub cards: &'static str,
    pub play_button: &'static str,
    pub play_rebound_ms: u32,
    pub form_fields: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_toggle: ".mobile-menu-toggle",
            menu_panel: ".mobile-menu",
            hamburger_lines: ".hamburger-line",
            menu_nav_links: ".nav-mobile .nav-link",

            reveal_targets: ".formula-card, .product-card, .step-card, .testimonial-card, \
                             .blog-card, .brand-card, .service-item",
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px",
            reveal_stagger_ms: 100,

            anchor_links: "a[href^=\"#\"]",
            header: ".header",
            anchor_margin: 20.0,
            header_solid_after: 100.0,

            buttons: ".btn",
            primary_button_class: "btn-primary",
            ripple_lifetime_ms: 600,

            floating_button: ".floating-assistance",
            footer_margin: 200.0,
            call_target: "tel:702-903-3970",

            images: "img",
            hero_images: ".hero-image",
            parallax_rate: -0.3,
            parallax_step: 0.1,

            focusable: "button, a, input, textarea, select, [tabindex]:not([tabindex=\"-1\"])",
            cards: ".formula-card, .product-card, .step-card, .testimonial-card, \
                    .blog-card, .brand-card",
            play_button: ".play-button",
            play_rebound_ms: 150,
            form_fields: "input, textarea",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_items_reveal_but_do_not_lift() {
        let config = SiteConfig::default();
        assert!(config.reveal_targets.contains(".service-item"));
        assert!(!config.cards.contains(".service-item"));
    }

    #[test]
    fn negative_tab_index_is_not_focusable() {
        let config = SiteConfig::default();
        assert!(config.focusable.contains(":not([tabindex=\"-1\"])"));
    }
}
