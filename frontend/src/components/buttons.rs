use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::config::SiteConfig;
use crate::dom::{listen, set_styles, style_on, Page};
use crate::error::SiteResult;

const HOVER_LIFT: &str = "translateY(-2px)";
const RESTING: &str = "translateY(0)";
const FOCUS_GLOW: &str = "0 0 0 3px rgba(14, 165, 233, 0.3)";

/// Click position relative to the button's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleOrigin {
    pub x: f64,
    pub y: f64,
}

impl RippleOrigin {
    pub fn from_click(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Self {
        Self {
            x: client_x - rect_left,
            y: client_y - rect_top,
        }
    }

    /// Inline style for the ripple span; it grows via the injected `ripple` keyframes.
    pub fn css(&self) -> String {
        format!(
            "position: absolute; left: {}px; top: {}px; width: 0; height: 0; \
             border-radius: 50%; background: rgba(255, 255, 255, 0.3); \
             transform: translate(-50%, -50%); animation: ripple 0.6s linear; \
             pointer-events: none; z-index: 1;",
            self.x, self.y
        )
    }
}

fn spawn_ripple(
    page: &Page,
    button: &HtmlElement,
    e: &MouseEvent,
    lifetime_ms: u32,
) -> SiteResult<()> {
    let rect = button.get_bounding_client_rect();
    let origin = RippleOrigin::from_click(
        e.client_x() as f64,
        e.client_y() as f64,
        rect.left(),
        rect.top(),
    );

    let ripple: HtmlElement = page.document.create_element("span")?.unchecked_into();
    ripple.style().set_css_text(&origin.css());

    set_styles(button, &[("position", "relative"), ("overflow", "hidden")]);
    button.append_child(&ripple)?;

    // Each ripple owns its timer, so rapid clicks never cancel each other.
    Timeout::new(lifetime_ms, move || ripple.remove()).forget();
    Ok(())
}

pub fn init(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let buttons: Vec<HtmlElement> = page.query_all(config.buttons)?;

    for button in &buttons {
        style_on(button, "mouseenter", &[("transform", HOVER_LIFT)])?;
        style_on(button, "mouseleave", &[("transform", RESTING)])?;

        if button.class_list().contains(config.primary_button_class) {
            let page = page.clone();
            let target = button.clone();
            let lifetime_ms = config.ripple_lifetime_ms;
            listen(button, "click", move |e: MouseEvent| {
                if let Err(err) = spawn_ripple(&page, &target, &e, lifetime_ms) {
                    debug!("Ripple skipped: {}", err);
                }
            })?;
        }

        style_on(button, "focus", &[("box-shadow", FOCUS_GLOW)])?;
        style_on(button, "blur", &[("box-shadow", "")])?;
    }

    debug!("Button interactions attached to {} buttons", buttons.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_anchored_to_the_click_point() {
        let origin = RippleOrigin::from_click(150.0, 320.0, 100.0, 300.0);
        assert_eq!(origin, RippleOrigin { x: 50.0, y: 20.0 });
    }

    #[test]
    fn ripple_css_places_and_animates_the_span() {
        let css = RippleOrigin { x: 12.5, y: 8.0 }.css();
        assert!(css.contains("left: 12.5px;"));
        assert!(css.contains("top: 8px;"));
        assert!(css.contains("animation: ripple 0.6s linear;"));
        assert!(css.contains("pointer-events: none;"));
    }
}
