use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use web_sys::{Event, HtmlElement, MouseEvent};

use crate::config::SiteConfig;
use crate::dom::{listen, set_styles, style_on, Page};
use crate::error::SiteResult;

const HOVER_STYLES: &[(&str, &str)] = &[
    ("transform", "scale(1.1)"),
    ("box-shadow", "0 8px 25px rgba(14, 165, 233, 0.4)"),
];
const REST_STYLES: &[(&str, &str)] = &[
    ("transform", "scale(1)"),
    ("box-shadow", "0 4px 16px rgba(0, 0, 0, 0.4)"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
    Hide,
    Show,
}

impl VisibilityChange {
    pub fn styles(self) -> [(&'static str, &'static str); 2] {
        match self {
            VisibilityChange::Hide => [("transform", "scale(0)"), ("opacity", "0")],
            VisibilityChange::Show => [("transform", "scale(1)"), ("opacity", "1")],
        }
    }
}

/// True once the bottom of the viewport is within `margin` of the document end.
pub fn near_document_end(
    scroll_y: f64,
    viewport_height: f64,
    document_height: f64,
    margin: f64,
) -> bool {
    scroll_y + viewport_height > document_height - margin
}

/// Edge-triggered visibility of the floating call button.
#[derive(Debug)]
pub struct VisibilityTracker {
    visible: bool,
    footer_margin: f64,
}

impl VisibilityTracker {
    pub fn new(footer_margin: f64) -> Self {
        Self {
            visible: true,
            footer_margin,
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns a change only when the button crosses the footer margin.
    pub fn update(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        document_height: f64,
    ) -> Option<VisibilityChange> {
        let should_hide =
            near_document_end(scroll_y, viewport_height, document_height, self.footer_margin);
        match (self.visible, should_hide) {
            (true, true) => {
                self.visible = false;
                Some(VisibilityChange::Hide)
            }
            (false, false) => {
                self.visible = true;
                Some(VisibilityChange::Show)
            }
            _ => None,
        }
    }
}

pub fn init(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let Some(button) = page.query::<HtmlElement>(config.floating_button)? else {
        debug!("Floating assistance button not found, skipping");
        return Ok(());
    };

    {
        let page = page.clone();
        let call_target = config.call_target;
        listen(&button, "click", move |_: MouseEvent| {
            info!("Floating assistance clicked, calling {}", call_target);
            let _ = page.window.location().set_href(call_target);
        })?;
    }

    style_on(&button, "mouseenter", HOVER_STYLES)?;
    style_on(&button, "mouseleave", REST_STYLES)?;

    let tracker = Rc::new(RefCell::new(VisibilityTracker::new(config.footer_margin)));
    let scroll_page = page.clone();
    listen(&page.window, "scroll", move |_: Event| {
        let change = tracker.borrow_mut().update(
            scroll_page.scroll_y(),
            scroll_page.viewport_height(),
            scroll_page.document_height(),
        );
        if let Some(change) = change {
            set_styles(&button, &change.styles());
        }
    })?;

    debug!("Floating assistance button attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_near_the_footer() {
        // 1250 + 800 = 2050 > 2000 - 200
        let mut tracker = VisibilityTracker::new(200.0);
        assert_eq!(tracker.update(1250.0, 800.0, 2000.0), Some(VisibilityChange::Hide));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn shows_again_after_scrolling_back() {
        let mut tracker = VisibilityTracker::new(200.0);
        tracker.update(1250.0, 800.0, 2000.0);
        assert_eq!(tracker.update(0.0, 800.0, 2000.0), Some(VisibilityChange::Show));
        assert!(tracker.is_visible());
    }

    #[test]
    fn fires_once_per_crossing() {
        let mut tracker = VisibilityTracker::new(200.0);
        let changes: Vec<_> = [0.0, 400.0, 900.0, 1100.0, 1200.0, 1250.0, 900.0, 500.0, 0.0]
            .into_iter()
            .filter_map(|y| tracker.update(y, 800.0, 2000.0))
            .collect();
        assert_eq!(changes, vec![VisibilityChange::Hide, VisibilityChange::Show]);
    }

    #[test]
    fn exact_margin_boundary_stays_visible() {
        assert!(!near_document_end(1000.0, 800.0, 2000.0, 200.0));
        assert!(near_document_end(1000.5, 800.0, 2000.0, 200.0));
    }

    #[test]
    fn hidden_button_collapses_and_fades() {
        assert_eq!(
            VisibilityChange::Hide.styles(),
            [("transform", "scale(0)"), ("opacity", "0")]
        );
    }
}
