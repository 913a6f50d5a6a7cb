use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config::SiteConfig;
use crate::dom::{listen, Page};
use crate::error::SiteResult;

/// The element id an in-page link points at, or `None` when the browser
/// should handle the link itself (`#`, `mailto:` and `tel:` hrefs).
pub fn fragment_id(href: &str) -> Option<&str> {
    if href == "#" || href.contains("mailto:") || href.contains("tel:") {
        return None;
    }
    href.strip_prefix('#')
}

/// Scroll offset that leaves `margin` pixels between the header and target.
pub fn scroll_destination(target_top: f64, header_height: f64, margin: f64) -> f64 {
    target_top - header_height - margin
}

/// Where a click on an in-page link should scroll to, or `None` to leave the
/// navigation to the browser. `resolve` maps an element id to its `offsetTop`.
pub fn plan_scroll(
    href: &str,
    resolve: impl Fn(&str) -> Option<f64>,
    header_height: impl FnOnce() -> f64,
    margin: f64,
) -> Option<f64> {
    let target_top = resolve(fragment_id(href)?)?;
    Some(scroll_destination(target_top, header_height(), margin))
}

pub fn init(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let links: Vec<Element> = page.query_all(config.anchor_links)?;

    for link in &links {
        let page = page.clone();
        let anchor = link.clone();
        let header_selector = config.header;
        let margin = config.anchor_margin;

        listen(link, "click", move |e: MouseEvent| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let resolve = |id: &str| {
                page.document
                    .get_element_by_id(id)
                    .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                    .map(|target| target.offset_top() as f64)
            };
            let header_height = || {
                page.query::<HtmlElement>(header_selector)
                    .ok()
                    .flatten()
                    .map(|header| header.offset_height() as f64)
                    .unwrap_or(0.0)
            };
            let Some(top) = plan_scroll(&href, resolve, header_height, margin) else {
                return;
            };

            e.prevent_default();

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            page.window.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    debug!("Smooth scrolling attached to {} links", links.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plain_fragments() {
        assert_eq!(fragment_id("#products"), Some("products"));
        assert_eq!(fragment_id("#how-it-works"), Some("how-it-works"));
    }

    #[test]
    fn bare_hash_is_left_to_the_browser() {
        assert_eq!(fragment_id("#"), None);
    }

    #[test]
    fn external_schemes_are_left_to_the_browser() {
        assert_eq!(fragment_id("#mailto:hello@keshot.com"), None);
        assert_eq!(fragment_id("#tel:702-903-3970"), None);
    }

    #[test]
    fn destination_clears_header_and_margin() {
        assert_eq!(scroll_destination(1200.0, 80.0, 20.0), 1100.0);
    }

    #[test]
    fn missing_target_leaves_navigation_to_the_browser() {
        let plan = plan_scroll("#pricing", |_| None, || 80.0, 20.0);
        assert_eq!(plan, None);
    }

    #[test]
    fn resolved_target_scrolls_below_the_header() {
        let resolve = |id: &str| (id == "pricing").then_some(900.0);
        assert_eq!(plan_scroll("#pricing", resolve, || 80.0, 20.0), Some(800.0));
    }

    #[test]
    fn external_schemes_never_scroll_even_if_an_id_matches() {
        let resolve = |_: &str| Some(300.0);
        assert_eq!(plan_scroll("#mailto:hello@keshot.com", resolve, || 80.0, 20.0), None);
        assert_eq!(plan_scroll("#tel:702-903-3970", resolve, || 80.0, 20.0), None);
        assert_eq!(plan_scroll("#", resolve, || 80.0, 20.0), None);
    }

    #[test]
    fn destination_without_header_keeps_margin() {
        assert_eq!(scroll_destination(500.0, 0.0, 20.0), 480.0);
    }
}
