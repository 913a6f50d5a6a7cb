use log::debug;
use web_sys::HtmlElement;

use crate::config::SiteConfig;
use crate::dom::Page;
use crate::error::SiteResult;
use crate::throttle::on_scroll_frame;

/// Vertical offset for the hero image at `index` (0-based, document order).
/// Later images move further, which gives the layered depth.
pub fn parallax_offset(scroll_y: f64, index: usize, rate: f64, step: f64) -> f64 {
    let multiplier = (index + 1) as f64 * step;
    scroll_y * rate * multiplier
}

pub fn init(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let images: Vec<HtmlElement> = page.query_all(config.hero_images)?;
    if images.is_empty() {
        debug!("No hero images found, skipping parallax");
        return Ok(());
    }

    let (rate, step) = (config.parallax_rate, config.parallax_step);
    let count = images.len();
    on_scroll_frame(page, move |scroll_y| {
        for (index, image) in images.iter().enumerate() {
            let offset = parallax_offset(scroll_y, index, rate, step);
            let _ = image
                .style()
                .set_property("transform", &format!("translateY({}px)", offset));
        }
    })?;

    debug!("Parallax attached to {} hero images", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_two_layers_at_scroll_100() {
        assert!(close(parallax_offset(100.0, 0, -0.3, 0.1), -3.0));
        assert!(close(parallax_offset(100.0, 1, -0.3, 0.1), -6.0));
    }

    #[test]
    fn no_scroll_means_no_offset() {
        assert!(close(parallax_offset(0.0, 4, -0.3, 0.1), 0.0));
    }

    #[test]
    fn deeper_layers_move_further() {
        let shallow = parallax_offset(500.0, 0, -0.3, 0.1).abs();
        let deep = parallax_offset(500.0, 2, -0.3, 0.1).abs();
        assert!(deep > shallow);
    }
}
