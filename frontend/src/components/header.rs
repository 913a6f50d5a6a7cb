use log::debug;
use web_sys::HtmlElement;

use crate::config::SiteConfig;
use crate::dom::{set_styles, Page};
use crate::error::SiteResult;
use crate::throttle::on_scroll_frame;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAppearance {
    Translucent,
    Solid,
}

impl HeaderAppearance {
    pub fn for_scroll(scroll_y: f64, solid_after: f64) -> Self {
        if scroll_y > solid_after {
            HeaderAppearance::Solid
        } else {
            HeaderAppearance::Translucent
        }
    }

    pub fn styles(self) -> [(&'static str, &'static str); 3] {
        match self {
            HeaderAppearance::Solid => [
                ("background", "rgba(0, 0, 0, 0.95)"),
                ("backdrop-filter", "blur(25px)"),
                ("border-bottom-color", "rgba(255, 255, 255, 0.15)"),
            ],
            HeaderAppearance::Translucent => [
                ("background", "rgba(0, 0, 0, 0.8)"),
                ("backdrop-filter", "blur(20px)"),
                ("border-bottom-color", "rgba(255, 255, 255, 0.1)"),
            ],
        }
    }
}

pub fn init(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let Some(header) = page.query::<HtmlElement>(config.header)? else {
        debug!("Header not found, skipping");
        return Ok(());
    };

    let solid_after = config.header_solid_after;
    on_scroll_frame(page, move |scroll_y| {
        set_styles(&header, &HeaderAppearance::for_scroll(scroll_y, solid_after).styles());
    })?;

    debug!("Header styling attached");
    Ok(())
}
