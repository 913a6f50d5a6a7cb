use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod dom;
mod error;
mod styles;
mod throttle;
mod components {
    pub mod accessibility;
    pub mod buttons;
    pub mod cards;
    pub mod floating;
    pub mod forms;
    pub mod header;
    pub mod images;
    pub mod menu;
    pub mod parallax;
    pub mod reveal;
    pub mod smooth_scroll;
}

use components::{
    accessibility, buttons, cards, floating, forms, header, images, menu, parallax, reveal,
    smooth_scroll,
};
use config::SiteConfig;
use dom::Page;
use error::SiteResult;

type Layer = fn(&Page, &SiteConfig) -> SiteResult<()>;

const LAYERS: &[(&str, Layer)] = &[
    ("mobile menu", menu::init),
    ("scroll reveal", reveal::init),
    ("smooth scrolling", smooth_scroll::init),
    ("header effects", header::init),
    ("button interactions", buttons::init),
    ("floating assistance", floating::init),
    ("image animations", images::init),
    ("parallax", parallax::init),
    ("accessibility", accessibility::init),
    ("card hover", cards::init_cards),
    ("play button", cards::init_play_button),
    ("form fields", forms::init),
];

fn start(page: &Page) {
    info!("Keshot website loaded");
    let config = SiteConfig::default();

    if let Err(e) = styles::inject(page) {
        error!("Failed to inject animation styles: {}", e);
    }

    // Layers touch disjoint elements, so one failing doesn't stop the rest.
    let mut attached = 0;
    for (name, layer) in LAYERS {
        match layer(page, &config) {
            Ok(()) => attached += 1,
            Err(e) => error!("Failed to initialize {}: {}", name, e),
        }
    }
    info!("{}/{} interactive features initialized", attached, LAYERS.len());

    gloo_console::log!(
        "%c🎨 Keshot Website",
        "color: #0EA5E9; font-size: 20px; font-weight: bold;"
    );
    gloo_console::log!("%c✨ Premium interactions loaded", "color: #8B5CF6; font-size: 14px;");
    gloo_console::log!(
        "%c🚀 Ready for an amazing experience!",
        "color: #10B981; font-size: 14px;"
    );
}

/// `document.readyState` is "loading" until the parser finishes; after that
/// (`interactive` or `complete`) the markup can be queried straight away.
fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn run_when_ready() -> SiteResult<()> {
    let page = Page::current()?;

    if !still_parsing(&page.document.ready_state()) {
        start(&page);
        return Ok(());
    }

    let document = page.document.clone();
    let on_ready = Closure::once_into_js(move || start(&page));
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting Keshot site interactions");
    if let Err(e) = run_when_ready() {
        error!("Could not attach to the document: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_only_while_the_parser_runs() {
        assert!(still_parsing("loading"));
        assert!(!still_parsing("interactive"));
        assert!(!still_parsing("complete"));
    }

    #[test]
    fn every_layer_has_a_distinct_name() {
        let mut names: Vec<&str> = LAYERS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LAYERS.len());
    }
}
