use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use web_sys::{Event, HtmlImageElement};

use crate::config::SiteConfig;
use crate::dom::{listen, set_styles, Page};
use crate::error::SiteResult;

const TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageState {
    #[default]
    Loading,
    Loaded,
    Broken,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageEvent {
    Load,
    Error,
}

impl ImageState {
    /// Loaded and Broken are terminal; whichever event arrives first wins.
    pub fn next(self, event: ImageEvent) -> Self {
        match (self, event) {
            (ImageState::Loading, ImageEvent::Load) => ImageState::Loaded,
            (ImageState::Loading, ImageEvent::Error) => ImageState::Broken,
            (settled, _) => settled,
        }
    }

    pub fn styles(self) -> [(&'static str, &'static str); 2] {
        match self {
            ImageState::Loading => [("opacity", "0"), ("transform", "scale(0.95)")],
            ImageState::Loaded => [("opacity", "1"), ("transform", "scale(1)")],
            ImageState::Broken => [("opacity", "0.5"), ("transform", "scale(1)")],
        }
    }
}

/// How an image that is already `complete` when the layer attaches should
/// settle. A finished image with no intrinsic width failed to decode.
pub fn settled_on_attach(complete: bool, natural_width: u32) -> Option<ImageEvent> {
    match (complete, natural_width) {
        (false, _) => None,
        (true, 0) => Some(ImageEvent::Error),
        (true, _) => Some(ImageEvent::Load),
    }
}

fn settle(image: &HtmlImageElement, state: &Cell<ImageState>, event: ImageEvent) {
    let current = state.get();
    let next = current.next(event);
    if next != current {
        state.set(next);
        set_styles(image, &next.styles());
    }
}

pub fn init(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let images: Vec<HtmlImageElement> = page.query_all(config.images)?;

    for image in &images {
        let state = Rc::new(Cell::new(ImageState::Loading));
        set_styles(image, &ImageState::Loading.styles());
        set_styles(image, &[("transition", TRANSITION)]);

        if let Some(event) = settled_on_attach(image.complete(), image.natural_width()) {
            settle(image, &state, event);
        } else {
            let target = image.clone();
            let state = state.clone();
            listen(image, "load", move |_: Event| settle(&target, &state, ImageEvent::Load))?;
        }

        let target = image.clone();
        listen(image, "error", move |_: Event| settle(&target, &state, ImageEvent::Error))?;
    }

    debug!("Image reveal attached to {} images", images.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reaches_full_opacity_and_scale() {
        let state = ImageState::Loading.next(ImageEvent::Load);
        assert_eq!(state, ImageState::Loaded);
        assert_eq!(state.styles(), [("opacity", "1"), ("transform", "scale(1)")]);
    }

    #[test]
    fn error_settles_half_transparent() {
        let state = ImageState::Loading.next(ImageEvent::Error);
        assert_eq!(state, ImageState::Broken);
        assert_eq!(state.styles(), [("opacity", "0.5"), ("transform", "scale(1)")]);
    }

    #[test]
    fn settled_images_ignore_later_events() {
        assert_eq!(ImageState::Loaded.next(ImageEvent::Error), ImageState::Loaded);
        assert_eq!(ImageState::Broken.next(ImageEvent::Load), ImageState::Broken);
    }

    #[test]
    fn pending_image_waits_for_its_event() {
        assert_eq!(settled_on_attach(false, 0), None);
        assert_eq!(settled_on_attach(false, 640), None);
    }

    #[test]
    fn cached_image_settles_loaded_immediately() {
        assert_eq!(settled_on_attach(true, 640), Some(ImageEvent::Load));
    }

    #[test]
    fn cached_failure_settles_broken_not_loaded() {
        let event = settled_on_attach(true, 0).expect("complete image settles");
        assert_eq!(ImageState::Loading.next(event), ImageState::Broken);
    }

    #[test]
    fn broken_look_differs_from_both_other_states() {
        let broken = ImageState::Broken.styles();
        assert_ne!(broken, ImageState::Loading.styles());
        assert_ne!(broken, ImageState::Loaded.styles());
    }
}
