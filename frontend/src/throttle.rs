use std::cell::Cell;
use std::rc::Rc;

use web_sys::Event;

use crate::dom::{listen, Page};
use crate::error::SiteResult;

/// Coalesces bursts of scroll events into one animation-frame update.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: Cell<bool>,
}

impl FrameThrottle {
    /// Returns true if the caller should schedule a frame.
    pub fn request(&self) -> bool {
        if self.pending.get() {
            return false;
        }
        self.pending.set(true);
        true
    }

    pub fn complete(&self) {
        self.pending.set(false);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Run `update` with the current scroll offset at most once per animation
/// frame while the window scrolls. Each call owns its own throttle.
pub fn on_scroll_frame<F>(page: &Page, update: F) -> SiteResult<()>
where
    F: Fn(f64) + 'static,
{
    let throttle = Rc::new(FrameThrottle::default());
    let update = Rc::new(update);
    let frame_page = page.clone();

    listen(&page.window, "scroll", move |_: Event| {
        if !throttle.request() {
            return;
        }
        let frame_throttle = throttle.clone();
        let update = update.clone();
        let page = frame_page.clone();
        let scheduled = frame_page.request_frame(move || {
            frame_throttle.complete();
            update(page.scroll_y());
        });
        if scheduled.is_err() {
            throttle.complete();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_requests_schedules_one_frame() {
        let throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        assert!(throttle.is_pending());
    }

    #[test]
    fn completed_frame_allows_next_request() {
        let throttle = FrameThrottle::default();
        assert!(throttle.request());
        throttle.complete();
        assert!(!throttle.is_pending());
        assert!(throttle.request());
    }

    #[test]
    fn scroll_during_a_frame_queues_the_next_one() {
        let throttle = FrameThrottle::default();
        assert!(throttle.request());
        // The frame callback releases the flag before running its update.
        throttle.complete();
        assert!(throttle.request());
        assert!(!throttle.request());
    }

    #[test]
    fn throttles_are_independent() {
        let header = FrameThrottle::default();
        let parallax = FrameThrottle::default();
        assert!(header.request());
        assert!(parallax.request());
    }
}
