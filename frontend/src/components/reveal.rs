use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::dom::Page;
use crate::error::SiteResult;

const HIDDEN_CLASS: &str = "animate-on-scroll";
const REVEALED_CLASS: &str = "animated";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledReveal<K> {
    pub key: K,
    pub delay_ms: u32,
}

/// Tracks which elements are still waiting to be revealed.
///
/// The stagger delay uses the entry's position in the observer batch, not
/// its position among the intersecting entries.
#[derive(Debug)]
pub struct RevealQueue<K> {
    waiting: HashSet<K>,
    stagger_ms: u32,
}

impl<K: Eq + Hash + Clone> RevealQueue<K> {
    pub fn new(keys: impl IntoIterator<Item = K>, stagger_ms: u32) -> Self {
        Self {
            waiting: keys.into_iter().collect(),
            stagger_ms,
        }
    }

    pub fn batch(&mut self, entries: &[(K, bool)]) -> Vec<ScheduledReveal<K>> {
        let stagger_ms = self.stagger_ms;
        entries
            .iter()
            .enumerate()
            .filter(|(_, (_, intersecting))| *intersecting)
            .filter(|(_, (key, _))| self.waiting.remove(key))
            .map(|(index, (key, _))| ScheduledReveal {
                key: key.clone(),
                delay_ms: index as u32 * stagger_ms,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn is_waiting(&self, key: &K) -> bool {
        self.waiting.contains(key)
    }

    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.waiting.len()
    }
}

pub fn init(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let targets: Vec<Element> = page.query_all(config.reveal_targets)?;
    if targets.is_empty() {
        debug!("No reveal targets found, skipping");
        return Ok(());
    }

    let queue = Rc::new(RefCell::new(RevealQueue::new(
        0..targets.len(),
        config.reveal_stagger_ms,
    )));
    let elements = Rc::new(targets);

    let callback = {
        let elements = elements.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let batch: Vec<(usize, bool)> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target = entry.target();
                        elements
                            .iter()
                            .position(|element| *element == target)
                            .map(|index| (index, entry.is_intersecting()))
                    })
                    .collect();

                for reveal in queue.borrow_mut().batch(&batch) {
                    let element = elements[reveal.key].clone();
                    observer.unobserve(&element);
                    Timeout::new(reveal.delay_ms, move || {
                        let _ = element.class_list().add_1(REVEALED_CLASS);
                    })
                    .forget();
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in elements.iter() {
        element.class_list().add_1(HIDDEN_CLASS)?;
        observer.observe(element);
    }

    debug!("Observing {} reveal targets", elements.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staggers_by_position_in_batch() {
        let mut queue = RevealQueue::new(0..3, 100);
        let reveals = queue.batch(&[(0, true), (1, true), (2, true)]);
        let delays: Vec<u32> = reveals.iter().map(|r| r.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200]);
    }

    #[test]
    fn non_intersecting_entries_still_count_toward_delay() {
        let mut queue = RevealQueue::new(0..3, 100);
        let reveals = queue.batch(&[(0, false), (1, false), (2, true)]);
        assert_eq!(reveals, vec![ScheduledReveal { key: 2, delay_ms: 200 }]);
        assert!(queue.is_waiting(&0));
        assert!(queue.is_waiting(&1));
    }

    #[test]
    fn element_is_revealed_exactly_once() {
        let mut queue = RevealQueue::new(["a", "b"], 100);
        assert_eq!(queue.batch(&[("a", true)]).len(), 1);
        assert!(queue.batch(&[("a", true)]).is_empty());
        assert!(!queue.is_waiting(&"a"));
        assert_eq!(queue.remaining(), 1);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut queue = RevealQueue::new([1], 100);
        assert!(queue.batch(&[(7, true)]).is_empty());
        assert_eq!(queue.remaining(), 1);
    }
}
