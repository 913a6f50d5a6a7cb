use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, Node, Window};

use crate::error::{SiteError, SiteResult};

/// The live window/document pair every layer attaches to.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> SiteResult<Self> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// First match for `selector`, or `None` when the markup doesn't provide it.
    pub fn query<T: JsCast>(&self, selector: &str) -> SiteResult<Option<T>> {
        Ok(self
            .document
            .query_selector(selector)?
            .and_then(|element| element.dyn_into::<T>().ok()))
    }

    /// Every match for `selector` in document order.
    pub fn query_all<T: JsCast>(&self, selector: &str) -> SiteResult<Vec<T>> {
        let nodes = self.document.query_selector_all(selector)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<T>().ok())
            .collect())
    }

    pub fn body(&self) -> SiteResult<HtmlElement> {
        self.document.body().ok_or(SiteError::NoBody)
    }

    pub fn root(&self) -> SiteResult<HtmlElement> {
        self.document
            .document_element()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(SiteError::NoDocument)
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    pub fn document_height(&self) -> f64 {
        self.document
            .document_element()
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0)
    }

    pub fn request_frame(&self, callback: impl FnOnce() + 'static) -> SiteResult<()> {
        let callback = Closure::once_into_js(callback);
        self.window.request_animation_frame(callback.unchecked_ref())?;
        Ok(())
    }
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
///
/// Events that aren't an `E` are dropped. There is no teardown: listeners
/// live as long as the document does.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F) -> SiteResult<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Write inline style properties; an empty value clears the property.
pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in styles {
        let _ = style.set_property(property, value);
    }
}

/// Whether the node an event was dispatched to sits inside `container`.
pub fn contains_target(container: &Node, target: Option<EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}

/// Apply a fixed set of inline styles to `element` whenever `event` fires on it.
pub fn style_on(
    element: &HtmlElement,
    event: &str,
    styles: &'static [(&'static str, &'static str)],
) -> SiteResult<()> {
    let target = element.clone();
    listen(element, event, move |_: Event| set_styles(&target, styles))
}
