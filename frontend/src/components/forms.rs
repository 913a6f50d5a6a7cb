use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::SiteConfig;
use crate::dom::{listen, Page};
use crate::error::SiteResult;

const FOCUSED_CLASS: &str = "focused";
const FILLED_CLASS: &str = "filled";

/// Whether a field should carry the `filled` marker once it loses focus.
pub fn is_filled(value: &str) -> bool {
    !value.is_empty()
}

fn field_value(field: &HtmlElement) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn init(page: &Page, config: &SiteConfig) -> SiteResult<()> {
    let fields: Vec<HtmlElement> = page.query_all(config.form_fields)?;

    for field in &fields {
        {
            let target = field.clone();
            listen(field, "focus", move |_: Event| {
                if let Some(parent) = target.parent_element() {
                    let _ = parent.class_list().add_1(FOCUSED_CLASS);
                }
            })?;
        }

        let target = field.clone();
        listen(field, "blur", move |_: Event| {
            let Some(parent) = target.parent_element() else {
                return;
            };
            let classes = parent.class_list();
            let _ = classes.remove_1(FOCUSED_CLASS);
            let _ = if is_filled(&field_value(&target)) {
                classes.add_1(FILLED_CLASS)
            } else {
                classes.remove_1(FILLED_CLASS)
            };
        })?;
    }

    debug!("Form field states attached to {} fields", fields.len());
    Ok(())
}
