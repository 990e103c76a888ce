//! Workshop filter list: fetch and re-render on demand.
//!
//! Clicking the filter button replaces the contents of `#workshops-list`
//! with one entry per workshop returned by the filter endpoint. A failed
//! fetch is logged by the network layer and leaves the current list as-is.

#[cfg(test)]
#[path = "workshops_test.rs"]
mod workshops_test;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::types::Workshop;
#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
const FILTER_BUTTON_ID: &str = "filter-button";
#[cfg(feature = "hydrate")]
const LIST_ID: &str = "workshops-list";

/// Utility classes on each entry's link, matching the server-rendered list.
pub const LINK_CLASSES: &str = "d-flex flex-column flex-lg-row gap-3 align-items-start \
     align-items-lg-center py-3 link-body-emphasis text-decoration-none border-bottom";

/// Utility classes on each entry's title.
pub const TITLE_CLASSES: &str = "mb-1 text-primary-emphasis";

/// Build one `li > a > div > h5 + small` entry for `workshop`.
#[cfg(feature = "hydrate")]
fn build_entry(
    document: &web_sys::Document,
    workshop: &Workshop,
) -> Result<web_sys::Element, wasm_bindgen::JsValue> {
    let item = document.create_element("li")?;
    let link = document.create_element("a")?;
    link.set_attribute("href", "#")?;
    link.set_attribute("class", LINK_CLASSES)?;
    let column = document.create_element("div")?;
    column.set_attribute("class", "col-lg-12")?;
    let title = document.create_element("h5")?;
    title.set_attribute("class", TITLE_CLASSES)?;
    title.set_text_content(Some(&workshop.workshopname));
    let dates = document.create_element("small")?;
    dates.set_attribute("class", "text-body-secondary")?;
    dates.set_text_content(Some(&workshop.date_range()));
    column.append_child(&title)?;
    column.append_child(&dates)?;
    link.append_child(&column)?;
    item.append_child(&link)?;
    Ok(item)
}

/// Replace the list contents with `workshops`, skipping silently when the
/// list element is absent.
#[cfg(feature = "hydrate")]
fn render_workshops(document: &web_sys::Document, workshops: &[Workshop]) {
    let Some(list) = document.get_element_by_id(LIST_ID) else {
        return;
    };
    list.set_inner_html("");
    for workshop in workshops {
        if let Ok(entry) = build_entry(document, workshop) {
            let _ = list.append_child(&entry);
        }
    }
}

/// Wire the filter button, when the current page carries one.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = dom::document() else {
            return;
        };
        let Some(button) = document.get_element_by_id(FILTER_BUTTON_ID) else {
            return;
        };
        let doc = document.clone();
        dom::on_click(&button, move |_| {
            let doc = doc.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(workshops) = api::fetch_workshops().await {
                    render_workshops(&doc, &workshops);
                }
            });
        });
    }
}
