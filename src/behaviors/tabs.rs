//! Vertical pill-tab activation synchronized with the URL hash.
//!
//! The server renders the tab buttons (`#v-pills-tab button`, each carrying
//! `data-bs-target="#<pane-id>"`) and their panes. Activation toggles the
//! button and pane classes directly and mirrors the active pane into the URL
//! hash with `history.replaceState`, so deep links and back/forward hash
//! changes select the right tab without new history entries.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;

#[cfg(feature = "hydrate")]
use crate::util::dom;

#[cfg(feature = "hydrate")]
const TAB_BUTTONS_SELECTOR: &str = "#v-pills-tab button";

/// Attribute tying a tab button to its pane, as a `#<pane-id>` fragment.
pub const TARGET_ATTRIBUTE: &str = "data-bs-target";

/// Pane element id for a `#<pane-id>` target fragment.
pub fn pane_id(target: &str) -> &str {
    target.strip_prefix('#').unwrap_or(target)
}

/// Selector for the tab button owning `hash`, or `None` for an empty hash.
pub fn button_selector(hash: &str) -> Option<String> {
    if hash.is_empty() || hash == "#" {
        return None;
    }
    Some(format!(r#"#v-pills-tab button[{TARGET_ATTRIBUTE}="{hash}"]"#))
}

/// Activate the tab button and pane for `target`, deactivating the rest,
/// and mirror the pane id into the URL hash.
#[cfg(feature = "hydrate")]
fn activate_target(document: &web_sys::Document, target: &str) {
    for button in dom::query_all(document, TAB_BUTTONS_SELECTOR) {
        let Some(button_target) = button.get_attribute(TARGET_ATTRIBUTE) else {
            continue;
        };
        let is_active = button_target == target;
        let _ = button.set_attribute("aria-selected", if is_active { "true" } else { "false" });
        if is_active {
            let _ = button.class_list().add_1("active");
        } else {
            let _ = button.class_list().remove_1("active");
        }
        if let Some(pane) = document.get_element_by_id(pane_id(&button_target)) {
            if is_active {
                let _ = pane.class_list().add_2("show", "active");
            } else {
                let _ = pane.class_list().remove_2("show", "active");
            }
        }
    }

    if let Some(history) = dom::window().and_then(|w| w.history().ok()) {
        let hash = format!("#{}", pane_id(target));
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&hash));
    }
}

/// Activate the tab named by the current URL hash, if any button owns it.
#[cfg(feature = "hydrate")]
fn activate_from_hash(document: &web_sys::Document) {
    let Some(hash) = dom::window().and_then(|w| w.location().hash().ok()) else {
        return;
    };
    let Some(selector) = button_selector(&hash) else {
        return;
    };
    match dom::query(document, &selector) {
        Some(_) => activate_target(document, &hash),
        None => log::debug!("no tab found for hash: {hash}"),
    }
}

/// Wire tab clicks and hash tracking for the page lifetime, then apply any
/// hash the page was loaded with.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = dom::document() else {
            return;
        };

        for button in dom::query_all(&document, TAB_BUTTONS_SELECTOR) {
            let Some(target) = button.get_attribute(TARGET_ATTRIBUTE) else {
                continue;
            };
            let doc = document.clone();
            dom::on_click(&button, move |event| {
                event.prevent_default();
                activate_target(&doc, &target);
            });
        }

        if let Some(window) = dom::window() {
            let doc = document.clone();
            dom::on_event(&window, "hashchange", move |_| activate_from_hash(&doc));
        }

        activate_from_hash(&document);
    }
}
