//! Best-effort `web-sys` lookups and listener attachment.
//!
//! ERROR HANDLING
//! ==============
//! Every accessor returns `Option` so callers skip the corresponding update
//! when an element, storage, or the window itself is unavailable. Nothing in
//! this module panics.

use wasm_bindgen::{JsCast, closure::Closure};

/// The browser window, when running in one.
pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

/// The current document.
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// `localStorage`, when the host environment exposes it.
pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// All elements matching `selector`, as a concrete `Vec`.
pub fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// The first element matching `selector`, if any.
pub fn query(document: &web_sys::Document, selector: &str) -> Option<web_sys::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Attach `handler` to `target` for the page's lifetime.
///
/// Listeners are never detached once wired, so the closure is deliberately
/// leaked with `forget()`.
pub fn on_event(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

/// Attach a click `handler` to `target` for the page's lifetime.
pub fn on_click(target: &web_sys::EventTarget, handler: impl FnMut(web_sys::Event) + 'static) {
    on_event(target, "click", handler);
}
