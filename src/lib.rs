//! # workshops-client
//!
//! Browser behavior layer for the server-rendered workshop hub site.
//! The pages themselves are rendered on the server; this crate is loaded as
//! a WASM module and progressively enhances the existing markup: theme
//! preference handling, expense-form row editing, tab/hash synchronization,
//! the workshop filter list, and the horizontal card scroller.
//!
//! All browser interaction is gated behind the `hydrate` feature so the
//! crate also compiles natively, where every behavior is a no-op and the
//! unit tests exercise the pure logic.

pub mod behaviors;
pub mod net;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: set up panic reporting and logging, then wire every
/// behavior against whatever markup the current page provides.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    behaviors::init_all();
}
