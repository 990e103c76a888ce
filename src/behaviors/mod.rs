//! Page behaviors wired at module start.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule owns one independent enhancement of the server-rendered
//! markup and exposes an `init()` that looks up its own elements. Pages only
//! carry a subset of the markup, so every lookup is optional and a behavior
//! whose elements are absent wires nothing.

pub mod forms;
pub mod scroller;
pub mod tabs;
pub mod theme;
pub mod workshops;

/// Wire every behavior. Order is load-bearing only for `theme`, which must
/// apply the stored preference before the first paint the user notices.
pub fn init_all() {
    theme::init();
    forms::init();
    tabs::init();
    workshops::init();
    scroller::init();
}
