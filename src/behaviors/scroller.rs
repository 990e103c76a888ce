//! Horizontal card-list scroller.
//!
//! The previous/next buttons shift the container's scroll position by one
//! card step. Card width and padding are fixed by the stylesheet, so the
//! step is a constant rather than a measurement.

#[cfg(test)]
#[path = "scroller_test.rs"]
mod scroller_test;

#[cfg(feature = "hydrate")]
use crate::util::dom;

/// Card width in pixels, per the stylesheet.
pub const ITEM_WIDTH: i32 = 300;

/// Horizontal padding between cards in pixels.
pub const ITEM_PADDING: i32 = 10;

#[cfg(feature = "hydrate")]
const CONTAINER_ID: &str = "horizontal-container";
#[cfg(feature = "hydrate")]
const PREV_BUTTON_ID: &str = "prev-btn";
#[cfg(feature = "hydrate")]
const NEXT_BUTTON_ID: &str = "next-btn";

/// Pixels scrolled per button click: one card plus its padding.
pub fn scroll_step() -> i32 {
    ITEM_WIDTH + ITEM_PADDING
}

/// Wire the previous/next buttons, when the current page carries the
/// scroller.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = dom::document() else {
            return;
        };
        let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
            return;
        };

        if let Some(prev) = document.get_element_by_id(PREV_BUTTON_ID) {
            let container = container.clone();
            dom::on_click(&prev, move |_| {
                container.set_scroll_left(container.scroll_left() - scroll_step());
                log::debug!("scroll position: {}", container.scroll_left());
            });
        }

        if let Some(next) = document.get_element_by_id(NEXT_BUTTON_ID) {
            let container = container.clone();
            dom::on_click(&next, move |_| {
                container.set_scroll_left(container.scroll_left() + scroll_step());
                log::debug!("scroll position: {}", container.scroll_left());
            });
        }
    }
}
