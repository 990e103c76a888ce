#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn endpoint_is_relative_to_the_current_page() {
    assert_eq!(filter_workshops_endpoint(), "filter-workshops/");
    assert!(!filter_workshops_endpoint().starts_with('/'));
}

#[test]
fn fetch_resolves_to_none_without_a_browser() {
    let fetched = poll_ready(fetch_workshops());
    assert!(fetched.is_none());
}

/// Minimal executor for a future known to be immediately ready.
fn poll_ready<T>(future: impl Future<Output = T>) -> T {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut context = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut context) {
        Poll::Ready(value) => value,
        Poll::Pending => unreachable!("non-hydrate fetch is immediately ready"),
    }
}
