//! Fetch helper for the workshop filter endpoint.
//!
//! Client-side (hydrate): a real HTTP call via `gloo-net`. Native builds
//! stub to `None` since the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The failure policy is logging only: a non-2xx status, network error, or
//! unparsable body logs via `log::error!` and yields `None`, leaving the
//! caller's existing rendering untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Workshop;

/// Relative endpoint serving the filtered workshop list.
#[cfg(any(test, feature = "hydrate"))]
fn filter_workshops_endpoint() -> &'static str {
    "filter-workshops/"
}

/// Fetch the filtered workshop list. Returns `None` on any failure or on
/// the server.
pub async fn fetch_workshops() -> Option<Vec<Workshop>> {
    #[cfg(feature = "hydrate")]
    {
        let response = match gloo_net::http::Request::get(filter_workshops_endpoint())
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                log::error!("workshop filter request failed: {err}");
                return None;
            }
        };
        if !response.ok() {
            log::error!("workshop filter request failed: status {}", response.status());
            return None;
        }
        match response.json::<Vec<Workshop>>().await {
            Ok(workshops) => Some(workshops),
            Err(err) => {
                log::error!("workshop filter response unparsable: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
