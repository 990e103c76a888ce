//! Network layer for the workshop filter call.
//!
//! The site is server-rendered; the one browser-originated request is the
//! workshop filter fetch, kept behind the same hydrate gating as the rest of
//! the browser glue.

pub mod api;
pub mod types;
