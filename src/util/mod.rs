//! Utility helpers shared across behavior modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the `web-sys` glue (window/document/storage lookups, listener
//! attachment) so behavior modules stay close to their page semantics.

#[cfg(feature = "hydrate")]
pub mod dom;
