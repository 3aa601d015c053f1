//! Browser platform adapters.
//!
//! Implements the `converter-core` backend port using the browser's
//! `fetch()` through gloo-net.

pub mod backend;

pub use backend::HttpBackend;
