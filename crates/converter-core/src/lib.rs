//! Conversion and chat orchestration.
//!
//! Server-side pieces (`conversion`, `chat`) talk to the LLM through
//! [`ports::GatewayPort`]; browser-side pieces (`workflow`, `editor_sync`,
//! `event_bus`) talk to the backend and the editor widget through the other
//! port traits. Nothing here depends on a concrete platform.

pub mod ports;
pub mod prompt;
pub mod conversion;
pub mod chat;
pub mod editor_sync;
pub mod workflow;
pub mod event_bus;
