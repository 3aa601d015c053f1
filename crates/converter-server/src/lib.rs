//! Conversion & chat HTTP service.
//!
//! Handlers are stateless per call: each request builds what it needs,
//! calls the gateway at most once and answers with a JSON envelope.

pub mod config;
pub mod gateway;
pub mod handlers;
pub mod server;

pub use config::ServerConfig;
pub use gateway::OpenAiCompatGateway;
pub use server::{ApiServer, router};
