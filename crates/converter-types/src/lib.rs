pub mod language;
pub mod message;
pub mod session;
pub mod config;
pub mod error;
pub mod event;
pub mod api;


pub use error::ConverterError;
pub type Result<T> = std::result::Result<T, ConverterError>;
