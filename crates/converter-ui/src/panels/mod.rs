pub mod alert;
pub mod chat;
pub mod editor;
pub mod toolbar;
