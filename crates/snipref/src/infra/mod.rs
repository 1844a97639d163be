//! Infrastructure adapters for the clipboard, terminal, and configuration.

pub mod clipboard;
pub mod config;
pub mod notify;
pub mod workspace;
