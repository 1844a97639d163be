//! Application layer orchestrating domain logic and infrastructure.

pub mod copy;
pub mod language;
pub mod selection;
