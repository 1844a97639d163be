//! Domain types for selection references.

pub mod errors;
pub mod model;
