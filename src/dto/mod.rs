//! DTO modules that bridge services with presentation layers.

pub mod dashboard;
pub mod list;
