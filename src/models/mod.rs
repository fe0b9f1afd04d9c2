//! Runtime settings models.

pub mod config;
