//! Record-keeping core of a livestock farm dashboard.
//!
//! The crate exposes the generic search/category filter, the pagination
//! utility, the status selector and the list view that combines them, plus
//! domain records, repository traits with an in-memory store, forms and the
//! services that drive the dashboard pages.

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod filter;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;
pub mod status_selector;
pub mod view;

/// Rows per table page when the configuration does not say otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
