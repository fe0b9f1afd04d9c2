//! Domain records managed by the farm dashboard.

pub mod animal;
pub mod breeding;
pub mod health;
pub mod production;
pub mod status;
pub mod transaction;
pub mod types;
pub mod vaccination;
