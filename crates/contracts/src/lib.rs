//! Data model, static dataset and view derivation for the sales report dashboard.
//!
//! Everything here is target independent; the `frontend` crate only renders
//! what these functions produce.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
