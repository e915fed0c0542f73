//! Core library for the port vessel registry.
//!
//! The [`VesselRegistry`] owns every docked [`Vessel`](models::Vessel),
//! enforces the registration rules and aggregates the port's total capacity.
//! It is synchronous and single-owner; the service crate wraps it in a lock
//! for concurrent access.

mod error;
pub mod models;
mod registry;

pub use error::*;
pub use registry::*;
