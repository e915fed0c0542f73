//! Port vessel registry service.
//!
//! Re-exports the domain crate and adds the shared [`store`], the HTTP
//! [`api`] and server [`config`].

pub mod api;
pub mod config;
pub mod store;

pub use port_registry_core::{models, RegistryError, VesselRegistry, MAX_VOLUME};
