//! Domain models for the port registry.
//!
//! # Core Concepts
//!
//! - [`Vessel`]: A docked vessel, identified by its registration code.
//!   Every vessel is one of the [`VesselKind`] variants and computes its own
//!   capacity from its own attributes.
//! - [`VesselType`]: The variant tag supplied when registering
//!   (`sailing` or `cargo`).
//! - [`RegisterVesselInput`]: Raw field values for a registration request.
//! - [`VesselDetail`] and [`CapacitySummary`]: Read views that carry
//!   computed capacities.

mod capacity;
mod registration;
mod vessel;

pub use capacity::*;
pub use registration::*;
pub use vessel::*;
