use serde::{Deserialize, Serialize};

use super::Vessel;

/// A vessel together with its computed capacity, used for API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselDetail {
    #[serde(flatten)]
    pub vessel: Vessel,
    /// Usable capacity in m³.
    pub capacity: f64,
}

impl From<Vessel> for VesselDetail {
    fn from(vessel: Vessel) -> Self {
        let capacity = vessel.capacity();
        Self { vessel, capacity }
    }
}

/// Aggregate capacity of every vessel in the port.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacitySummary {
    /// Sum of every vessel's capacity, in m³.
    pub total_capacity: f64,
    pub vessel_count: usize,
}
