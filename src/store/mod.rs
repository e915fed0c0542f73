use std::sync::{Arc, RwLock};

use port_registry_core::models::{CapacitySummary, RegisterVesselInput, Vessel, VesselDetail};
use port_registry_core::{RegistryError, VesselRegistry};

/// Shared handle to a [`VesselRegistry`].
///
/// Registrations take the write lock, so they are serialized and the
/// uniqueness check cannot race. Queries take the read lock and may run
/// concurrently with each other. All methods hand out owned copies.
#[derive(Debug, Clone, Default)]
pub struct RegistryStore {
    registry: Arc<RwLock<VesselRegistry>>,
}

impl RegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registry(registry: VesselRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    // ============================================================
    // Mutations
    // ============================================================

    pub fn register_vessel(&self, input: RegisterVesselInput) -> Result<Vessel, RegistryError> {
        let mut registry = self.registry.write().expect("registry lock poisoned");
        let code = input.registration_code.clone();

        match registry.register_vessel(input) {
            Ok(vessel) => {
                tracing::info!(
                    registration_code = %vessel.registration_code,
                    variant = vessel.vessel_type().as_str(),
                    "Vessel registered"
                );
                Ok(vessel.clone())
            }
            Err(e) => {
                tracing::warn!(registration_code = %code, reason = e.reason(), "Registration rejected: {}", e);
                Err(e)
            }
        }
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn find_vessel(&self, registration_code: &str) -> Option<VesselDetail> {
        let registry = self.registry.read().expect("registry lock poisoned");
        registry
            .find_vessel(registration_code)
            .cloned()
            .map(VesselDetail::from)
    }

    pub fn list_vessels(&self) -> Vec<VesselDetail> {
        let registry = self.registry.read().expect("registry lock poisoned");
        registry
            .vessels()
            .iter()
            .cloned()
            .map(VesselDetail::from)
            .collect()
    }

    pub fn capacity_summary(&self) -> CapacitySummary {
        let registry = self.registry.read().expect("registry lock poisoned");
        CapacitySummary {
            total_capacity: registry.compute_total_capacity(),
            vessel_count: registry.len(),
        }
    }
}
