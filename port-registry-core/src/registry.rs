use chrono::Utc;

use crate::error::{RegistryError, Result};
use crate::models::{RegisterVesselInput, Vessel, VesselKind, VesselType};

/// Largest volume, in m³, a vessel may declare.
pub const MAX_VOLUME: f64 = 1000.0;

/// In-memory registry of the vessels docked at a port.
///
/// Vessels are kept in registration order. The registry is the only owner of
/// its vessels; callers get shared borrows.
#[derive(Debug, Default)]
pub struct VesselRegistry {
    vessels: Vec<Vessel>,
}

impl VesselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the capacities of every registered vessel. Zero when empty.
    pub fn compute_total_capacity(&self) -> f64 {
        self.vessels.iter().map(Vessel::capacity).sum()
    }

    /// Validates and registers a new vessel of the requested variant.
    ///
    /// Checks run in a fixed order: empty code, duplicate code, volume range,
    /// then the variant tag. Any failure leaves the registry unchanged.
    pub fn register_vessel(&mut self, input: RegisterVesselInput) -> Result<&Vessel> {
        if input.registration_code.trim().is_empty() {
            return Err(RegistryError::MissingRegistrationCode);
        }

        if self.contains(&input.registration_code) {
            return Err(RegistryError::DuplicateRegistration(input.registration_code));
        }

        if !is_volume_allowed(input.volume) {
            return Err(RegistryError::InvalidVolume(input.volume));
        }

        let kind = match VesselType::from_str(&input.variant) {
            Some(VesselType::Sailing) => VesselKind::Sailing {
                passenger_count: input.passenger_count,
            },
            Some(VesselType::Cargo) => VesselKind::Cargo {
                carries_liquids: input.carries_liquids,
            },
            None => return Err(RegistryError::UnrecognizedVariant(input.variant)),
        };

        tracing::debug!(
            registration_code = %input.registration_code,
            variant = kind.vessel_type().as_str(),
            volume = input.volume,
            "Registering vessel"
        );

        let index = self.vessels.len();
        self.vessels.push(Vessel {
            registration_code: input.registration_code,
            nationality: input.nationality,
            volume: input.volume,
            kind,
            registered_at: Utc::now(),
        });

        // `index` was just filled by the push above.
        Ok(&self.vessels[index])
    }

    /// Finds a vessel by exact registration code.
    pub fn find_vessel(&self, registration_code: &str) -> Option<&Vessel> {
        self.vessels
            .iter()
            .find(|v| v.registration_code == registration_code)
    }

    /// All vessels, in registration order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    fn contains(&self, registration_code: &str) -> bool {
        self.find_vessel(registration_code).is_some()
    }
}

/// A volume is allowed when it lies in `(0, MAX_VOLUME]`. NaN never is.
fn is_volume_allowed(volume: f64) -> bool {
    volume > 0.0 && volume <= MAX_VOLUME
}
