use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hold volume, in m³, that each passenger of a sailing vessel takes up.
pub const PASSENGER_SPACE: f64 = 2.0;

/// Fraction of a liquid-carrying cargo vessel's volume left after tanks.
pub const LIQUID_TANK_FACTOR: f64 = 0.8;

/// A vessel docked at the port.
///
/// Vessels are immutable once registered. The registration code is unique
/// within a registry; the variant-specific data lives in [`VesselKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    pub registration_code: String,
    pub nationality: String,
    /// Declared volume in m³, always in `(0, 1000]`.
    pub volume: f64,
    #[serde(flatten)]
    pub kind: VesselKind,
    pub registered_at: DateTime<Utc>,
}

impl Vessel {
    /// Usable capacity of this vessel, in m³.
    pub fn capacity(&self) -> f64 {
        self.kind.capacity(self.volume)
    }

    pub fn vessel_type(&self) -> VesselType {
        self.kind.vessel_type()
    }
}

/// The variant of a vessel together with the data only that variant carries.
///
/// Serialized with a `variant` tag next to the vessel's common fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum VesselKind {
    Sailing { passenger_count: u32 },
    Cargo { carries_liquids: bool },
}

impl VesselKind {
    /// Capacity of a vessel of this kind with the given declared volume.
    pub fn capacity(&self, volume: f64) -> f64 {
        match *self {
            Self::Sailing { passenger_count } => sailing_capacity(volume, passenger_count),
            Self::Cargo { carries_liquids } => cargo_capacity(volume, carries_liquids),
        }
    }

    pub fn vessel_type(&self) -> VesselType {
        match self {
            Self::Sailing { .. } => VesselType::Sailing,
            Self::Cargo { .. } => VesselType::Cargo,
        }
    }
}

/// Sailing vessels lose [`PASSENGER_SPACE`] per passenger, never below zero.
pub fn sailing_capacity(volume: f64, passenger_count: u32) -> f64 {
    (volume - f64::from(passenger_count) * PASSENGER_SPACE).max(0.0)
}

/// Cargo vessels carrying liquids keep [`LIQUID_TANK_FACTOR`] of their volume.
pub fn cargo_capacity(volume: f64, carries_liquids: bool) -> f64 {
    if carries_liquids {
        volume * LIQUID_TANK_FACTOR
    } else {
        volume
    }
}

/// The variant tag accepted at registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VesselType {
    Sailing,
    Cargo,
}

impl VesselType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sailing => "sailing",
            Self::Cargo => "cargo",
        }
    }

    /// Parses a variant tag, ignoring case and surrounding whitespace.
    /// The single-letter tags `v` (velero) and `c` are accepted as aliases.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sailing" | "v" => Some(Self::Sailing),
            "cargo" | "c" => Some(Self::Cargo),
            _ => None,
        }
    }
}
