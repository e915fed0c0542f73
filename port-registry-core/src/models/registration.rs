use serde::{Deserialize, Serialize};

/// Raw field values for registering a vessel.
///
/// `variant` is kept as free text so that an unknown tag is reported as a
/// registration error rather than a malformed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterVesselInput {
    pub registration_code: String,
    pub nationality: String,
    /// Declared volume in m³.
    pub volume: f64,
    /// `sailing` or `cargo` (or `v` / `c`), case-insensitive.
    pub variant: String,
    /// Only used for sailing vessels.
    #[serde(default)]
    pub passenger_count: u32,
    /// Only used for cargo vessels.
    #[serde(default)]
    pub carries_liquids: bool,
}

impl RegisterVesselInput {
    pub fn sailing(
        registration_code: impl Into<String>,
        nationality: impl Into<String>,
        volume: f64,
        passenger_count: u32,
    ) -> Self {
        Self {
            registration_code: registration_code.into(),
            nationality: nationality.into(),
            volume,
            variant: "sailing".to_string(),
            passenger_count,
            carries_liquids: false,
        }
    }

    pub fn cargo(
        registration_code: impl Into<String>,
        nationality: impl Into<String>,
        volume: f64,
        carries_liquids: bool,
    ) -> Self {
        Self {
            registration_code: registration_code.into(),
            nationality: nationality.into(),
            volume,
            variant: "cargo".to_string(),
            passenger_count: 0,
            carries_liquids,
        }
    }
}
