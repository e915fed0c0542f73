use thiserror::Error;

/// Reasons a vessel registration is rejected.
///
/// A rejected registration never changes the registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("Registration code must not be empty")]
    MissingRegistrationCode,

    #[error("A vessel with registration code '{0}' is already registered")]
    DuplicateRegistration(String),

    #[error("Invalid volume {0}: must be greater than 0 and at most 1000")]
    InvalidVolume(f64),

    #[error("Unrecognized vessel variant '{0}': expected 'sailing' or 'cargo'")]
    UnrecognizedVariant(String),
}

impl RegistryError {
    /// Short machine-readable reason, used as a structured log field.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingRegistrationCode => "missing_registration_code",
            Self::DuplicateRegistration(_) => "duplicate_registration",
            Self::InvalidVolume(_) => "invalid_volume",
            Self::UnrecognizedVariant(_) => "unrecognized_variant",
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
