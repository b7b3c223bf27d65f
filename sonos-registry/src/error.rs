use thiserror::Error;

/// Failures reported by a speaker or by the discovery collaborator
///
/// Mirrors the failure modes of the UPnP/SOAP layer so callers can tell a
/// dead network from a device that refused a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// The device could not be reached or the request timed out
    #[error("Network error: {0}")]
    Network(String),

    /// The device answered with something that could not be understood
    #[error("Parse error: {0}")]
    Parse(String),

    /// SOAP fault returned by the device
    #[error("SOAP fault: error code {0}")]
    SoapFault(u16),

    /// The device refused the command, e.g. transport control sent to a
    /// group member that is not the coordinator
    #[error("Device rejected command: {0}")]
    Rejected(String),
}

/// Errors surfaced by the registry and the services built on it
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Speaker not found: {0}")]
    SpeakerNotFound(String),

    #[error("Favorite '{name}' not found. Available: {available:?}")]
    FavoriteNotFound { name: String, available: Vec<String> },

    #[error("No speakers available")]
    NoSpeakers,

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("Sweep task shutdown failed: {0}")]
    Shutdown(String),
}

impl RegistryError {
    /// True for every error that means "the thing you asked for does not exist"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::SpeakerNotFound(_)
                | RegistryError::FavoriteNotFound { .. }
                | RegistryError::NoSpeakers
        )
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
