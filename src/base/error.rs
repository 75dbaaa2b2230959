use crate::emulation::{Browser, BrowserVersion};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImpersonateError {
    // Profile assembly
    #[error("No fingerprint table entry for {browser} {version}")]
    UnsupportedIdentity {
        browser: Browser,
        version: BrowserVersion,
    },
    #[error("Unknown browser: {0}")]
    UnknownBrowser(String),
    #[error("Unknown operating system: {0}")]
    UnknownOs(String),
    #[error("Invalid browser version: {0}")]
    InvalidVersion(String),

    // Headers
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),
    #[error("Invalid header value for {0}")]
    InvalidHeaderValue(String),

    // Boundary generation
    #[error("Secure random source failed: {0}")]
    RandomSource(#[from] rand::Error),

    // Profile export
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ImpersonateError {
    /// Whether this error came from profile assembly (as opposed to request time).
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ImpersonateError::UnsupportedIdentity { .. }
                | ImpersonateError::UnknownBrowser(_)
                | ImpersonateError::UnknownOs(_)
                | ImpersonateError::InvalidVersion(_)
        )
    }
}
