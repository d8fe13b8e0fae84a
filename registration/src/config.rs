//! Registration feature configuration.
//!
//! Configuration values should be provided by the application, not
//! hardcoded; the defaults match the limits the hosted collaborators
//! enforce on their side.

use crate::constants::{ALLOWED_PROOF_TYPES, MAX_PROOF_BYTES, MIN_PASSWORD_LEN};
use crate::error::{RegistrationError, Result};
use crate::providers::ProofUpload;

/// Registration feature configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    /// Minimum password length for signup and password changes.
    ///
    /// Default: 8
    pub min_password_len: usize,

    /// Maximum accepted payment-proof size in bytes.
    ///
    /// Default: 5 MB
    pub max_proof_bytes: u64,

    /// MIME types accepted for payment-proof uploads.
    pub allowed_proof_types: Vec<String>,
}

impl RegistrationConfig {
    /// Create a configuration with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum password length.
    #[must_use]
    pub const fn with_min_password_len(mut self, minimum: usize) -> Self {
        self.min_password_len = minimum;
        self
    }

    /// Set the maximum proof size.
    #[must_use]
    pub const fn with_max_proof_bytes(mut self, limit: u64) -> Self {
        self.max_proof_bytes = limit;
        self
    }

    /// Set the accepted proof MIME types.
    #[must_use]
    pub fn with_allowed_proof_types(mut self, types: Vec<String>) -> Self {
        self.allowed_proof_types = types;
        self
    }

    /// Validate a password against the configured minimum.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::PasswordTooShort`] when the password is
    /// below the minimum.
    pub fn validate_password(&self, password: &str) -> Result<()> {
        if password.chars().count() < self.min_password_len {
            return Err(RegistrationError::PasswordTooShort {
                minimum: self.min_password_len,
            });
        }
        Ok(())
    }

    /// Validate a proof upload locally, before any storage call.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::ProofTooLarge`] or
    /// [`RegistrationError::UnsupportedProofType`] for rejected uploads.
    pub fn validate_proof(&self, upload: &ProofUpload) -> Result<()> {
        if upload.size_bytes() > self.max_proof_bytes {
            return Err(RegistrationError::ProofTooLarge {
                size_bytes: upload.size_bytes(),
                limit_bytes: self.max_proof_bytes,
            });
        }
        if !self
            .allowed_proof_types
            .iter()
            .any(|accepted| accepted == &upload.content_type)
        {
            return Err(RegistrationError::UnsupportedProofType {
                content_type: upload.content_type.clone(),
            });
        }
        Ok(())
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_password_len: MIN_PASSWORD_LEN,
            max_proof_bytes: MAX_PROOF_BYTES,
            allowed_proof_types: ALLOWED_PROOF_TYPES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: &str, size: usize) -> ProofUpload {
        ProofUpload {
            file_name: "receipt.png".to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0; size],
        }
    }

    #[test]
    fn test_config_builder() {
        let config = RegistrationConfig::new()
            .with_min_password_len(12)
            .with_max_proof_bytes(1024);

        assert_eq!(config.min_password_len, 12);
        assert_eq!(config.max_proof_bytes, 1024);
    }

    #[test]
    fn test_password_validation() {
        let config = RegistrationConfig::default();
        assert_eq!(config.validate_password("long enough"), Ok(()));
        assert_eq!(
            config.validate_password("short"),
            Err(RegistrationError::PasswordTooShort { minimum: 8 })
        );
    }

    #[test]
    fn test_proof_size_limit() {
        let config = RegistrationConfig::default().with_max_proof_bytes(100);
        assert_eq!(config.validate_proof(&upload("image/png", 100)), Ok(()));
        assert_eq!(
            config.validate_proof(&upload("image/png", 101)),
            Err(RegistrationError::ProofTooLarge {
                size_bytes: 101,
                limit_bytes: 100,
            })
        );
    }

    #[test]
    fn test_proof_type_limit() {
        let config = RegistrationConfig::default();
        assert_eq!(config.validate_proof(&upload("application/pdf", 10)), Ok(()));
        assert_eq!(
            config.validate_proof(&upload("text/html", 10)),
            Err(RegistrationError::UnsupportedProofType {
                content_type: "text/html".to_string(),
            })
        );
    }
}
