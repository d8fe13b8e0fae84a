//! Error types for registration and payment operations.

use symposium_core::catalog::EventId;
use symposium_core::payment::PaymentStatus;
use thiserror::Error;

/// Result type alias for registration operations.
pub type Result<T> = std::result::Result<T, RegistrationError>;

/// Error taxonomy for the registration feature.
///
/// Quota denials are deliberately absent: a denial is an expected, named
/// outcome (`QuotaDenial`), not an error. Likewise, invalid payment-status
/// transitions are reported through `TransitionError` by the core.
#[derive(Debug, Error, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationError {
    // ═══════════════════════════════════════════════════════════
    // Validation Failures (detected locally, no collaborator call)
    // ═══════════════════════════════════════════════════════════

    /// Malformed email address.
    #[error("Invalid email address")]
    InvalidEmail,

    /// Password shorter than the configured minimum.
    #[error("Password must be at least {minimum} characters")]
    PasswordTooShort {
        /// Configured minimum length.
        minimum: usize,
    },

    /// A required field was empty.
    #[error("Missing required field: {name}")]
    MissingField {
        /// Field name.
        // `&'static str` cannot be deserialized from non-static input, so
        // deserialization fills in the `Default` ("").
        #[serde(skip_deserializing)]
        name: &'static str,
    },

    /// Payment proof file exceeds the size limit.
    #[error("Payment proof is {size_bytes} bytes; the limit is {limit_bytes} bytes")]
    ProofTooLarge {
        /// Size of the rejected upload.
        size_bytes: u64,
        /// Configured limit.
        limit_bytes: u64,
    },

    /// Payment proof file has an unaccepted MIME type.
    #[error("Payment proof must be an image or PDF, not {content_type}")]
    UnsupportedProofType {
        /// MIME type of the rejected upload.
        content_type: String,
    },

    /// The event id is not present in the catalog.
    #[error("Unknown event: {0}")]
    UnknownEvent(EventId),

    /// A payment submission is not allowed in the current status.
    #[error("A payment submission is not allowed while payment status is {status}")]
    SubmissionNotAllowed {
        /// The payment status that blocked the submission.
        status: PaymentStatus,
    },

    // ═══════════════════════════════════════════════════════════
    // Preconditions
    // ═══════════════════════════════════════════════════════════

    /// No authenticated user; the caller must redirect to login.
    #[error("Not signed in")]
    NotAuthenticated,

    // ═══════════════════════════════════════════════════════════
    // Collaborator Failures (propagated unchanged, no retry)
    // ═══════════════════════════════════════════════════════════

    /// The identity collaborator reported a failure.
    #[error("Authentication failed: {0}")]
    IdentityFailed(String),

    /// The registration store reported a failure.
    #[error("Could not save your registration: {0}")]
    StoreFailed(String),

    /// The proof storage collaborator reported a failure.
    #[error("Could not upload your payment proof: {0}")]
    StorageFailed(String),

    // ═══════════════════════════════════════════════════════════
    // Inconsistent External State (recoverable: re-fetch, redirect)
    // ═══════════════════════════════════════════════════════════

    /// No registration row exists where one was expected.
    #[error("No registration found")]
    RegistrationMissing,

    // ═══════════════════════════════════════════════════════════
    // System Errors
    // ═══════════════════════════════════════════════════════════

    /// Internal error (should not be exposed to users).
    #[error("Internal error")]
    InternalError,
}

impl RegistrationError {
    /// Returns `true` if this error is due to invalid user input and should
    /// be shown as a field-level message rather than a notification.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail
                | Self::PasswordTooShort { .. }
                | Self::MissingField { .. }
                | Self::ProofTooLarge { .. }
                | Self::UnsupportedProofType { .. }
                | Self::SubmissionNotAllowed { .. }
        )
    }

    /// Returns `true` if the caller should re-fetch state and redirect
    /// rather than surface the error as terminal.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::RegistrationMissing | Self::NotAuthenticated)
    }
}
