//! Collaborator traits.
//!
//! This module defines traits for all external dependencies used by the
//! registration feature. Providers are **interfaces**, not implementations:
//! the reducers depend on these traits, and the application shell provides
//! concrete implementations backed by the hosted platform.
//!
//! This enables:
//! - **Testing**: in-memory mocks, deterministic
//! - **Production**: real hosted services (identity, data store, blob storage)
//! - **Development**: instrumented versions (logging, tracing)

use crate::state::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use symposium_core::catalog::EventId;
use symposium_core::payment::PaymentStatus;
use symposium_core::registration::RegistrationStatus;

pub mod identity;
pub mod proof;
pub mod store;

// Re-export provider traits
pub use identity::IdentityProvider;
pub use proof::ProofStorage;
pub use store::RegistrationStore;

/// How a manual payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    /// UPI transfer.
    Upi,
    /// Bank transfer.
    BankTransfer,
}

impl PaymentMethod {
    /// Get the method name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upi => "upi",
            Self::BankTransfer => "bank-transfer",
        }
    }
}

/// A user's accepted payment submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    /// How the payment was made.
    pub method: PaymentMethod,

    /// User-supplied transaction reference.
    pub transaction_id: String,

    /// URL of the stored proof file.
    pub proof_url: ProofUrl,

    /// When the submission was accepted.
    pub submitted_at: DateTime<Utc>,
}

/// A candidate payment-proof file, validated locally before upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofUpload {
    /// Original file name.
    pub file_name: String,

    /// MIME type as reported by the browser.
    pub content_type: String,

    /// File contents.
    pub bytes: Vec<u8>,
}

impl ProofUpload {
    /// Size of the upload in bytes.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Retrievable URL of a stored proof file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofUrl(pub String);

impl fmt::Display for ProofUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user's registration row as held by the store collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRegistration {
    /// Owning user.
    pub user_id: UserId,

    /// Held event identifiers.
    pub event_ids: BTreeSet<EventId>,

    /// Externally visible registration status.
    pub status: RegistrationStatus,

    /// Payment lifecycle state.
    pub payment_status: PaymentStatus,

    /// Latest accepted payment submission, if any.
    pub payment_details: Option<PaymentDetails>,
}
