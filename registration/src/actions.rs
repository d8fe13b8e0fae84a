//! Registration actions.
//!
//! One unified input type for the registration reducers: commands (requests
//! to change state, triggered by UI interactions) and events (facts fed back
//! from executed effects or from external actors).

use crate::providers::{PaymentDetails, PaymentMethod, ProofUpload, ProofUrl};
use crate::state::Session;
use serde::{Deserialize, Serialize};
use symposium_core::catalog::EventId;
use symposium_core::eligibility::QuotaDenial;
use symposium_core::registration::{RegistrationSet, RegistrationStatus};

/// Actions for the registration feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegistrationAction {
    // ═══════════════════════════════════════════════════════════════════════
    // Session Commands
    // ═══════════════════════════════════════════════════════════════════════
    /// Create an account and sign in.
    SignUp {
        /// Email address.
        email: String,
        /// Password.
        password: String,
    },

    /// Sign in with existing credentials.
    SignIn {
        /// Email address.
        email: String,
        /// Password.
        password: String,
    },

    /// Sign out the current user.
    SignOut,

    /// Restore a previously established session, e.g. after a page reload.
    RestoreSession,

    /// Change the current user's password.
    UpdatePassword {
        /// Current password.
        current_password: String,
        /// Replacement password.
        new_password: String,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // Registration Commands
    // ═══════════════════════════════════════════════════════════════════════
    /// Fetch the current user's registration row from the store.
    LoadRegistration,

    /// Register the current user for an event, subject to the quota rules.
    Register {
        /// Candidate event.
        event_id: EventId,
    },

    /// Unregister the current user from an event. Never blocked by quota
    /// rules; a no-op if the event is not held.
    Unregister {
        /// Event to drop.
        event_id: EventId,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // Payment Commands
    // ═══════════════════════════════════════════════════════════════════════
    /// Submit a manual payment proof for the current registration set.
    SubmitPaymentProof {
        /// How the payment was made.
        method: PaymentMethod,
        /// User-supplied transaction reference.
        transaction_id: String,
        /// Proof file to upload.
        proof: ProofUpload,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // Session Events
    // ═══════════════════════════════════════════════════════════════════════
    /// The identity collaborator established a session.
    SessionEstablished {
        /// The new session.
        session: Session,
    },

    /// The session ended.
    SessionCleared,

    /// The password change was accepted.
    PasswordUpdated,

    /// The identity collaborator reported a failure.
    AuthFailed {
        /// Failure description, surfaced verbatim.
        reason: String,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // Registration Events
    // ═══════════════════════════════════════════════════════════════════════
    /// The store returned the user's registration row.
    RegistrationLoaded {
        /// The loaded registration set (empty for a fresh account).
        registration: RegistrationSet,
        /// The latest accepted payment submission, if any.
        payment_details: Option<PaymentDetails>,
    },

    /// A registration was accepted and persisted.
    RegistrationAccepted {
        /// The newly held event.
        event_id: EventId,
    },

    /// A registration was denied by the quota rules.
    RegistrationDenied {
        /// The candidate event.
        event_id: EventId,
        /// Which cap denied it.
        reason: QuotaDenial,
    },

    /// An unregistration was persisted.
    Unregistered {
        /// The dropped event.
        event_id: EventId,
        /// Status after the drop (`Inactive` when the set emptied).
        status: RegistrationStatus,
    },

    /// A store write failed; local state is rolled back where provided.
    RegistrationStoreFailed {
        /// What was being written.
        context: String,
        /// Failure description, surfaced verbatim.
        reason: String,
        /// Pre-attempt value to restore, if the write mutated local state.
        restore: Option<RegistrationSet>,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // Payment Events
    // ═══════════════════════════════════════════════════════════════════════
    /// The proof file was stored.
    ProofStored {
        /// Retrievable proof URL.
        url: ProofUrl,
        /// How the payment was made.
        method: PaymentMethod,
        /// User-supplied transaction reference.
        transaction_id: String,
    },

    /// The payment submission was persisted.
    PaymentRecorded {
        /// The accepted submission.
        details: PaymentDetails,
    },

    /// The proof upload or submission was rejected by a collaborator.
    PaymentRejected {
        /// Failure description, surfaced verbatim.
        reason: String,
    },

    /// An administrator verified the payment (external decision).
    PaymentVerified,

    /// An administrator rejected the payment (external decision).
    PaymentFailed {
        /// Reason recorded by the administrator.
        reason: String,
    },
}
