//! Registration feature state types.
//!
//! All types are `Clone` to support the functional architecture pattern.

use crate::error::RegistrationError;
use crate::providers::PaymentDetails;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use symposium_core::eligibility::QuotaDenial;
use symposium_core::registration::RegistrationSet;

/// Unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub uuid::Uuid);

impl UserId {
    /// Generate a new random `UserId`.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// Authenticated user context supplied by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User identifier.
    pub user_id: UserId,

    /// User's email address.
    pub email: String,

    /// When the session was established.
    pub created_at: DateTime<Utc>,
}

/// Root registration feature state.
///
/// This is the state managed by the registration reducer: the current
/// session, the user's registration set, and the latest denial or error to
/// surface in the UI.
///
/// # Examples
///
/// ```
/// # use symposium_registration::RegistrationState;
/// let state = RegistrationState::default();
/// assert!(state.session.is_none());
/// assert!(state.registration.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationState {
    /// Current session (if logged in).
    pub session: Option<Session>,

    /// The user's registration set (event ids + payment status).
    pub registration: RegistrationSet,

    /// The user's latest accepted payment submission, if any.
    pub payment_details: Option<PaymentDetails>,

    /// The most recent quota denial, if the last register attempt was
    /// denied. Cleared by the next accepted mutation.
    pub last_denial: Option<QuotaDenial>,

    /// The most recent error to surface, if any. Cleared by the next
    /// successful operation.
    pub last_error: Option<RegistrationError>,
}

impl RegistrationState {
    /// The signed-in user's id, if a session exists.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.session.as_ref().map(|session| session.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_generation() {
        let id1 = UserId::new();
        let id2 = UserId::new();

        // IDs should be unique
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_default_state_is_signed_out() {
        let state = RegistrationState::default();
        assert_eq!(state.user_id(), None);
        assert!(state.last_denial.is_none());
        assert!(state.last_error.is_none());
    }
}
