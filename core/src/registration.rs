//! Per-user registration state.

use crate::catalog::EventId;
use crate::payment::PaymentStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Externally visible registration status for a user.
///
/// Derived from the registration set: a user with no registrations is
/// `Inactive`. The persistence collaborator stores this alongside the ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// The user holds at least one registration.
    Registered,
    /// The user holds no registrations.
    Inactive,
}

impl RegistrationStatus {
    /// Get the status as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Inactive => "inactive",
        }
    }
}

/// The set of events a user is registered for, plus their payment status.
///
/// Created implicitly (empty) when an account is created. Mutated only
/// through the eligibility evaluator's accept path (insert) and the
/// unconditional unregister action (remove); never deleted by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSet {
    /// Event identifiers currently held. Uniqueness is structural.
    pub event_ids: BTreeSet<EventId>,

    /// Payment lifecycle state for this user.
    pub payment_status: PaymentStatus,
}

impl RegistrationSet {
    /// An empty registration set with [`PaymentStatus::Unpaid`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from held event ids, keeping the given payment status.
    #[must_use]
    pub fn from_parts(
        event_ids: impl IntoIterator<Item = EventId>,
        payment_status: PaymentStatus,
    ) -> Self {
        Self {
            event_ids: event_ids.into_iter().collect(),
            payment_status,
        }
    }

    /// Whether the user already holds the given event.
    #[must_use]
    pub fn is_registered(&self, id: EventId) -> bool {
        self.event_ids.contains(&id)
    }

    /// Add an event to the set.
    ///
    /// Callers must have run the eligibility evaluator first; this method
    /// only maintains set semantics. Returns `false` if the id was already
    /// held (a no-op against the set).
    pub fn insert(&mut self, id: EventId) -> bool {
        self.event_ids.insert(id)
    }

    /// Remove an event from the set.
    ///
    /// Unconditional and idempotent: never blocked by quota rules, and a
    /// no-op (returning `false`) if the id is absent.
    pub fn remove(&mut self, id: EventId) -> bool {
        self.event_ids.remove(&id)
    }

    /// The externally visible status implied by the current set.
    #[must_use]
    pub fn status(&self) -> RegistrationStatus {
        if self.event_ids.is_empty() {
            RegistrationStatus::Inactive
        } else {
            RegistrationStatus::Registered
        }
    }

    /// Number of held registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.event_ids.len()
    }

    /// Whether the user holds no registrations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregister_is_idempotent() {
        let mut set = RegistrationSet::from_parts([EventId(3)], PaymentStatus::Unpaid);
        assert!(set.remove(EventId(3)));
        let after_once = set.clone();
        assert!(!set.remove(EventId(3)));
        assert_eq!(set, after_once);
    }

    #[test]
    fn test_status_tracks_emptiness() {
        let mut set = RegistrationSet::new();
        assert_eq!(set.status(), RegistrationStatus::Inactive);

        set.insert(EventId(1));
        assert_eq!(set.status(), RegistrationStatus::Registered);

        set.remove(EventId(1));
        assert_eq!(set.status(), RegistrationStatus::Inactive);
        assert!(set.is_empty());
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut set = RegistrationSet::new();
        assert!(set.insert(EventId(5)));
        assert!(!set.insert(EventId(5)));
        assert_eq!(set.len(), 1);
    }
}
