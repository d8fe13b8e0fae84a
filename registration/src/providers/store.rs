//! Registration store collaborator trait.

use crate::error::Result;
use crate::providers::{PaymentDetails, StoredRegistration};
use crate::state::UserId;
use std::collections::BTreeSet;
use std::future::Future;
use symposium_core::catalog::EventId;
use symposium_core::payment::PaymentStatus;
use symposium_core::registration::RegistrationStatus;

/// Registration store collaborator.
///
/// Abstracts over the hosted data store holding per-user registration rows.
/// The reducers compute the new state first and call these operations
/// afterwards; the store is the durability boundary, not the decision
/// maker. Races between two concurrent writers for the same user are the
/// store's responsibility (conditional update), not this core's.
pub trait RegistrationStore: Send + Sync {
    /// Fetch a user's registration row.
    ///
    /// Returns `None` when no row exists yet (a fresh account).
    ///
    /// # Errors
    ///
    /// Returns error if the store query fails.
    fn get(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<StoredRegistration>>> + Send;

    /// Replace the user's held event ids.
    ///
    /// # Errors
    ///
    /// Returns error if the store write fails.
    fn set_event_ids(
        &self,
        user_id: UserId,
        event_ids: &BTreeSet<EventId>,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Record the externally visible registration status.
    ///
    /// # Errors
    ///
    /// Returns error if the store write fails.
    fn set_registration_status(
        &self,
        user_id: UserId,
        status: RegistrationStatus,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Record the user's payment status.
    ///
    /// # Errors
    ///
    /// Returns error if the store write fails.
    fn set_payment_status(
        &self,
        user_id: UserId,
        status: PaymentStatus,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Record an accepted payment submission.
    ///
    /// # Errors
    ///
    /// Returns error if the store write fails.
    fn set_payment_details(
        &self,
        user_id: UserId,
        details: &PaymentDetails,
    ) -> impl Future<Output = Result<()>> + Send;
}
