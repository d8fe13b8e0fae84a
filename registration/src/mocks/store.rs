//! Mock registration store for testing.

use crate::error::{RegistrationError, Result};
use crate::providers::{PaymentDetails, RegistrationStore, StoredRegistration};
use crate::state::UserId;
use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::sync::{Arc, Mutex};
use symposium_core::catalog::EventId;
use symposium_core::payment::PaymentStatus;
use symposium_core::registration::RegistrationStatus;

/// Mock registration store.
///
/// Uses in-memory storage for testing. Writes upsert: a missing row is
/// created empty before the write is applied, matching the "created
/// implicitly with the account" model.
#[derive(Debug, Clone)]
pub struct MockRegistrationStore {
    rows: Arc<Mutex<HashMap<UserId, StoredRegistration>>>,
    write_failure: Arc<Mutex<Option<String>>>,
}

impl MockRegistrationStore {
    /// Create a new mock registration store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(HashMap::new())),
            write_failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Make every subsequent write fail with the given reason, or clear the
    /// failure with `None`. Reads are unaffected.
    pub fn set_write_failure(&self, reason: Option<&str>) {
        if let Ok(mut guard) = self.write_failure.lock() {
            *guard = reason.map(ToString::to_string);
        }
    }

    /// The stored row for a user, for test assertions.
    #[must_use]
    pub fn row(&self, user_id: UserId) -> Option<StoredRegistration> {
        self.rows
            .lock()
            .ok()
            .and_then(|rows| rows.get(&user_id).cloned())
    }

    fn check_write_failure(failure: &Mutex<Option<String>>) -> Result<()> {
        match failure.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(reason) => Err(RegistrationError::StoreFailed(reason.clone())),
                None => Ok(()),
            },
            Err(_) => Err(RegistrationError::InternalError),
        }
    }

    fn with_row<F>(rows: &Mutex<HashMap<UserId, StoredRegistration>>, user_id: UserId, apply: F) -> Result<()>
    where
        F: FnOnce(&mut StoredRegistration),
    {
        let mut rows_guard = rows.lock().map_err(|_| RegistrationError::InternalError)?;
        let row = rows_guard
            .entry(user_id)
            .or_insert_with(|| StoredRegistration {
                user_id,
                event_ids: BTreeSet::new(),
                status: RegistrationStatus::Inactive,
                payment_status: PaymentStatus::Unpaid,
                payment_details: None,
            });
        apply(row);
        Ok(())
    }
}

impl Default for MockRegistrationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationStore for MockRegistrationStore {
    fn get(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<StoredRegistration>>> + Send {
        let rows = Arc::clone(&self.rows);

        async move {
            Ok(rows
                .lock()
                .map_err(|_| RegistrationError::InternalError)?
                .get(&user_id)
                .cloned())
        }
    }

    fn set_event_ids(
        &self,
        user_id: UserId,
        event_ids: &BTreeSet<EventId>,
    ) -> impl Future<Output = Result<()>> + Send {
        let rows = Arc::clone(&self.rows);
        let failure = Arc::clone(&self.write_failure);
        let event_ids = event_ids.clone();

        async move {
            Self::check_write_failure(&failure)?;
            Self::with_row(&rows, user_id, |row| row.event_ids = event_ids)
        }
    }

    fn set_registration_status(
        &self,
        user_id: UserId,
        status: RegistrationStatus,
    ) -> impl Future<Output = Result<()>> + Send {
        let rows = Arc::clone(&self.rows);
        let failure = Arc::clone(&self.write_failure);

        async move {
            Self::check_write_failure(&failure)?;
            Self::with_row(&rows, user_id, |row| row.status = status)
        }
    }

    fn set_payment_status(
        &self,
        user_id: UserId,
        status: PaymentStatus,
    ) -> impl Future<Output = Result<()>> + Send {
        let rows = Arc::clone(&self.rows);
        let failure = Arc::clone(&self.write_failure);

        async move {
            Self::check_write_failure(&failure)?;
            Self::with_row(&rows, user_id, |row| row.payment_status = status)
        }
    }

    fn set_payment_details(
        &self,
        user_id: UserId,
        details: &PaymentDetails,
    ) -> impl Future<Output = Result<()>> + Send {
        let rows = Arc::clone(&self.rows);
        let failure = Arc::clone(&self.write_failure);
        let details = details.clone();

        async move {
            Self::check_write_failure(&failure)?;
            Self::with_row(&rows, user_id, |row| row.payment_details = Some(details))
        }
    }
}
